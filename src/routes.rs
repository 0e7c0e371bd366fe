// src/routes.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{HomePage, NotFoundPage, SectionPage};
use crate::sections::Section;

#[derive(Debug, Clone, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tvshows")]
    TvShows,
    #[at("/movies")]
    Movies,
    #[at("/must-see")]
    MustSee,
    // Older links point here.
    #[at("/mustsee")]
    MustSeeLegacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Full list shown at this route, if any. The legacy alias only redirects.
    pub fn section(&self) -> Option<Section> {
        match self {
            Route::TvShows => Some(Section::TvShows),
            Route::Movies => Some(Section::Movies),
            Route::MustSee => Some(Section::MustSee),
            Route::Home | Route::MustSeeLegacy | Route::NotFound => None,
        }
    }

    /// What `switch` mounts for this route.
    pub fn view(&self) -> RouteView {
        match self {
            Route::Home => RouteView::Home,
            Route::MustSeeLegacy => RouteView::ReplaceWith(Route::MustSee),
            Route::NotFound => RouteView::NotFound,
            other => match other.section() {
                Some(section) => RouteView::List(section),
                None => RouteView::NotFound,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteView {
    Home,
    List(Section),
    /// Swap the current history entry for another route, rendering nothing.
    ReplaceWith(Route),
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct ReplaceRouteProps {
    pub to: Route,
}

/// Like `Redirect`, but replaces the history entry so Back skips the alias.
#[function_component(ReplaceRoute)]
pub fn replace_route(props: &ReplaceRouteProps) -> Html {
    let navigator = use_navigator();
    use_effect_with(props.to.clone(), move |to| {
        if let Some(navigator) = navigator {
            navigator.replace(to);
        }
        || ()
    });
    html! {}
}

pub fn switch(route: Route) -> Html {
    match route.view() {
        RouteView::Home => html! { <HomePage /> },
        RouteView::List(section) => html! { <SectionPage {section} /> },
        RouteView::ReplaceWith(to) => html! { <ReplaceRoute {to} /> },
        RouteView::NotFound => html! { <NotFoundPage /> },
    }
}
