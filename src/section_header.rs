// src/section_header.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    /// Full list this header links to. No chevron without one.
    #[prop_or_default]
    pub to: Option<Route>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <h2>{ props.title.clone() }</h2>
            if let Some(route) = props.to.clone() {
                <Link<Route> to={route} classes={classes!("chevron")}>
                    <svg viewBox="0 0 24 24" width="24" height="24" fill="none"
                        stroke="currentColor" stroke-width="2"
                        stroke-linecap="round" stroke-linejoin="round">
                        <path d="m9 18 6-6-6-6" />
                    </svg>
                </Link<Route>>
            }
        </div>
    }
}
