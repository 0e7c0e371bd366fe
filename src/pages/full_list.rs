// src/pages/full_list.rs
use std::rc::Rc;

use gloo::events::EventListener;
use yew::prelude::*;

use super::{card, list_slots};
use crate::app::use_catalogue;
use crate::catalogue::CatalogueEntry;
use crate::config::{grid_columns, DEFAULT_VIEWPORT_PX};
use crate::sections::Section;

#[derive(Properties, PartialEq)]
pub struct FullListPageProps {
    pub title: AttrValue,
    pub items: Vec<Rc<CatalogueEntry>>,
}

fn viewport_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(DEFAULT_VIEWPORT_PX)
}

#[function_component(FullListPage)]
pub fn full_list_page(props: &FullListPageProps) -> Html {
    let columns = use_state(|| grid_columns(viewport_width()));

    // Re-pick the column count when the window is resized.
    {
        let columns = columns.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|win| {
                EventListener::new(&win, "resize", move |_| {
                    columns.set(grid_columns(viewport_width()));
                })
            });
            move || drop(listener)
        });
    }

    let grid_style = format!(
        "grid-template-columns: repeat({}, minmax(0, 1fr));",
        *columns
    );

    html! {
        <div>
            <h1 class="list-title">{ props.title.clone() }</h1>
            <div class="grid" style={grid_style}>
                { for list_slots(&props.items).into_iter().map(card) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionPageProps {
    pub section: Section,
}

/// Routed full list for one section, fed from the shared catalogue.
#[function_component(SectionPage)]
pub fn section_page(props: &SectionPageProps) -> Html {
    let catalogue = use_catalogue();
    let items = props.section.entries(&catalogue).to_vec();

    html! {
        <FullListPage title={props.section.list_title()} {items} />
    }
}
