// src/pages/home.rs
use yew::prelude::*;

use super::{card, home_rail};
use crate::app::use_catalogue;
use crate::catalogue::Catalogue;
use crate::section_header::SectionHeader;
use crate::sections::Section;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let catalogue = use_catalogue();

    html! {
        <>
            { for Section::HOME_ORDER.iter().map(|section| rail(*section, &catalogue)) }
        </>
    }
}

fn rail(section: Section, catalogue: &Catalogue) -> Html {
    html! {
        <section class="rail-section" key={section.slug()}>
            <SectionHeader title={section.rail_title()} to={Some(section.route())} />
            <div class="rail">
                { for home_rail(section, catalogue).into_iter().map(card) }
            </div>
        </section>
    }
}
