// src/pages/mod.rs — view shapes built from cards.
//
// Rails and lists decide rank and category here, before any markup, so
// the rules can be checked on the host.

mod full_list;
mod home;
mod not_found;

use std::rc::Rc;

use yew::prelude::*;

pub use full_list::{FullListPage, SectionPage};
pub use home::HomePage;
pub use not_found::NotFoundPage;

use crate::card::{CardModel, ContentCard};
use crate::catalogue::{Catalogue, CatalogueEntry, Category};
use crate::sections::Section;

/// One card position in a rendered list.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSlot {
    pub entry: Rc<CatalogueEntry>,
    pub rank: usize,
    /// `None` leaves the category prop off so the card picks its default.
    pub category: Option<Category>,
}

impl CardSlot {
    pub fn key(&self) -> String {
        self.entry.key()
    }

    /// What the card will show for this slot.
    pub fn model(&self) -> CardModel {
        CardModel::new(&self.entry, self.rank, self.category.unwrap_or_default())
    }
}

/// Rail cards: the first `cap` entries (all of them without a cap), every
/// card carrying the rail's declared category, if it declares one.
pub fn rail_slots(
    entries: &[Rc<CatalogueEntry>],
    cap: Option<usize>,
    category: Option<Category>,
) -> Vec<CardSlot> {
    entries
        .iter()
        .take(cap.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, entry)| CardSlot {
            entry: Rc::clone(entry),
            rank: i + 1,
            category,
        })
        .collect()
}

/// The Home rail for one section, with that section's cap and category.
pub fn home_rail(section: Section, catalogue: &Catalogue) -> Vec<CardSlot> {
    rail_slots(
        section.entries(catalogue),
        section.rail_cap(),
        section.rail_category(),
    )
}

/// Full list: every entry, category inferred per entry from its year.
pub fn list_slots(entries: &[Rc<CatalogueEntry>]) -> Vec<CardSlot> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| CardSlot {
            entry: Rc::clone(entry),
            rank: i + 1,
            category: Some(Category::infer(entry)),
        })
        .collect()
}

fn card(slot: CardSlot) -> Html {
    let key = slot.key();
    match slot.category {
        Some(category) => html! {
            <ContentCard key={key} entry={slot.entry} rank={slot.rank} {category} />
        },
        None => html! {
            <ContentCard key={key} entry={slot.entry} rank={slot.rank} />
        },
    }
}
