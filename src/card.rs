// src/card.rs
use std::rc::Rc;

use gloo::console::warn;
use yew::prelude::*;

use crate::catalogue::{CatalogueEntry, Category};

/// Everything a card shows, minus the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub rank: usize,
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

impl CardModel {
    pub fn new(entry: &CatalogueEntry, rank: usize, category: Category) -> Self {
        Self {
            rank,
            title: entry.title.clone(),
            subtitle: subtitle(entry, category),
            image: entry.image.clone(),
        }
    }

    pub fn rank_label(&self) -> String {
        self.rank.to_string()
    }
}

/// "{year} · {genre}" for films, the bare genre for series.
/// A film with no year keeps the separator and leaves the year blank.
pub fn subtitle(entry: &CatalogueEntry, category: Category) -> String {
    match category {
        Category::Film => format!(
            "{} · {}",
            entry.year.as_deref().unwrap_or_default(),
            entry.genre
        ),
        Category::Series => entry.genre.clone(),
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentCardProps {
    pub entry: Rc<CatalogueEntry>,
    pub rank: usize,
    #[prop_or_default]
    pub category: Category,
}

#[function_component(ContentCard)]
pub fn content_card(props: &ContentCardProps) -> Html {
    let model = CardModel::new(&props.entry, props.rank, props.category);
    let broken = use_state(|| false);

    let on_error = {
        let broken = broken.clone();
        let title = model.title.clone();
        let src = model.image.clone();
        Callback::from(move |_: Event| {
            if !*broken {
                warn!(format!("artwork failed to load for \"{title}\": {src}"));
                broken.set(true);
            }
        })
    };

    let art = if *broken {
        html! {
            <div class="card-art card-art-missing">
                <span>{ model.title.clone() }</span>
            </div>
        }
    } else {
        html! {
            <img
                class="card-art"
                src={model.image.clone()}
                alt={model.title.clone()}
                loading="lazy"
                onerror={on_error}
            />
        }
    };

    html! {
        <div class="card">
            <div class="card-frame">
                { art }
                <div class="card-shade"></div>
            </div>
            <div class="card-meta">
                <div class="rank">{ model.rank_label() }</div>
                <div>
                    <h4 class="card-title">{ model.title.clone() }</h4>
                    <p class="card-sub">{ model.subtitle.clone() }</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GORGE_ART: &str =
        "https://is1-ssl.mzstatic.com/image/thumb/3pfG0GJkoI0OFlPiIDdvUQ/680x382.webp";

    #[test]
    fn test_film_card_at_rank_three() {
        let gorge = CatalogueEntry::film(1, "The Gorge", "2025", "Thriller", GORGE_ART);
        let card = CardModel::new(&gorge, 3, Category::Film);

        assert_eq!(card.rank_label(), "3");
        assert_eq!(card.title, "The Gorge");
        assert_eq!(card.subtitle, "2025 · Thriller");
        assert_eq!(card.image, GORGE_ART);
    }

    #[test]
    fn test_series_formatting_ignores_year() {
        let gorge = CatalogueEntry::film(1, "The Gorge", "2025", "Thriller", GORGE_ART);
        assert_eq!(subtitle(&gorge, Category::Series), "Thriller");
    }

    #[test]
    fn test_default_category_is_series() {
        let gorge = CatalogueEntry::film(1, "The Gorge", "2025", "Thriller", GORGE_ART);
        let card = CardModel::new(&gorge, 1, Category::default());
        assert_eq!(card.subtitle, "Thriller");
    }

    #[test]
    fn test_film_without_year_leaves_blank_segment() {
        let mut entry = CatalogueEntry::film(2, "Untitled", "", "Drama", GORGE_ART);
        entry.year = None;
        assert_eq!(subtitle(&entry, Category::Film), " · Drama");
    }

    #[test]
    fn test_missing_genre_renders_empty() {
        let entry = CatalogueEntry::series(5, "Quiet", "", GORGE_ART);
        assert_eq!(subtitle(&entry, Category::Series), "");
    }
}
