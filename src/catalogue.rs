// src/catalogue.rs — the read-only catalogue every view draws from.
//
// Two sections (series, films) plus `highlighted`, which is always
// series followed by films. Entries are shared through Rc so the
// highlighted sequence never copies anything.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

use crate::config::CATALOGUE_JSON;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Series,
    Film,
}

impl Category {
    /// Film when the entry carries a non-empty year, series otherwise.
    pub fn infer(entry: &CatalogueEntry) -> Self {
        match entry.year.as_deref() {
            Some(year) if !year.is_empty() => Category::Film,
            _ => Category::Series,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::Series => "series",
            Category::Film => "film",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub id: u32,
    pub title: String,
    pub genre: String,
    pub image: String,
    pub year: Option<String>,
    /// Section the entry was loaded from. Only used for keys.
    pub origin: Category,
}

impl CatalogueEntry {
    pub fn series(id: u32, title: &str, genre: &str, image: &str) -> Self {
        Self {
            id,
            title: title.into(),
            genre: genre.into(),
            image: image.into(),
            year: None,
            origin: Category::Series,
        }
    }

    pub fn film(id: u32, title: &str, year: &str, genre: &str, image: &str) -> Self {
        Self {
            id,
            title: title.into(),
            genre: genre.into(),
            image: image.into(),
            year: Some(year.into()),
            origin: Category::Film,
        }
    }

    /// Reconciliation key. Ids repeat across sections, so the origin is part of it.
    pub fn key(&self) -> String {
        format!("{}-{}", self.id, self.origin)
    }
}

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("catalogue document could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{origin} entry {id} has no {field}")]
    MissingField {
        origin: Category,
        id: u32,
        field: &'static str,
    },

    #[error("{origin} id {id} appears more than once")]
    DuplicateId { origin: Category, id: u32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    series: Vec<Rc<CatalogueEntry>>,
    films: Vec<Rc<CatalogueEntry>>,
    highlighted: Vec<Rc<CatalogueEntry>>,
}

/// A parsed catalogue plus every entry that was skipped on the way in.
#[derive(Debug)]
pub struct LoadReport {
    pub catalogue: Catalogue,
    pub rejected: Vec<CatalogueError>,
}

#[derive(Debug, Deserialize)]
struct RawCatalogue {
    #[serde(default)]
    series: Vec<RawEntry>,
    #[serde(default)]
    films: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    id: u32,
    #[serde(default)]
    title: String,
    #[serde(default)]
    genre: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    year: Option<String>,
}

impl Catalogue {
    pub fn new(series: Vec<CatalogueEntry>, films: Vec<CatalogueEntry>) -> Self {
        let series: Vec<_> = series.into_iter().map(Rc::new).collect();
        let films: Vec<_> = films.into_iter().map(Rc::new).collect();
        let highlighted = series.iter().chain(films.iter()).cloned().collect();
        Self {
            series,
            films,
            highlighted,
        }
    }

    /// The catalogue compiled into the bundle.
    pub fn builtin() -> Result<LoadReport, CatalogueError> {
        Self::from_json(CATALOGUE_JSON)
    }

    pub fn from_json(text: &str) -> Result<LoadReport, CatalogueError> {
        let raw: RawCatalogue = serde_json::from_str(text)?;
        let mut rejected = Vec::new();
        let series = accept_section(raw.series, Category::Series, &mut rejected);
        let films = accept_section(raw.films, Category::Film, &mut rejected);
        Ok(LoadReport {
            catalogue: Self::new(series, films),
            rejected,
        })
    }

    pub fn series(&self) -> &[Rc<CatalogueEntry>] {
        &self.series
    }

    pub fn films(&self) -> &[Rc<CatalogueEntry>] {
        &self.films
    }

    pub fn highlighted(&self) -> &[Rc<CatalogueEntry>] {
        &self.highlighted
    }
}

fn accept_section(
    raw: Vec<RawEntry>,
    origin: Category,
    rejected: &mut Vec<CatalogueError>,
) -> Vec<CatalogueEntry> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(raw.len());
    for r in raw {
        let missing = if r.title.trim().is_empty() {
            Some("title")
        } else if r.image.trim().is_empty() {
            Some("image")
        } else {
            None
        };
        if let Some(field) = missing {
            rejected.push(CatalogueError::MissingField {
                origin,
                id: r.id,
                field,
            });
            continue;
        }
        if !seen.insert(r.id) {
            rejected.push(CatalogueError::DuplicateId { origin, id: r.id });
            continue;
        }
        out.push(CatalogueEntry {
            id: r.id,
            title: r.title,
            genre: r.genre,
            image: r.image,
            year: r.year,
            origin,
        });
    }
    out
}
