// src/sections.rs
use std::rc::Rc;

use crate::catalogue::{Catalogue, CatalogueEntry, Category};
use crate::config::RAIL_CAP;
use crate::routes::Route;

/// The three browsable collections, in Home order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    TvShows,
    Movies,
    MustSee,
}

impl Section {
    pub const HOME_ORDER: [Section; 3] = [Section::TvShows, Section::Movies, Section::MustSee];

    pub fn rail_title(self) -> &'static str {
        match self {
            Section::TvShows => "Top 10 TV Shows",
            Section::Movies => "Top 10 Movies",
            Section::MustSee => "Must-See Hits",
        }
    }

    pub fn list_title(self) -> &'static str {
        match self {
            Section::TvShows => "All TV Shows",
            Section::Movies => "All Movies",
            Section::MustSee => "Must-See Hits",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Section::TvShows => "tvshows",
            Section::Movies => "movies",
            Section::MustSee => "must-see",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Section::TvShows => Route::TvShows,
            Section::Movies => Route::Movies,
            Section::MustSee => Route::MustSee,
        }
    }

    pub fn entries(self, catalogue: &Catalogue) -> &[Rc<CatalogueEntry>] {
        match self {
            Section::TvShows => catalogue.series(),
            Section::Movies => catalogue.films(),
            Section::MustSee => catalogue.highlighted(),
        }
    }

    /// Most cards the Home rail shows. The Top 10 rails stop at `RAIL_CAP`;
    /// Must-See shows all of `highlighted` so film entries reach the rail.
    pub fn rail_cap(self) -> Option<usize> {
        match self {
            Section::TvShows | Section::Movies => Some(RAIL_CAP),
            Section::MustSee => None,
        }
    }

    /// Category the Home rail passes to its cards. Must-See passes none,
    /// so its cards fall back to series formatting.
    pub fn rail_category(self) -> Option<Category> {
        match self {
            Section::TvShows => Some(Category::Series),
            Section::Movies => Some(Category::Film),
            Section::MustSee => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_order() {
        let titles: Vec<_> = Section::HOME_ORDER.iter().map(|s| s.rail_title()).collect();
        assert_eq!(titles, vec!["Top 10 TV Shows", "Top 10 Movies", "Must-See Hits"]);
    }

    #[test]
    fn test_sections_read_their_collection() {
        let cat = Catalogue::builtin().unwrap().catalogue;
        assert_eq!(Section::TvShows.entries(&cat).len(), cat.series().len());
        assert_eq!(Section::Movies.entries(&cat).len(), cat.films().len());
        assert_eq!(Section::MustSee.entries(&cat).len(), cat.highlighted().len());
    }

    #[test]
    fn test_only_top_ten_rails_are_capped() {
        assert_eq!(Section::TvShows.rail_cap(), Some(RAIL_CAP));
        assert_eq!(Section::Movies.rail_cap(), Some(RAIL_CAP));
        assert_eq!(Section::MustSee.rail_cap(), None);
    }

    #[test]
    fn test_routes_round_trip_through_section() {
        for section in Section::HOME_ORDER {
            assert_eq!(section.route().section(), Some(section));
        }
    }
}
