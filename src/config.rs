// src/config.rs

/// How many cards a Home rail shows before the rest are left to the full list.
pub const RAIL_CAP: usize = 10;

/// Bundled catalogue document, `{ "series": [...], "films": [...] }`.
pub const CATALOGUE_JSON: &str = include_str!("../assets/catalogue.json");

/// Fallback width when the window can't be measured (matches a laptop viewport).
pub const DEFAULT_VIEWPORT_PX: u32 = 1280;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub min_width: u32,
    pub columns: u8,
}

// Ascending by min_width; the first row must start at 0.
pub const GRID_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint { min_width: 0, columns: 1 },
    Breakpoint { min_width: 640, columns: 2 },
    Breakpoint { min_width: 768, columns: 4 },
    Breakpoint { min_width: 1024, columns: 5 },
];

/// Column count for the full list grid at a given viewport width.
pub fn grid_columns(width_px: u32) -> u8 {
    GRID_BREAKPOINTS
        .iter()
        .rev()
        .find(|bp| width_px >= bp.min_width)
        .map(|bp| bp.columns)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_follow_table() {
        assert_eq!(grid_columns(320), 1);
        assert_eq!(grid_columns(700), 2);
        assert_eq!(grid_columns(800), 4);
        assert_eq!(grid_columns(1440), 5);
    }

    #[test]
    fn test_grid_columns_at_exact_breakpoints() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(639), 1);
        assert_eq!(grid_columns(640), 2);
        assert_eq!(grid_columns(768), 4);
        assert_eq!(grid_columns(1024), 5);
    }

    #[test]
    fn test_breakpoints_are_ascending() {
        assert_eq!(GRID_BREAKPOINTS[0].min_width, 0);
        assert!(GRID_BREAKPOINTS
            .windows(2)
            .all(|w| w[0].min_width < w[1].min_width));
    }

    #[test]
    fn test_bundled_catalogue_is_not_empty() {
        assert!(CATALOGUE_JSON.contains("\"series\""));
        assert!(CATALOGUE_JSON.contains("\"films\""));
    }
}
