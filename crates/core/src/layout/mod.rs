//! Layout engine: categorized entries + configuration -> SVG document.
//!
//! Rendering is a pure, single-pass function of [`CategorizedLists`],
//! [`PosterMap`] and [`LayoutConfig`]. Three mutually exclusive modes are
//! supported:
//!
//! - [`LayoutMode::List`]: one table section per category, rows stacked vertically.
//! - [`LayoutMode::Grid`]: one section per category, cards in a fixed-column grid.
//! - [`LayoutMode::CompactRow`]: a single row of tiles whose count sets the canvas width.
//!
//! List and grid sections always render in `Watching -> Completed ->
//! Planning` order, and an empty category renders a placeholder instead of
//! disappearing.

mod compact;
mod grid;
mod list;
pub mod text;

use crate::color::Color;
use crate::error::CoreError;
use crate::media::{CategorizedLists, MediaEntry, PosterMap};
use crate::svg::{fmt_num, Element, SvgDocument};

pub use grid::{grid_card_width, grid_cells, GRID_GAP, GRID_PADDING};
pub use list::LIST_MIN_WIDTH;

/// Placeholder shown for a category without entries.
pub const EMPTY_PLACEHOLDER: &str = "No anime in this list.";

/// Fixed space below the last section.
pub const BOTTOM_MARGIN: f64 = 24.0;

/// Bounds for the compact row tile count.
pub const COMPACT_MIN_CARDS: usize = 2;
pub const COMPACT_MAX_CARDS: usize = 6;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which layout to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutMode {
    #[default]
    List,
    Grid,
    CompactRow,
}

impl LayoutMode {
    /// Parse a `layout` query value. Unknown values fall back to `List`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "grid" => LayoutMode::Grid,
            "compact" | "compact-row" | "row" | "card" => LayoutMode::CompactRow,
            _ => LayoutMode::List,
        }
    }
}

/// Normalized colors used by every layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub primary: Color,
    pub accent: Color,
    pub section_bg: Color,
    pub poster_bg: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::normalize("#23272e"),
            primary: Color::normalize("#49ACD2"),
            accent: Color::normalize("#49ACD2"),
            section_bg: Color::normalize("#23272e"),
            poster_bg: Color::normalize("#49ACD2"),
            text: Color::normalize("#abb2bf"),
        }
    }
}

/// Flat rendering parameters. Fully resolved before layout begins.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub mode: LayoutMode,
    /// Heading text at the top of the card.
    pub title: String,
    /// Canvas width for list and grid modes. Compact row derives its own.
    pub width: f64,
    pub row_height: f64,
    pub header_height: f64,
    pub header_font_size: f64,
    pub title_font_size: f64,
    pub title_margin: f64,
    pub section_gap: f64,
    /// Entries shown per category in list and grid modes.
    pub max_rows: usize,
    pub grid_card_height: f64,
    pub grid_columns: usize,
    /// Tiles shown in compact row mode.
    pub compact_count: usize,
    pub palette: Palette,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::List,
            title: "Animelist".to_string(),
            width: 560.0,
            row_height: 56.0,
            header_height: 38.0,
            header_font_size: 18.0,
            title_font_size: 28.0,
            title_margin: 32.0,
            section_gap: 18.0,
            max_rows: 5,
            grid_card_height: 240.0,
            grid_columns: 2,
            compact_count: 4,
            palette: Palette::default(),
        }
    }
}

impl LayoutConfig {
    /// Reject configurations that cannot produce a sane document.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_rows == 0 {
            return Err(CoreError::Validation("maxRows must be at least 1".into()));
        }
        match self.mode {
            LayoutMode::List if self.width < LIST_MIN_WIDTH => {
                return Err(CoreError::Validation(format!(
                    "width {} is too narrow for the list layout (minimum {})",
                    fmt_num(self.width),
                    fmt_num(LIST_MIN_WIDTH)
                )));
            }
            LayoutMode::Grid => self.validate_grid()?,
            _ => {}
        }
        Ok(())
    }

    /// Grid cards must leave room for a poster inside their padding.
    fn validate_grid(&self) -> Result<(), CoreError> {
        if self.grid_columns == 0 {
            return Err(CoreError::Validation("gridColumns must be at least 1".into()));
        }
        if grid_card_width(self) <= 2.0 * grid::CARD_PADDING {
            return Err(CoreError::Validation(format!(
                "width {} is too narrow for {} grid columns",
                fmt_num(self.width),
                self.grid_columns
            )));
        }
        Ok(())
    }

    /// Canvas width that makes grid cards exactly `card_width` wide.
    pub fn grid_width_for_card(&self, card_width: f64) -> f64 {
        let cols = self.grid_columns.max(1) as f64;
        GRID_PADDING * 2.0 + cols * card_width + (cols - 1.0) * GRID_GAP
    }

    /// Compact row tile count, clamped to the supported range.
    pub fn compact_cards(&self) -> usize {
        self.compact_count
            .clamp(COMPACT_MIN_CARDS, COMPACT_MAX_CARDS)
    }

    /// Entries that will appear in the rendered document, in render order.
    ///
    /// Used to decide which posters to fetch before layout.
    pub fn visible_entries<'a>(&self, lists: &'a CategorizedLists) -> Vec<&'a MediaEntry> {
        match self.mode {
            LayoutMode::List | LayoutMode::Grid => lists
                .iter()
                .flat_map(|(_, entries)| entries.iter().take(self.max_rows))
                .collect(),
            LayoutMode::CompactRow => lists
                .iter()
                .flat_map(|(_, entries)| entries.iter())
                .take(self.compact_cards())
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// One laid-out category: its SVG group and the vertical extent it occupies.
#[derive(Debug, Clone)]
pub struct RenderedSection {
    pub group: Element,
    pub height: f64,
}

/// Lay out `lists` into a complete SVG document.
pub fn render(
    lists: &CategorizedLists,
    posters: &PosterMap,
    config: &LayoutConfig,
) -> Result<SvgDocument, CoreError> {
    config.validate()?;

    let doc = match config.mode {
        LayoutMode::List => list::render(lists, posters, config),
        LayoutMode::Grid => grid::render(lists, posters, config),
        LayoutMode::CompactRow => compact::render(lists, posters, config),
    };

    tracing::debug!(
        mode = ?config.mode,
        width = doc.width(),
        height = doc.height(),
        "Rendered card"
    );

    Ok(doc)
}

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

/// Score text, or `fallback` when unset.
fn score_label(entry: &MediaEntry, suffix: &str, fallback: &str) -> String {
    if entry.score > 0.0 {
        format!("⭐ {}{suffix}", fmt_num(entry.score))
    } else {
        fallback.to_string()
    }
}

/// Progress text, or `fallback` when unset.
fn progress_label(entry: &MediaEntry, fallback: &str) -> String {
    if entry.progress > 0 {
        format!("Ep {}", entry.progress)
    } else {
        fallback.to_string()
    }
}

/// Rounded full-canvas background.
fn background(palette: &Palette) -> Element {
    Element::new("rect")
        .attr("width", "100%")
        .attr("height", "100%")
        .fill(&palette.background)
        .attr("rx", 18)
        .attr("ry", 18)
}

/// Bold heading at the top of the card.
fn heading(config: &LayoutConfig, x: f64, y: f64, font_size: f64) -> Element {
    Element::new("text")
        .num("x", x)
        .num("y", y)
        .num("font-size", font_size)
        .fill(&config.palette.primary)
        .attr("font-weight", "bold")
        .attr("style", "letter-spacing:1px;")
        .text(config.title.clone())
}

/// Poster `<image>`; the `href` is omitted when no poster is available.
fn poster(posters: &PosterMap, entry: &MediaEntry, x: f64, y: f64, w: f64, h: f64) -> Element {
    let mut image = Element::new("image");
    if let Some(uri) = posters.get(entry.media_id) {
        image = image.attr("href", uri);
    }
    image
        .num("x", x)
        .num("y", y)
        .num("width", w)
        .num("height", h)
        .attr("preserveAspectRatio", "xMidYMid slice")
}

/// Centered "empty list" text.
fn placeholder(palette: &Palette, y: f64) -> Element {
    Element::new("text")
        .attr("x", "50%")
        .num("y", y)
        .attr("text-anchor", "middle")
        .attr("font-size", 14)
        .fill(&palette.text)
        .text(EMPTY_PLACEHOLDER)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::media::{MediaEntry, MediaTitle};

    pub fn entry(id: i64, title: &str, score: f64, progress: i64) -> MediaEntry {
        MediaEntry {
            media_id: id,
            title: MediaTitle {
                romaji: Some(title.to_string()),
                english: None,
                native: None,
            },
            poster_url: format!("https://img.test/{id}.jpg"),
            format: Some("TV".into()),
            score,
            progress,
            status: Some("CURRENT".into()),
        }
    }

    pub fn entries(n: usize) -> Vec<MediaEntry> {
        (1..=n as i64)
            .map(|id| entry(id, &format!("Show {id}"), 0.0, 0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{entries, entry};
    use super::*;
    use crate::media::Category;

    #[test]
    fn layout_mode_parsing() {
        assert_eq!(LayoutMode::parse("GRID"), LayoutMode::Grid);
        assert_eq!(LayoutMode::parse("compact-row"), LayoutMode::CompactRow);
        assert_eq!(LayoutMode::parse("list"), LayoutMode::List);
        assert_eq!(LayoutMode::parse("mosaic"), LayoutMode::List);
    }

    #[test]
    fn score_and_progress_fall_back_when_unset() {
        let unset = entry(1, "A", 0.0, 0);
        assert_eq!(score_label(&unset, " / 10", "-"), "-");
        assert_eq!(progress_label(&unset, "-"), "-");

        let negative = entry(1, "A", -3.0, -1);
        assert_eq!(score_label(&negative, "", ""), "");
        assert_eq!(progress_label(&negative, ""), "");

        let set = entry(1, "A", 8.5, 12);
        assert_eq!(score_label(&set, " / 10", "-"), "⭐ 8.5 / 10");
        assert_eq!(progress_label(&set, "-"), "Ep 12");
    }

    #[test]
    fn visible_entries_caps_each_category() {
        let lists = CategorizedLists {
            watching: entries(7),
            completed: entries(2),
            planning: vec![],
        };
        let config = LayoutConfig {
            max_rows: 3,
            ..Default::default()
        };
        assert_eq!(config.visible_entries(&lists).len(), 5);
    }

    #[test]
    fn visible_entries_compact_spans_categories_in_order() {
        let mut lists = CategorizedLists::default();
        lists.watching = vec![entry(1, "W", 0.0, 0)];
        lists.planning = vec![entry(2, "P1", 0.0, 0), entry(3, "P2", 0.0, 0), entry(4, "P3", 0.0, 0)];
        let config = LayoutConfig {
            mode: LayoutMode::CompactRow,
            compact_count: 3,
            ..Default::default()
        };
        let ids: Vec<_> = config
            .visible_entries(&lists)
            .iter()
            .map(|e| e.media_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(lists.get(Category::Completed).is_empty());
    }

    #[test]
    fn compact_count_is_clamped() {
        let mut config = LayoutConfig::default();
        config.compact_count = 1;
        assert_eq!(config.compact_cards(), 2);
        config.compact_count = 40;
        assert_eq!(config.compact_cards(), 6);
    }

    #[test]
    fn validate_rejects_narrow_grid() {
        let config = LayoutConfig {
            mode: LayoutMode::Grid,
            width: 60.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn validate_rejects_grid_without_room_for_posters() {
        // (100 - 48 - 18) / 2 = 17, narrower than the card padding.
        let config = LayoutConfig {
            mode: LayoutMode::Grid,
            width: 100.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("too narrow for 2 grid columns"));

        let config = LayoutConfig {
            mode: LayoutMode::Grid,
            width: 200.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_narrow_list() {
        let config = LayoutConfig {
            width: 100.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("too narrow for the list layout"));

        let config = LayoutConfig {
            width: LIST_MIN_WIDTH,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn compact_row_ignores_width() {
        let config = LayoutConfig {
            mode: LayoutMode::CompactRow,
            width: 100.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_rows() {
        let config = LayoutConfig {
            max_rows: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn grid_width_for_card_inverts_card_width() {
        let mut config = LayoutConfig {
            mode: LayoutMode::Grid,
            ..Default::default()
        };
        config.width = config.grid_width_for_card(140.0);
        assert_eq!(config.width, 24.0 * 2.0 + 2.0 * 140.0 + 18.0);
        assert_eq!(grid_card_width(&config), 140.0);
    }

    #[test]
    fn rendered_document_is_well_formed_xml() {
        let lists = CategorizedLists {
            watching: vec![entry(1, "Tom & Jerry <Special>", 7.0, 3)],
            completed: entries(2),
            planning: vec![],
        };
        for mode in [LayoutMode::List, LayoutMode::Grid, LayoutMode::CompactRow] {
            let config = LayoutConfig {
                mode,
                title: "O'Brien's \"Animelist\"".into(),
                ..Default::default()
            };
            let svg = render(&lists, &PosterMap::new(), &config).unwrap().render();
            let doc = roxmltree::Document::parse(&svg).unwrap();
            assert!(doc
                .descendants()
                .any(|n| n.text() == Some("O'Brien's \"Animelist\"")));
        }
    }
}
