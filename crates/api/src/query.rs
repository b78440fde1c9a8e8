//! Query parameter types for the card and activity endpoints.
//!
//! Every parameter arrives as an optional string and is resolved leniently:
//! integers that are missing, non-numeric or zero fall back to their
//! default, and colors pass through [`Color::normalize`].

use serde::Deserialize;

use animecard_core::color::Color;
use animecard_core::layout::{LayoutConfig, LayoutMode, Palette};

/// Upper bound on `maxRows`; also bounds the poster batch per category.
pub const MAX_ROWS_LIMIT: usize = 25;

/// Upper bound on `gridColumns`.
pub const MAX_GRID_COLUMNS: usize = 6;

pub const DEFAULT_ACTIVITY_PER_PAGE: u32 = 5;
pub const MAX_ACTIVITY_PER_PAGE: u32 = 25;

/// Query parameters of `GET /animelist` (and `GET /`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardQuery {
    pub username: Option<String>,
    pub layout: Option<String>,
    pub title: Option<String>,

    pub width: Option<String>,
    pub row_height: Option<String>,
    pub header_height: Option<String>,
    pub header_font_size: Option<String>,
    pub title_font_size: Option<String>,
    pub title_margin: Option<String>,
    pub section_gap: Option<String>,
    pub max_rows: Option<String>,
    pub grid_card_height: Option<String>,
    pub grid_columns: Option<String>,
    pub grid_card_width: Option<String>,
    pub cards: Option<String>,

    pub bg_color: Option<String>,
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    pub section_bg: Option<String>,
    pub poster_bg: Option<String>,
    pub text_color: Option<String>,
}

impl CardQuery {
    /// The requested username, or `default` when absent or blank.
    pub fn username(&self, default: &str) -> String {
        resolve_username(self.username.as_deref(), default)
    }

    /// Resolve the colors alone. Used for error cards, which need the palette
    /// even when the rest of the request is unusable.
    pub fn palette(&self) -> Palette {
        let defaults = Palette::default();
        Palette {
            background: color(&self.bg_color, defaults.background),
            primary: color(&self.primary_color, defaults.primary),
            accent: color(&self.accent_color, defaults.accent),
            section_bg: color(&self.section_bg, defaults.section_bg),
            poster_bg: color(&self.poster_bg, defaults.poster_bg),
            text: color(&self.text_color, defaults.text),
        }
    }

    /// Fully resolved layout configuration for `username`.
    pub fn layout_config(&self, username: &str) -> LayoutConfig {
        let defaults = LayoutConfig::default();
        let mode = self
            .layout
            .as_deref()
            .map(LayoutMode::parse)
            .unwrap_or_default();

        let mut config = LayoutConfig {
            mode,
            title: self
                .title
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("{username}'s Animelist")),
            width: dimension(&self.width, defaults.width),
            row_height: dimension(&self.row_height, defaults.row_height),
            header_height: dimension(&self.header_height, defaults.header_height),
            header_font_size: dimension(&self.header_font_size, defaults.header_font_size),
            title_font_size: dimension(&self.title_font_size, defaults.title_font_size),
            title_margin: dimension(&self.title_margin, defaults.title_margin),
            section_gap: dimension(&self.section_gap, defaults.section_gap),
            max_rows: count(&self.max_rows, defaults.max_rows).min(MAX_ROWS_LIMIT),
            grid_card_height: dimension(&self.grid_card_height, defaults.grid_card_height),
            grid_columns: count(&self.grid_columns, defaults.grid_columns).min(MAX_GRID_COLUMNS),
            compact_count: count(&self.cards, defaults.compact_count),
            palette: self.palette(),
        };

        // An explicit width always wins over a requested card width.
        if mode == LayoutMode::Grid && parse_positive(self.width.as_deref()).is_none() {
            if let Some(card_width) = parse_positive(self.grid_card_width.as_deref()) {
                config.width = config.grid_width_for_card(f64::from(card_width));
            }
        }

        config
    }
}

/// Query parameters of `GET /activity`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuery {
    pub username: Option<String>,
    pub per_page: Option<String>,
}

impl ActivityQuery {
    pub fn username(&self, default: &str) -> String {
        resolve_username(self.username.as_deref(), default)
    }

    /// Requested page size, defaulting to 5 and capped at 25.
    pub fn per_page(&self) -> u32 {
        parse_positive(self.per_page.as_deref())
            .unwrap_or(DEFAULT_ACTIVITY_PER_PAGE)
            .min(MAX_ACTIVITY_PER_PAGE)
    }
}

/// Parse a positive integer from the leading digits of `raw`.
///
/// `"12px"` reads as 12. Empty, non-numeric, negative and zero values are
/// `None`.
pub fn parse_positive(raw: Option<&str>) -> Option<u32> {
    let trimmed = raw?.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end]
        .parse::<u32>()
        .ok()
        .filter(|value| *value > 0)
}

fn resolve_username(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn dimension(raw: &Option<String>, default: f64) -> f64 {
    parse_positive(raw.as_deref()).map_or(default, f64::from)
}

fn count(raw: &Option<String>, default: usize) -> usize {
    parse_positive(raw.as_deref()).map_or(default, |value| value as usize)
}

fn color(raw: &Option<String>, default: Color) -> Color {
    Color::or_default(raw.as_deref().map(str::trim), default.as_str())
}
