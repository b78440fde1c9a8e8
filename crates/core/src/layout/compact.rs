//! Compact row: a single strip of poster tiles.
//!
//! The canvas width follows the number of tiles rather than the configured
//! width, so the image can sit inline next to other README badges.

use super::text::ellipsize;
use super::{
    background, heading, placeholder, poster, progress_label, score_label, LayoutConfig,
};
use crate::media::{CategorizedLists, Category, MediaEntry, PosterMap};
use crate::svg::{Element, SvgDocument};

const TILE_WIDTH: f64 = 140.0;
const TILE_HEIGHT: f64 = 230.0;
const TILE_SPACING: f64 = 16.0;
const PADDING: f64 = 20.0;

const TILE_INSET: f64 = 10.0;
const POSTER_HEIGHT: f64 = 150.0;
const TITLE_CHARS: usize = 16;

/// Canvas width for `tiles` tiles; an empty row keeps one tile's worth of room.
pub(super) fn row_width(tiles: usize) -> f64 {
    let n = tiles.max(1) as f64;
    PADDING * 2.0 + n * TILE_WIDTH + (n - 1.0) * TILE_SPACING
}

pub(super) fn render(
    lists: &CategorizedLists,
    posters: &PosterMap,
    config: &LayoutConfig,
) -> SvgDocument {
    let picked: Vec<(Category, &MediaEntry)> = lists
        .iter()
        .flat_map(|(category, entries)| entries.iter().map(move |e| (category, e)))
        .take(config.compact_cards())
        .collect();

    let tiles_top = PADDING + config.header_font_size + 12.0;
    let width = row_width(picked.len());
    let height = tiles_top + TILE_HEIGHT + PADDING;

    let mut doc = SvgDocument::new(width, height);
    doc.push(background(&config.palette));
    doc.push(heading(
        config,
        PADDING,
        PADDING + config.header_font_size,
        config.header_font_size,
    ));

    if picked.is_empty() {
        doc.push(placeholder(&config.palette, tiles_top + TILE_HEIGHT / 2.0));
        return doc;
    }

    for (idx, (category, entry)) in picked.into_iter().enumerate() {
        let x = PADDING + idx as f64 * (TILE_WIDTH + TILE_SPACING);
        doc.push(render_tile(category, entry, x, tiles_top, posters, config));
    }
    doc
}

fn render_tile(
    category: Category,
    entry: &MediaEntry,
    x: f64,
    y: f64,
    posters: &PosterMap,
    config: &LayoutConfig,
) -> Element {
    let palette = &config.palette;
    let footer_y = y + TILE_HEIGHT - 14.0;

    Element::new("g")
        .attr("data-media-id", entry.media_id)
        .child(
            Element::new("rect")
                .num("x", x)
                .num("y", y)
                .num("width", TILE_WIDTH)
                .num("height", TILE_HEIGHT)
                .fill(&palette.poster_bg)
                .attr("opacity", 0.1)
                .attr("rx", 12),
        )
        .child(
            poster(
                posters,
                entry,
                x + TILE_INSET,
                y + TILE_INSET,
                TILE_WIDTH - TILE_INSET * 2.0,
                POSTER_HEIGHT,
            )
            .attr("rx", 8)
            .attr("ry", 8),
        )
        .child(
            Element::new("text")
                .num("x", x + TILE_WIDTH / 2.0)
                .num("y", y + TILE_INSET + POSTER_HEIGHT + 18.0)
                .attr("font-size", 13)
                .fill(&palette.primary)
                .attr("font-weight", "bold")
                .attr("text-anchor", "middle")
                .text(ellipsize(entry.display_title(), TITLE_CHARS)),
        )
        .child(
            Element::new("text")
                .num("x", x + TILE_WIDTH / 2.0)
                .num("y", y + TILE_INSET + POSTER_HEIGHT + 36.0)
                .attr("font-size", 11)
                .fill(&palette.text)
                .attr("text-anchor", "middle")
                .text(category.label()),
        )
        .child(
            Element::new("text")
                .num("x", x + TILE_INSET)
                .num("y", footer_y)
                .attr("font-size", 12)
                .fill(&palette.accent)
                .attr("font-weight", "bold")
                .attr("dominant-baseline", "middle")
                .text(score_label(entry, "", "")),
        )
        .child(
            Element::new("text")
                .num("x", x + TILE_WIDTH - TILE_INSET)
                .num("y", footer_y)
                .attr("font-size", 12)
                .fill(&palette.text)
                .attr("text-anchor", "end")
                .attr("dominant-baseline", "middle")
                .text(progress_label(entry, "")),
        )
}
