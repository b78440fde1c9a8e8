//! Grid layout: a header bar per category followed by fixed-size poster cards.

use super::text::wrap_two_lines;
use super::{
    background, heading, placeholder, poster, progress_label, score_label, LayoutConfig,
    RenderedSection,
};
use crate::media::{CategorizedLists, Category, MediaEntry, PosterMap};
use crate::svg::{Element, SvgDocument};

/// Outer canvas padding; also the bottom margin in grid mode.
pub const GRID_PADDING: f64 = 24.0;
/// Gap between cards, rows, and a header and its first row.
pub const GRID_GAP: f64 = 18.0;

pub(super) const CARD_PADDING: f64 = 12.0;
/// Share of the card height taken by the poster.
const POSTER_SHARE: f64 = 0.65;
const TITLE_CHARS_PER_LINE: usize = 20;

/// Card width that exactly fills the canvas between the side paddings.
pub fn grid_card_width(config: &LayoutConfig) -> f64 {
    let cols = config.grid_columns.max(1) as f64;
    (config.width - GRID_PADDING * 2.0 - GRID_GAP * (cols - 1.0)) / cols
}

/// Row-major `(row, column)` cells for `count` cards in `columns` columns.
pub fn grid_cells(count: usize, columns: usize) -> Vec<(usize, usize)> {
    let columns = columns.max(1);
    (0..count).map(|i| (i / columns, i % columns)).collect()
}

pub(super) fn render(
    lists: &CategorizedLists,
    posters: &PosterMap,
    config: &LayoutConfig,
) -> SvgDocument {
    let mut y = config.title_margin;
    let title = heading(config, GRID_PADDING, y, config.title_font_size);
    y += config.title_font_size + config.section_gap;

    let mut sections = Vec::with_capacity(Category::ALL.len());
    for (idx, (category, entries)) in lists.iter().enumerate() {
        if idx > 0 {
            y += config.section_gap;
        }
        let section = render_section(category, entries, y, posters, config);
        y += section.height;
        sections.push(section.group);
    }

    let mut doc = SvgDocument::new(config.width, y + GRID_PADDING);
    doc.push(background(&config.palette));
    doc.push(title);
    doc.extend(sections);
    doc
}

fn render_section(
    category: Category,
    entries: &[MediaEntry],
    y_start: f64,
    posters: &PosterMap,
    config: &LayoutConfig,
) -> RenderedSection {
    let palette = &config.palette;
    let card_w = grid_card_width(config);
    let card_h = config.grid_card_height;
    let mut group = Element::new("g").attr("data-category", category.label());
    let mut y = y_start;

    group.push(
        Element::new("rect")
            .num("x", GRID_PADDING)
            .num("y", y)
            .num("width", config.width - GRID_PADDING * 2.0)
            .num("height", config.header_height)
            .fill(&palette.section_bg)
            .attr("rx", 8),
    );
    group.push(
        Element::new("text")
            .num("x", GRID_PADDING + 16.0)
            .num(
                "y",
                y + config.header_height / 2.0 + config.header_font_size / 2.0 - 2.0,
            )
            .num("font-size", config.header_font_size)
            .fill(&palette.primary)
            .attr("font-weight", "bold")
            .text(category.label()),
    );
    y += config.header_height + GRID_GAP;

    let shown = &entries[..entries.len().min(config.max_rows)];
    if shown.is_empty() {
        group.push(placeholder(palette, y + card_h / 2.0));
        y += card_h;
    } else {
        let cells = grid_cells(shown.len(), config.grid_columns);
        for (entry, (row, col)) in shown.iter().zip(&cells) {
            let x = GRID_PADDING + *col as f64 * (card_w + GRID_GAP);
            let card_y = y + *row as f64 * (card_h + GRID_GAP);
            group.push(render_card(entry, x, card_y, card_w, card_h, posters, config));
        }
        let rows = shown.len().div_ceil(config.grid_columns.max(1)) as f64;
        y += rows * card_h + (rows - 1.0) * GRID_GAP;
    }

    RenderedSection {
        group,
        height: y - y_start,
    }
}

fn render_card(
    entry: &MediaEntry,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    posters: &PosterMap,
    config: &LayoutConfig,
) -> Element {
    let palette = &config.palette;
    let poster_h = h * POSTER_SHARE;
    let center_x = x + w / 2.0;
    let footer_y = y + h - CARD_PADDING;

    let (line1, line2) = wrap_two_lines(entry.display_title(), TITLE_CHARS_PER_LINE);
    let mut title = Element::new("text")
        .num("x", center_x)
        .num("y", y + poster_h + 20.0)
        .attr("font-size", 14)
        .fill(&palette.primary)
        .attr("font-weight", "bold")
        .attr("text-anchor", "middle")
        .child(Element::new("tspan").text(line1));
    if let Some(line2) = line2 {
        title.push(
            Element::new("tspan")
                .num("x", center_x)
                .attr("dy", "1.2em")
                .text(line2),
        );
    }

    Element::new("g")
        .attr("data-media-id", entry.media_id)
        .child(
            Element::new("rect")
                .num("x", x)
                .num("y", y)
                .num("width", w)
                .num("height", h)
                .fill(&palette.poster_bg)
                .attr("opacity", 0.1)
                .attr("rx", 12),
        )
        .child(
            poster(
                posters,
                entry,
                x + CARD_PADDING,
                y + CARD_PADDING,
                w - CARD_PADDING * 2.0,
                poster_h,
            )
            .attr("rx", 8)
            .attr("ry", 8),
        )
        .child(title)
        .child(
            Element::new("text")
                .num("x", x + CARD_PADDING)
                .num("y", footer_y)
                .attr("font-size", 12)
                .fill(&palette.accent)
                .attr("font-weight", "bold")
                .attr("dominant-baseline", "middle")
                .text(score_label(entry, "", "")),
        )
        .child(
            Element::new("text")
                .num("x", x + w - CARD_PADDING)
                .num("y", footer_y)
                .attr("font-size", 12)
                .fill(&palette.text)
                .attr("text-anchor", "end")
                .attr("dominant-baseline", "middle")
                .text(progress_label(entry, "")),
        )
}
