//! Table layout: one column header strip, then a header bar per category
//! followed by stacked entry rows.

use super::text::ellipsize;
use super::{
    background, heading, placeholder, poster, progress_label, score_label, LayoutConfig,
    RenderedSection, BOTTOM_MARGIN,
};
use crate::media::{CategorizedLists, Category, MediaEntry, PosterMap};
use crate::svg::{Element, SvgDocument};

const TITLE_X: f64 = 24.0;
/// Drop from the heading baseline to the column header strip.
const STRIP_OFFSET: f64 = 2.0;
const STRIP_HEIGHT: f64 = 32.0;
/// Space between the column header strip and the first section.
const TITLE_SPACING: f64 = 12.0;

const POSTER_X: f64 = 16.0;
const POSTER_WIDTH: f64 = 48.0;
const POSTER_INSET: f64 = 6.0;
const TEXT_X: f64 = 76.0;
const ACCENT_BAR_WIDTH: f64 = 8.0;

/// Horizontal centers of the score, progress and status columns.
const SCORE_X: f64 = 320.0;
const PROGRESS_X: f64 = 400.0;
const STATUS_X: f64 = 480.0;
const COLUMN_HALF_WIDTH: f64 = 40.0;

/// Narrowest canvas that still holds the status column.
pub const LIST_MIN_WIDTH: f64 = STATUS_X + COLUMN_HALF_WIDTH;

/// Title characters that fit left of the score column at 16px bold.
const TITLE_CHARS: usize = 22;

/// Y of the heading baseline.
fn title_baseline(config: &LayoutConfig) -> f64 {
    config.title_margin + config.title_font_size
}

/// Y of the first section's top edge, below the column header strip.
pub(super) fn sections_top(config: &LayoutConfig) -> f64 {
    title_baseline(config) + STRIP_OFFSET + STRIP_HEIGHT + TITLE_SPACING
}

pub(super) fn render(
    lists: &CategorizedLists,
    posters: &PosterMap,
    config: &LayoutConfig,
) -> SvgDocument {
    let mut sections = Vec::with_capacity(Category::ALL.len());

    let mut y = sections_top(config);
    for (idx, (category, entries)) in lists.iter().enumerate() {
        if idx > 0 {
            y += config.section_gap;
        }
        let section = render_section(category, entries, y, posters, config);
        y += section.height;
        sections.push(section.group);
    }

    let height = y + BOTTOM_MARGIN;
    let mut doc = SvgDocument::new(config.width, height);
    doc.push(background(&config.palette));
    doc.push(heading(
        config,
        TITLE_X,
        title_baseline(config),
        config.title_font_size,
    ));
    doc.push(column_header(config));
    doc.extend(sections);
    doc
}

/// The single Title / Score / Progress / Status strip under the heading.
fn column_header(config: &LayoutConfig) -> Element {
    let palette = &config.palette;
    let y = title_baseline(config) + STRIP_OFFSET;
    let baseline = y + STRIP_HEIGHT / 2.0 + 5.0;

    let mut strip = Element::new("g").attr("data-role", "columns").child(
        Element::new("rect")
            .attr("x", 0)
            .num("y", y)
            .num("width", config.width)
            .num("height", STRIP_HEIGHT)
            .fill(&palette.section_bg)
            .attr("opacity", 0.6),
    );
    strip.push(
        Element::new("text")
            .num("x", TEXT_X)
            .num("y", baseline)
            .attr("font-size", 13)
            .fill(&palette.text)
            .attr("font-weight", "bold")
            .text("Title"),
    );
    for (label, x) in [
        ("Score", SCORE_X),
        ("Progress", PROGRESS_X),
        ("Status", STATUS_X),
    ] {
        strip.push(
            Element::new("text")
                .num("x", x)
                .num("y", baseline)
                .attr("font-size", 13)
                .fill(&palette.text)
                .attr("font-weight", "bold")
                .attr("text-anchor", "middle")
                .text(label),
        );
    }
    strip
}

fn render_section(
    category: Category,
    entries: &[MediaEntry],
    y_start: f64,
    posters: &PosterMap,
    config: &LayoutConfig,
) -> RenderedSection {
    let palette = &config.palette;
    let mut group = Element::new("g").attr("data-category", category.label());
    let mut y = y_start;

    let baseline = y + config.header_height / 2.0 + config.header_font_size / 2.0 - 2.0;
    group.push(
        Element::new("rect")
            .attr("x", 0)
            .num("y", y)
            .num("width", config.width)
            .num("height", config.header_height)
            .fill(&palette.section_bg)
            .attr("rx", 8),
    );
    group.push(
        Element::new("text")
            .attr("x", 20)
            .num("y", baseline)
            .num("font-size", config.header_font_size)
            .fill(&palette.primary)
            .attr("font-weight", "bold")
            .text(category.label()),
    );
    y += config.header_height;

    if entries.is_empty() {
        group.push(placeholder(palette, y + config.row_height / 2.0 + 5.0));
        y += config.row_height;
    } else {
        for entry in entries.iter().take(config.max_rows) {
            group.push(render_row(entry, y, posters, config));
            y += config.row_height;
        }
    }

    RenderedSection {
        group,
        height: y - y_start,
    }
}

fn render_row(
    entry: &MediaEntry,
    y: f64,
    posters: &PosterMap,
    config: &LayoutConfig,
) -> Element {
    let palette = &config.palette;
    let rh = config.row_height;
    let middle = y + rh / 2.0;

    let cell = |x: f64, value: String| {
        Element::new("text")
            .num("x", x)
            .num("y", middle + 5.0)
            .attr("font-size", 14)
            .fill(&palette.text)
            .attr("text-anchor", "middle")
            .text(value)
    };

    Element::new("g")
        .child(
            Element::new("rect")
                .attr("x", 0)
                .num("y", y)
                .attr("width", "100%")
                .num("height", rh)
                .fill(&palette.poster_bg)
                .attr("opacity", 0.12),
        )
        .child(
            Element::new("rect")
                .attr("x", 0)
                .num("y", y)
                .num("width", ACCENT_BAR_WIDTH)
                .num("height", rh)
                .fill(&palette.accent)
                .attr("rx", 4),
        )
        .child(
            poster(
                posters,
                entry,
                POSTER_X,
                y + POSTER_INSET,
                POSTER_WIDTH,
                rh - POSTER_INSET * 2.0,
            )
            .attr("rx", 8)
            .attr("ry", 8),
        )
        .child(
            Element::new("text")
                .num("x", TEXT_X)
                .num("y", middle - 2.0)
                .attr("font-size", 16)
                .fill(&palette.primary)
                .attr("font-weight", "bold")
                .text(ellipsize(entry.display_title(), TITLE_CHARS)),
        )
        .child(
            Element::new("text")
                .num("x", TEXT_X)
                .num("y", middle + 18.0)
                .attr("font-size", 13)
                .fill(&palette.text)
                .text(entry.format.as_deref().unwrap_or("-")),
        )
        .child(cell(SCORE_X, score_label(entry, " / 10", "-")))
        .child(cell(PROGRESS_X, progress_label(entry, "-")))
        .child(cell(
            STATUS_X,
            entry.status.clone().unwrap_or_else(|| "-".to_string()),
        ))
}
