//! Fixed-size SVG card used in place of a widget when a request fails.

use crate::color::Color;
use crate::svg::{Element, SvgDocument};

pub const ERROR_CARD_WIDTH: f64 = 700.0;
pub const ERROR_CARD_HEIGHT: f64 = 150.0;
pub const ERROR_TITLE: &str = "Oops! An Error Occurred";

pub const DEFAULT_ERROR_BG: &str = "#282c34";
pub const DEFAULT_ERROR_PRIMARY: &str = "#e06c75";
const MESSAGE_COLOR: &str = "#abb2bf";

/// Render an error card. Colors default to a dark background with a red title.
///
/// The canvas never resizes with the message; long messages overflow.
pub fn render_error_card(
    message: &str,
    background: Option<&Color>,
    primary: Option<&Color>,
) -> SvgDocument {
    let default_bg = Color::normalize(DEFAULT_ERROR_BG);
    let default_primary = Color::normalize(DEFAULT_ERROR_PRIMARY);
    let background = background.unwrap_or(&default_bg);
    let primary = primary.unwrap_or(&default_primary);

    let mut doc = SvgDocument::new(ERROR_CARD_WIDTH, ERROR_CARD_HEIGHT);
    doc.push(
        Element::new("rect")
            .attr("width", "100%")
            .attr("height", "100%")
            .fill(background)
            .attr("rx", 16)
            .attr("ry", 16),
    );
    doc.push(
        Element::new("text")
            .attr("x", "50%")
            .attr("y", "45%")
            .attr("dominant-baseline", "middle")
            .attr("text-anchor", "middle")
            .attr("font-size", 20)
            .fill(primary)
            .attr("font-weight", "bold")
            .text(ERROR_TITLE),
    );
    doc.push(
        Element::new("text")
            .attr("x", "50%")
            .attr("y", "60%")
            .attr("dominant-baseline", "middle")
            .attr("text-anchor", "middle")
            .attr("font-size", 14)
            .fill(&Color::normalize(MESSAGE_COLOR))
            .text(message),
    );
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_is_fixed_regardless_of_message() {
        let short = render_error_card("x", None, None);
        let long = render_error_card(&"very long message ".repeat(20), None, None);
        assert_eq!((short.width(), short.height()), (700.0, 150.0));
        assert_eq!((long.width(), long.height()), (700.0, 150.0));
    }

    #[test]
    fn message_is_escaped() {
        let svg = render_error_card("User '<script>' Not Found", None, None).render();
        assert!(svg.contains("User &apos;&lt;script&gt;&apos; Not Found"));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn color_overrides_apply() {
        let bg = Color::normalize("101010");
        let primary = Color::normalize("%23ff0000");
        let doc = render_error_card("boom", Some(&bg), Some(&primary));
        let rect = &doc.root().find_all("rect")[0];
        assert_eq!(rect.get_attr("fill"), Some("#101010"));
        let texts = doc.root().find_all("text");
        assert_eq!(texts[0].get_attr("fill"), Some("#ff0000"));
        assert_eq!(texts[0].text_content(), ERROR_TITLE);
        assert_eq!(texts[1].text_content(), "boom");
    }

    #[test]
    fn defaults_apply() {
        let doc = render_error_card("boom", None, None);
        let rect = &doc.root().find_all("rect")[0];
        assert_eq!(rect.get_attr("fill"), Some(DEFAULT_ERROR_BG));
    }
}
