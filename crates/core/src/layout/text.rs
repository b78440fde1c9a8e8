//! Character-count text fitting.
//!
//! No font metrics are available when composing a card, so titles are
//! fitted by character count. Counts are in Unicode scalar values.

const ELLIPSIS: &str = "...";

/// Truncate `text` to at most `max_chars`, ending in `...` when cut.
///
/// Limits shorter than the ellipsis itself cut hard without one.
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    if max_chars < ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Split `text` into at most two lines of `max_chars`.
///
/// The break lands on the last space at or before `max_chars`; the space
/// itself is dropped. Without a usable space the text is cut hard at
/// `max_chars`. An overlong second line is ellipsized.
pub fn wrap_two_lines(text: &str, max_chars: usize) -> (String, Option<String>) {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return (text.to_string(), None);
    }

    let search_end = max_chars.min(chars.len() - 1);
    let space = chars[..=search_end]
        .iter()
        .rposition(|c| *c == ' ')
        .filter(|idx| *idx > 0);

    let (first, rest): (String, String) = match space {
        Some(idx) => (
            chars[..idx].iter().collect(),
            chars[idx + 1..].iter().collect(),
        ),
        None => (
            chars[..max_chars].iter().collect(),
            chars[max_chars..].iter().collect(),
        ),
    };

    let rest = rest.trim_start();
    if rest.is_empty() {
        return (first, None);
    }
    (first, Some(ellipsize(rest, max_chars)))
}
