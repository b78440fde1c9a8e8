//! Color normalization for user-supplied palette values.
//!
//! Query strings rarely carry a literal `#`, so colors arrive as bare hex
//! (`49ACD2`), percent-encoded hex (`%2349ACD2`), named colors, or CSS
//! functional notation. [`Color`] maps all of them to a token an SVG
//! renderer accepts.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static BARE_HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid regex"));

static NAMED_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("valid regex"));

/// Prefixes that are already valid SVG color syntax.
const PASSTHROUGH_PREFIXES: &[&str] = &["#", "rgb", "hsl", "var("];

/// Percent-encoded `#`.
const ENCODED_HASH: &str = "%23";

/// Normalize a raw color string.
///
/// Rules, applied in order:
///
/// 1. `#...`, `rgb...`, `hsl...`, `var(...` and purely alphabetic names pass through.
/// 2. Bare 3- or 6-digit hex gets a leading `#`.
/// 3. A leading `%23` is replaced with `#`.
/// 4. Anything else passes through unchanged.
///
/// # Examples
///
/// ```
/// use animecard_core::color::normalize_color;
///
/// assert_eq!(normalize_color("49ACD2"), "#49ACD2");
/// assert_eq!(normalize_color("%23abcdef"), "#abcdef");
/// assert_eq!(normalize_color("red"), "red");
/// ```
pub fn normalize_color(raw: &str) -> String {
    if PASSTHROUGH_PREFIXES.iter().any(|p| raw.starts_with(p)) || NAMED_COLOR_RE.is_match(raw) {
        return raw.to_string();
    }
    if BARE_HEX_RE.is_match(raw) {
        return format!("#{raw}");
    }
    if let Some(rest) = raw.strip_prefix(ENCODED_HASH) {
        return format!("#{rest}");
    }
    raw.to_string()
}

/// A color token that has passed through [`normalize_color`].
///
/// SVG builders only accept `Color` for paint attributes, so every color
/// that reaches markup has been normalized exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color(String);

impl Color {
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_color(raw))
    }

    /// Normalize `raw` when present and non-empty, otherwise `default`.
    pub fn or_default(raw: Option<&str>, default: &str) -> Self {
        match raw {
            Some(value) if !value.is_empty() => Self::normalize(value),
            _ => Self::normalize(default),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
