//! XML text escaping.

/// Escape the five reserved XML characters.
///
/// Not idempotent: escaping twice turns `&amp;` into `&amp;amp;`. The SVG
/// serializer in [`crate::svg`] is the only place markup text is escaped.
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_reserved_characters() {
        assert_eq!(
            escape_xml(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&apos;s&lt;/a&gt;"
        );
    }

    #[test]
    fn preserves_other_characters() {
        assert_eq!(escape_xml("進撃の巨人 ⭐ 9"), "進撃の巨人 ⭐ 9");
    }

    #[test]
    fn double_escape_is_not_identity() {
        let once = escape_xml("&");
        assert_eq!(escape_xml(&once), "&amp;amp;");
    }

    #[test]
    fn round_trips_through_xml_parser() {
        let original = r#"<Re:Zero> & "Friends" 'n' stuff"#;
        let doc = format!("<t>{}</t>", escape_xml(original));
        for reserved in ['<', '>', '"', '\''] {
            assert!(!escape_xml(original).contains(reserved));
        }
        let parsed = roxmltree::Document::parse(&doc).unwrap();
        assert_eq!(parsed.root_element().text(), Some(original));
    }
}
