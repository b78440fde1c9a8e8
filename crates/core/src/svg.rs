//! Structured SVG element tree.
//!
//! Layout code assembles [`Element`] values and serializes the finished
//! [`SvgDocument`] once. Serialization is the single point where text and
//! attribute values are escaped, and paint attributes only accept a
//! normalized [`Color`], so neither concern leaks into layout arithmetic.

use std::fmt::{self, Write as _};

use crate::color::Color;
use crate::xml::escape_xml;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Font stack shared by every rendered card.
pub const FONT_STACK: &str = "font-family: 'Segoe UI', Ubuntu, 'Helvetica Neue', sans-serif;";

/// Attributes that must be set through [`Element::paint`].
const PAINT_ATTRS: &[&str] = &["fill", "stroke", "stop-color"];

/// Format a coordinate without trailing zeros (`56`, `12.5`, `171.33`).
pub fn fmt_num(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        return format!("{}", value.round() as i64);
    }
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Raw (unescaped) text content.
    Text(String),
}

/// A single SVG element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set a plain attribute. Values are stored raw and escaped on output.
    pub fn attr(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        debug_assert!(
            !PAINT_ATTRS.contains(&name),
            "paint attribute '{name}' must be set with Element::paint"
        );
        self.attrs.push((name, value.to_string()));
        self
    }

    /// Set a numeric attribute, formatted with [`fmt_num`].
    pub fn num(mut self, name: &'static str, value: f64) -> Self {
        self.attrs.push((name, fmt_num(value)));
        self
    }

    /// Set a paint attribute from a normalized color.
    pub fn paint(mut self, name: &'static str, color: &Color) -> Self {
        self.attrs.push((name, color.as_str().to_string()));
        self
    }

    pub fn fill(self, color: &Color) -> Self {
        self.paint("fill", color)
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.children
            .extend(elements.into_iter().map(Node::Element));
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated raw text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }

    /// All descendant elements (depth-first, document order) named `name`.
    pub fn find_all(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(name, &mut found);
        found
    }

    fn collect<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if let Node::Element(e) = child {
                if e.name == name {
                    found.push(e);
                }
                e.collect(name, found);
            }
        }
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attrs {
            let _ = write!(out, " {key}=\"{}\"", escape_xml(value));
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_to(out),
                Node::Text(t) => out.push_str(&escape_xml(t)),
            }
        }
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }
}

/// A complete SVG document with a fixed canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    root: Element,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        let root = Element::new("svg")
            .num("width", width)
            .num("height", height)
            .attr("xmlns", SVG_NS)
            .attr("viewBox", format!("0 0 {} {}", fmt_num(width), fmt_num(height)))
            .attr("style", FONT_STACK);
        Self {
            width,
            height,
            root,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn push(&mut self, element: Element) {
        self.root.push(element);
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.root.extend(elements);
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(4096);
        self.root.write_to(&mut out);
        out
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(56.0), "56");
        assert_eq!(fmt_num(12.5), "12.5");
        assert_eq!(fmt_num(171.3333), "171.33");
        assert_eq!(fmt_num(-4.0), "-4");
        assert_eq!(fmt_num(0.10), "0.1");
    }

    #[test]
    fn empty_element_self_closes() {
        let mut doc = SvgDocument::new(10.0, 20.0);
        doc.push(Element::new("rect").num("x", 1.0));
        let out = doc.render();
        assert!(out.starts_with("<svg width=\"10\" height=\"20\""));
        assert!(out.contains("<rect x=\"1\"/>"));
        assert!(out.ends_with("</svg>"));
    }

    #[test]
    fn text_and_attributes_are_escaped_once() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        doc.push(
            Element::new("text")
                .attr("data-title", "A & B")
                .text("<Tom & Jerry>"),
        );
        let out = doc.render();
        assert!(out.contains("data-title=\"A &amp; B\""));
        assert!(out.contains("&lt;Tom &amp; Jerry&gt;"));

        let parsed = roxmltree::Document::parse(&out).unwrap();
        let text = parsed
            .descendants()
            .find(|n| n.has_tag_name("text"))
            .unwrap();
        assert_eq!(text.text(), Some("<Tom & Jerry>"));
    }

    #[test]
    fn paint_uses_normalized_color() {
        let el = Element::new("rect").fill(&Color::normalize("49ACD2"));
        assert_eq!(el.get_attr("fill"), Some("#49ACD2"));
    }

    #[test]
    fn find_all_walks_descendants_in_order() {
        let tree = Element::new("g")
            .child(Element::new("image").attr("id", "a"))
            .child(Element::new("g").child(Element::new("image").attr("id", "b")));
        let ids: Vec<_> = tree
            .find_all("image")
            .iter()
            .filter_map(|e| e.get_attr("id"))
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn text_content_concatenates_tspans() {
        let el = Element::new("text")
            .child(Element::new("tspan").text("Hello "))
            .child(Element::new("tspan").text("World"));
        assert_eq!(el.text_content(), "Hello World");
    }
}
