//! Rendering core for AniList SVG cards.
//!
//! Pure, I/O-free building blocks: color normalization, XML escaping, a
//! structured SVG element tree, the media list model and categorizer, the
//! layout engine, and the error card.

pub mod categorize;
pub mod color;
pub mod error;
pub mod error_card;
pub mod layout;
pub mod media;
pub mod svg;
pub mod xml;
