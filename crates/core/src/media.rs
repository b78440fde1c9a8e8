//! Media list model.
//!
//! Two layers live here: the upstream list shapes exactly as the AniList
//! API returns them ([`MediaList`], [`ListEntry`], [`Media`]), and the
//! validated per-request snapshot the layout engine consumes
//! ([`MediaEntry`], [`CategorizedLists`]).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Upstream media identifier.
pub type MediaId = i64;

/// Fallback poster source when an entry carries no cover image URL.
pub const POSTER_FALLBACK_BASE: &str = "https://img.anili.st/media";

// ---------------------------------------------------------------------------
// Upstream shapes
// ---------------------------------------------------------------------------

/// Alternative names of a media item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

impl MediaTitle {
    /// First present, non-empty title in romaji, English, native order.
    pub fn preferred(&self) -> &str {
        [&self.romaji, &self.english, &self.native]
            .into_iter()
            .filter_map(|t| t.as_deref())
            .find(|t| !t.is_empty())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverImage {
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: Option<MediaId>,
    #[serde(default)]
    pub title: MediaTitle,
    pub cover_image: Option<CoverImage>,
    pub format: Option<String>,
}

/// One entry of an upstream list. `media` is absent for deleted titles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    pub media: Option<Media>,
    pub score: Option<f64>,
    pub progress: Option<i64>,
    pub status: Option<String>,
}

/// A named upstream list ("Watching", "Completed", custom lists, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaList {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<ListEntry>,
}

// ---------------------------------------------------------------------------
// Validated snapshot
// ---------------------------------------------------------------------------

/// A tracked media item with a resolvable identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaEntry {
    pub media_id: MediaId,
    pub title: MediaTitle,
    /// Cover image URL; empty when upstream had none.
    pub poster_url: String,
    pub format: Option<String>,
    /// User score, `0.0` when unset.
    pub score: f64,
    /// Episodes watched, `0` when unset.
    pub progress: i64,
    pub status: Option<String>,
}

impl MediaEntry {
    pub fn display_title(&self) -> &str {
        self.title.preferred()
    }

    /// URL to fetch the poster from, falling back to the id-based image service.
    pub fn poster_source(&self) -> String {
        if self.poster_url.is_empty() {
            format!("{POSTER_FALLBACK_BASE}/{}", self.media_id)
        } else {
            self.poster_url.clone()
        }
    }

    /// Convert an upstream entry; `None` when it has no media id.
    pub fn from_list_entry(entry: &ListEntry) -> Option<Self> {
        let media = entry.media.as_ref()?;
        let media_id = media.id?;
        Some(Self {
            media_id,
            title: media.title.clone(),
            poster_url: media
                .cover_image
                .as_ref()
                .and_then(|c| c.large.clone())
                .unwrap_or_default(),
            format: media.format.clone(),
            score: entry.score.unwrap_or(0.0),
            progress: entry.progress.unwrap_or(0),
            status: entry.status.clone(),
        })
    }
}

/// The three rendered list categories, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Watching,
    Completed,
    Planning,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Watching, Category::Completed, Category::Planning];

    pub fn label(self) -> &'static str {
        match self {
            Category::Watching => "Watching",
            Category::Completed => "Completed",
            Category::Planning => "Planning",
        }
    }

    /// Upstream list names that map to this category.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Category::Watching => &["Watching", "Current"],
            Category::Completed => &["Completed"],
            Category::Planning => &["Planning"],
        }
    }

    pub fn matches(self, list_name: &str) -> bool {
        self.synonyms().contains(&list_name)
    }
}

/// Entries bucketed by category. Every category is always present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedLists {
    pub watching: Vec<MediaEntry>,
    pub completed: Vec<MediaEntry>,
    pub planning: Vec<MediaEntry>,
}

impl CategorizedLists {
    pub fn get(&self, category: Category) -> &[MediaEntry] {
        match category {
            Category::Watching => &self.watching,
            Category::Completed => &self.completed,
            Category::Planning => &self.planning,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<MediaEntry> {
        match category {
            Category::Watching => &mut self.watching,
            Category::Completed => &mut self.completed,
            Category::Planning => &mut self.planning,
        }
    }

    /// Categories with their entries, in render order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[MediaEntry])> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Inlined poster data URIs keyed by media id. Missing or empty means no poster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PosterMap(HashMap<MediaId, String>);

impl PosterMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, media_id: MediaId, data_uri: String) {
        self.0.insert(media_id, data_uri);
    }

    /// The poster for `media_id`, or `None` when absent or empty.
    pub fn get(&self, media_id: MediaId) -> Option<&str> {
        self.0
            .get(&media_id)
            .map(String::as_str)
            .filter(|uri| !uri.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(MediaId, String)> for PosterMap {
    fn from_iter<I: IntoIterator<Item = (MediaId, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
