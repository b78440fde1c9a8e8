//! Partition upstream lists into the Watching / Completed / Planning buckets.

use crate::media::{CategorizedLists, Category, MediaEntry, MediaList};

/// Entry filtering options.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorizeOptions {
    /// Also drop entries without a cover image URL.
    pub require_poster: bool,
}

/// Bucket `lists` by category.
///
/// The first upstream list whose name matches a category's synonyms fills
/// that bucket; later matches are ignored. Entries keep upstream order.
/// Categories with no matching list come back empty.
pub fn categorize(lists: &[MediaList], options: CategorizeOptions) -> CategorizedLists {
    let mut out = CategorizedLists::default();

    for category in Category::ALL {
        let Some(list) = lists.iter().find(|l| category.matches(&l.name)) else {
            tracing::debug!(category = category.label(), "No upstream list for category");
            continue;
        };

        let entries: Vec<MediaEntry> = list
            .entries
            .iter()
            .filter_map(MediaEntry::from_list_entry)
            .filter(|e| !options.require_poster || !e.poster_url.is_empty())
            .collect();

        let dropped = list.entries.len() - entries.len();
        if dropped > 0 {
            tracing::debug!(
                category = category.label(),
                list = %list.name,
                dropped,
                "Dropped unresolvable entries"
            );
        }

        *out.get_mut(category) = entries;
    }

    out
}
