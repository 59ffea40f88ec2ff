//! Substring filtering of the entry set

use super::entry::EntrySet;

/// Indices of the entries matching `query`, in entry-set order
///
/// Matching is a case-insensitive substring test on the display text.
/// An empty query means no filtering and yields every index.
#[must_use]
pub fn filter_entries(entries: &EntrySet, query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..entries.len()).collect();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.contains_lowercase(&needle))
        .map(|(idx, _)| idx)
        .collect()
}
