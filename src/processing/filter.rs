//! Filtering and search over record collections.

use crate::types::StockItem;

/// Returns the items with `quantity <= reorder_at`, in their original order.
pub fn low_stock(items: &[StockItem]) -> Vec<StockItem> {
    items.iter().filter(|item| item.is_low()).cloned().collect()
}

/// Case-insensitive substring search.
///
/// The query is trimmed and lower-cased before comparison. An empty query matches every note.
pub fn search_notes<S>(notes: &[S], query: &str) -> Vec<String>
where
    S: AsRef<str>,
{
    let q = query.trim().to_lowercase();
    notes
        .iter()
        .filter_map(|note| {
            let note: &str = note.as_ref();
            note.to_lowercase().contains(&q).then(|| note.to_string())
        })
        .collect()
}
