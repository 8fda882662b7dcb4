//! Page windows over a slice.

/// Returns page `page` (1-indexed) of `items`, `page_size` items per page.
///
/// Both `page` and `page_size` are clamped to a minimum of 1. A window starting past the end
/// yields an empty `Vec`; a window running past the end is truncated.
pub fn paginate<T: Clone>(items: &[T], page: i64, page_size: i64) -> Vec<T> {
    page_window(items, page, page_size).to_vec()
}

/// Borrowing form of [`paginate`].
pub fn page_window<T>(items: &[T], page: i64, page_size: i64) -> &[T] {
    let page = clamp_to_usize(page);
    let size = clamp_to_usize(page_size);
    let start = (page - 1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

fn clamp_to_usize(v: i64) -> usize {
    usize::try_from(v.max(1)).unwrap_or(usize::MAX)
}
