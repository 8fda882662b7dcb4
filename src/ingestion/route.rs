//! `/resource/id` path parsing.

use serde::{Deserialize, Serialize};

/// Result of [`parse_route`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRoute {
    /// First path segment; empty for `/` or an empty path.
    pub resource: String,
    /// Second path segment, if present and non-empty.
    pub id: Option<String>,
}

/// Splits a path into resource and id. Leading slashes are ignored; segments past the second are
/// dropped.
pub fn parse_route(path: &str) -> ParsedRoute {
    let mut segments = path.trim_start_matches('/').split('/');
    let resource = segments.next().unwrap_or_default().to_string();
    let id = segments
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    ParsedRoute { resource, id }
}
