//! Shallow merges: patch fields override base fields, absent fields keep the base value.

use serde_json::{Map, Value};

use crate::types::{Settings, SettingsPatch};

/// Applies `patch` over `base`.
pub fn merge_settings(base: &Settings, patch: &SettingsPatch) -> Settings {
    Settings {
        language: patch.language.unwrap_or(base.language),
        dark_mode: patch.dark_mode.unwrap_or(base.dark_mode),
        items_per_page: patch.items_per_page.unwrap_or(base.items_per_page),
    }
}

/// Key-wise shallow merge of two JSON objects.
///
/// Nested values present in `patch` replace the base value wholesale; they are not merged.
pub fn merge_json(base: &Map<String, Value>, patch: &Map<String, Value>) -> Map<String, Value> {
    let mut out = base.clone();
    for (key, value) in patch {
        out.insert(key.clone(), value.clone());
    }
    out
}
