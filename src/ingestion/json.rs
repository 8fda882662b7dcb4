//! Parse boundary for untyped JSON input.
//!
//! Callers hand over an arbitrary [`serde_json::Value`] (or raw JSON text); a typed record comes
//! back only if every required field is present with the expected type. Nothing is partially
//! populated.

use serde_json::{Map, Value};

use crate::types::UserSummary;

/// Parse an untyped value into a [`UserSummary`].
///
/// Returns `None` unless `input` is an object with a string `username` and a numeric `points`.
/// Extra fields are ignored.
pub fn parse_user_summary(input: &Value) -> Option<UserSummary> {
    let Some(obj) = input.as_object() else {
        tracing::debug!(kind = json_kind(input), "user summary rejected: not an object");
        return None;
    };

    let username = required_field(obj, "username", Value::as_str)?;
    let points = required_field(obj, "points", Value::as_f64)?;

    Some(UserSummary {
        username: username.to_string(),
        points,
    })
}

/// Parse raw JSON text into a [`UserSummary`]; malformed JSON yields `None`.
pub fn parse_user_summary_str(input: &str) -> Option<UserSummary> {
    match serde_json::from_str::<Value>(input) {
        Ok(v) => parse_user_summary(&v),
        Err(e) => {
            tracing::debug!(error = %e, "user summary rejected: invalid json");
            None
        }
    }
}

fn required_field<'a, T>(
    obj: &'a Map<String, Value>,
    name: &str,
    extract: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    let Some(raw) = obj.get(name) else {
        tracing::debug!(field = name, "user summary rejected: missing field");
        return None;
    };
    let out = extract(raw);
    if out.is_none() {
        tracing::debug!(field = name, kind = json_kind(raw), "user summary rejected: wrong type");
    }
    out
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
