//! Tolerant readers for the remote service's response shapes.
//!
//! The remote service owns its payload shapes and is not perfectly uniform:
//! a list may sit under one of several alternate keys or arrive as a bare
//! array, and a single entity may or may not be wrapped in a named object.
//! These functions are the one place that tolerance lives; the role clients
//! bind the domain-specific key lists so consumers never duplicate them.

use serde_json::Value;

/// Extract a list that may sit under any of `keys`, or be the value itself.
///
/// Checks the keys in order on an object response, falls back to treating
/// the whole value as the list, and yields an empty vector when no list is
/// found anywhere.
pub fn list_under_keys(value: &Value, keys: &[&str]) -> Vec<Value> {
    if let Value::Object(map) = value {
        for key in keys {
            if let Some(Value::Array(items)) = map.get(*key) {
                return items.clone();
            }
        }
        return Vec::new();
    }
    match value {
        Value::Array(items) => items.clone(),
        _ => Vec::new(),
    }
}

/// Extract an entity that may be wrapped under `key`.
///
/// Returns the inner value when the response is an object carrying `key`,
/// otherwise the response itself.
pub fn entity_under_key<'a>(value: &'a Value, key: &str) -> &'a Value {
    match value {
        Value::Object(map) => map.get(key).unwrap_or(value),
        _ => value,
    }
}

/// Read a reported `count` field, falling back to the extracted list length.
pub fn count_or_len(value: &Value, items: &[Value]) -> usize {
    value
        .get("count")
        .and_then(Value::as_u64)
        .map(|n| n as usize)
        .unwrap_or(items.len())
}
