//! Named parameters for a remote action.

use serde_json::{Map, Value};

/// An open mapping of parameter names to JSON values.
///
/// Parameter keys are action-specific; the invoker merges them with the
/// `action` envelope key at send time. Values accept anything convertible
/// into [`serde_json::Value`], so `Option<T>` inserts JSON `null` for `None`
/// the way the remote envelope expects for omitted optional fields.
#[derive(Debug, Clone, Default)]
pub struct ActionParams(Map<String, Value>);

impl ActionParams {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Chaining variant of [`insert`](Self::insert) for building maps inline.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Whether a parameter with this name is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Whether the map holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Consume the map, yielding the underlying JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Build parameters from an already-serialized JSON object.
    ///
    /// Returns `None` when the value is not an object; used by facades that
    /// serialize a wire-shaped struct and pass it through unchanged.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_and_with_build_the_same_map() {
        let mut built = ActionParams::new();
        built.insert("folder", "inbox").insert("limit", 50);

        let chained = ActionParams::new().with("folder", "inbox").with("limit", 50);

        assert_eq!(
            Value::Object(built.into_map()),
            Value::Object(chained.into_map())
        );
    }

    #[test]
    fn none_option_inserts_null() {
        let display_name: Option<String> = None;
        let params = ActionParams::new().with("displayName", display_name);
        let map = params.into_map();
        assert_eq!(map.get("displayName"), Some(&Value::Null));
    }

    #[test]
    fn from_value_requires_an_object() {
        assert!(ActionParams::from_value(json!({"a": 1})).is_some());
        assert!(ActionParams::from_value(json!([1, 2])).is_none());
        assert!(ActionParams::from_value(json!("text")).is_none());
    }
}
