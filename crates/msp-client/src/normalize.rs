//! Normalization of MSP API response shapes.
//!
//! The management API is not uniform about where it puts things: the Enbox
//! list may arrive under `enboxes`, `managedEnboxes`, or `data` (or as a
//! bare array), and invite replies have used both `invite_path` and
//! `invite_link`. Consumers go through these helpers instead of probing
//! keys themselves.

use serde_json::Value;

use enbox_core::normalize::{count_or_len, list_under_keys};

/// Keys the Enbox list has been observed under.
const ENBOX_LIST_KEYS: &[&str] = &["enboxes", "managedEnboxes", "data"];

/// Extract the Enbox list from a `list-enboxes` reply.
pub fn enboxes(reply: &Value) -> Vec<Value> {
    list_under_keys(reply, ENBOX_LIST_KEYS)
}

/// Total Enbox count: the reported `count` field, else the list length.
pub fn enbox_count(reply: &Value, enboxes: &[Value]) -> usize {
    count_or_len(reply, enboxes)
}

/// Extract the invite path from a `create-enbox-invite` reply.
///
/// Accepts `invite_path` or the older `invite_link`, and trims any host
/// prefix so the result always starts at `/invite/` when that segment is
/// present.
pub fn invite_path(reply: &Value) -> Option<String> {
    let raw = reply
        .get("invite_path")
        .or_else(|| reply.get("invite_link"))
        .and_then(Value::as_str)?;

    match raw.rfind("/invite/") {
        Some(idx) => Some(raw[idx..].to_string()),
        None => Some(raw.to_string()),
    }
}

/// The invite claim token, if the reply carries one.
pub fn invite_token(reply: &Value) -> Option<&str> {
    reply.get("invite_token").and_then(Value::as_str)
}

/// The invite expiry timestamp, if the reply carries one.
pub fn invite_expires_at(reply: &Value) -> Option<&str> {
    reply.get("invite_expires_at").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_is_accepted_under_every_known_key() {
        let expected = vec![json!({"id": "e1"})];
        for key in ["enboxes", "managedEnboxes", "data"] {
            let reply = json!({ key: [{"id": "e1"}] });
            assert_eq!(enboxes(&reply), expected, "key {}", key);
        }
        assert_eq!(enboxes(&json!([{"id": "e1"}])), expected);
    }

    #[test]
    fn count_falls_back_to_list_length() {
        let items = vec![json!({"id": "e1"}), json!({"id": "e2"})];
        assert_eq!(enbox_count(&json!({"count": 10}), &items), 10);
        assert_eq!(enbox_count(&json!({}), &items), 2);
    }

    #[test]
    fn invite_path_accepts_both_keys() {
        let reply = json!({"invite_path": "/invite/tok123"});
        assert_eq!(invite_path(&reply).as_deref(), Some("/invite/tok123"));

        let reply = json!({"invite_link": "https://portal.example.test/invite/tok456"});
        assert_eq!(invite_path(&reply).as_deref(), Some("/invite/tok456"));
    }

    #[test]
    fn invite_path_without_marker_passes_through() {
        let reply = json!({"invite_path": "tok789"});
        assert_eq!(invite_path(&reply).as_deref(), Some("tok789"));
        assert_eq!(invite_path(&json!({})), None);
    }

    #[test]
    fn invite_metadata_is_read_when_present() {
        let reply = json!({
            "invite_token": "tok123",
            "invite_expires_at": "2026-09-01T00:00:00Z"
        });
        assert_eq!(invite_token(&reply), Some("tok123"));
        assert_eq!(invite_expires_at(&reply), Some("2026-09-01T00:00:00Z"));
        assert_eq!(invite_token(&json!({})), None);
    }
}
