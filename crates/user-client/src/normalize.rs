//! Normalization of User API response shapes.
//!
//! Single entities may arrive wrapped (`{"email": {...}}`) or bare; the
//! email list sits under `emails`. Consumers go through these helpers
//! instead of probing keys themselves.

use serde_json::Value;

use enbox_core::normalize::{entity_under_key, list_under_keys};

/// Extract the email list from a `list-emails` reply.
pub fn emails(reply: &Value) -> Vec<Value> {
    list_under_keys(reply, &["emails"])
}

/// Extract the email entity from a `get-email` reply.
pub fn email(reply: &Value) -> &Value {
    entity_under_key(reply, "email")
}

/// Extract the profile entity from a `get-profile` reply.
pub fn profile(reply: &Value) -> &Value {
    entity_under_key(reply, "profile")
}

/// Extract the user entity from a `resolve-enbox` reply.
pub fn resolved_user(reply: &Value) -> &Value {
    entity_under_key(reply, "user")
}
