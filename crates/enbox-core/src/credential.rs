//! Role-scoped API credentials.

use secrecy::{ExposeSecret, SecretString};

/// Header carrying the management (MSP) API key.
pub const MSP_KEY_HEADER: &str = "X-MSP-API-Key";

/// Header carrying the mailbox-user API key.
pub const USER_KEY_HEADER: &str = "X-Enbox-API-Key";

/// An opaque bearer credential bound to the header it travels under.
///
/// The key is supplied by the caller's environment, never generated or
/// stored by the client, and is immutable once constructed. `Debug` output
/// never contains the key material.
#[derive(Clone)]
pub struct Credential {
    header_name: &'static str,
    key: SecretString,
}

impl Credential {
    /// Create a credential for an arbitrary header name.
    pub fn new(header_name: &'static str, key: impl Into<String>) -> Self {
        Self {
            header_name,
            key: SecretString::from(key.into()),
        }
    }

    /// Create a management-role credential (`X-MSP-API-Key`).
    pub fn msp(key: impl Into<String>) -> Self {
        Self::new(MSP_KEY_HEADER, key)
    }

    /// Create a mailbox-user credential (`X-Enbox-API-Key`).
    pub fn user(key: impl Into<String>) -> Self {
        Self::new(USER_KEY_HEADER, key)
    }

    /// The header name this credential is sent under.
    pub fn header_name(&self) -> &'static str {
        self.header_name
    }

    /// The key value (exposes the secret). Only the transport layer should
    /// need this, at the moment the header is written.
    pub fn expose_key(&self) -> &str {
        self.key.expose_secret()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("header_name", &self.header_name)
            .field("key", &"<redacted>")
            .finish()
    }
}
