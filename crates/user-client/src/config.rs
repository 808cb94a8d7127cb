//! Configuration for the mailbox-user client.

use secrecy::{ExposeSecret, SecretString};
use std::env;

use enbox_core::EnboxError;

/// Default User API endpoint.
pub const DEFAULT_USER_API_URL: &str =
    "https://cthgcqdyqplumqizjngx.supabase.co/functions/v1/user-api";

/// Configuration for the mailbox-user client.
#[derive(Debug, Clone)]
pub struct UserConfig {
    /// User API endpoint URL.
    pub api_url: String,

    /// API key for authentication.
    api_key: SecretString,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_USER_API_URL.to_string(),
            api_key: SecretString::from(String::new()),
        }
    }
}

impl UserConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ENBOX_USER_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `ENBOX_USER_API_URL` - API endpoint URL (default: production User endpoint)
    pub fn from_env() -> Result<Self, EnboxError> {
        let api_key = env::var("ENBOX_USER_API_KEY")
            .map_err(|_| EnboxError::MissingEnvVar("ENBOX_USER_API_KEY".to_string()))?;

        let api_url =
            env::var("ENBOX_USER_API_URL").unwrap_or_else(|_| DEFAULT_USER_API_URL.to_string());

        Ok(Self {
            api_url,
            api_key: SecretString::from(api_key),
        })
    }

    /// Create a new config builder.
    pub fn builder() -> UserConfigBuilder {
        UserConfigBuilder::default()
    }

    /// Get the API key (exposes the secret).
    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Builder for UserConfig.
#[derive(Debug, Default)]
pub struct UserConfigBuilder {
    config: UserConfig,
}

impl UserConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = SecretString::from(key.into());
        self
    }

    /// Set the API endpoint URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> UserConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_production_endpoint() {
        let config = UserConfig::default();
        assert_eq!(config.api_url, DEFAULT_USER_API_URL);
        assert!(config.api_key().is_empty());
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = UserConfig::builder()
            .api_key("user-key")
            .api_url("https://staging.example.test/user-api")
            .build();
        assert_eq!(config.api_url, "https://staging.example.test/user-api");
        assert_eq!(config.api_key(), "user-key");
    }

    #[test]
    fn debug_does_not_leak_the_key() {
        let config = UserConfig::builder().api_key("user-secret").build();
        assert!(!format!("{:?}", config).contains("user-secret"));
    }

    // Single test so the env mutations never race each other.
    #[test]
    fn from_env_reads_the_key_and_defaults_the_url() {
        env::set_var("ENBOX_USER_API_KEY", "env-user-key");
        env::set_var("ENBOX_USER_API_URL", "https://env.example.test/user-api");
        let config = UserConfig::from_env().unwrap();
        assert_eq!(config.api_key(), "env-user-key");
        assert_eq!(config.api_url, "https://env.example.test/user-api");

        env::remove_var("ENBOX_USER_API_URL");
        let config = UserConfig::from_env().unwrap();
        assert_eq!(config.api_url, DEFAULT_USER_API_URL);

        env::remove_var("ENBOX_USER_API_KEY");
        let error = UserConfig::from_env().unwrap_err();
        assert!(matches!(error, EnboxError::MissingEnvVar(_)));
    }
}
