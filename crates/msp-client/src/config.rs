//! Configuration for the MSP client.

use secrecy::{ExposeSecret, SecretString};
use std::env;

use enbox_core::EnboxError;

/// Default MSP API endpoint.
pub const DEFAULT_MSP_API_URL: &str =
    "https://cthgcqdyqplumqizjngx.supabase.co/functions/v1/msp-api";

/// Configuration for the MSP client.
#[derive(Debug, Clone)]
pub struct MspConfig {
    /// MSP API endpoint URL.
    pub api_url: String,

    /// API key for authentication.
    api_key: SecretString,
}

impl Default for MspConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_MSP_API_URL.to_string(),
            api_key: SecretString::from(String::new()),
        }
    }
}

impl MspConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ENBOX_MSP_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `ENBOX_MSP_API_URL` - API endpoint URL (default: production MSP endpoint)
    pub fn from_env() -> Result<Self, EnboxError> {
        let api_key = env::var("ENBOX_MSP_API_KEY")
            .map_err(|_| EnboxError::MissingEnvVar("ENBOX_MSP_API_KEY".to_string()))?;

        let api_url =
            env::var("ENBOX_MSP_API_URL").unwrap_or_else(|_| DEFAULT_MSP_API_URL.to_string());

        Ok(Self {
            api_url,
            api_key: SecretString::from(api_key),
        })
    }

    /// Create a new config builder.
    pub fn builder() -> MspConfigBuilder {
        MspConfigBuilder::default()
    }

    /// Get the API key (exposes the secret).
    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Builder for MspConfig.
#[derive(Debug, Default)]
pub struct MspConfigBuilder {
    config: MspConfig,
}

impl MspConfigBuilder {
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
    pub fn build(self) -> MspConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_production_endpoint() {
        let config = MspConfig::default();
        assert_eq!(config.api_url, DEFAULT_MSP_API_URL);
        assert!(config.api_key().is_empty());
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = MspConfig::builder()
            .api_key("msp-key")
            .api_url("https://staging.example.test/msp-api")
            .build();
        assert_eq!(config.api_url, "https://staging.example.test/msp-api");
        assert_eq!(config.api_key(), "msp-key");
    }

    #[test]
    fn debug_does_not_leak_the_key() {
        let config = MspConfig::builder().api_key("msp-secret").build();
        assert!(!format!("{:?}", config).contains("msp-secret"));
    }

    // Single test so the env mutations never race each other.
    #[test]
    fn from_env_reads_the_key_and_defaults_the_url() {
        env::set_var("ENBOX_MSP_API_KEY", "env-msp-key");
        env::set_var("ENBOX_MSP_API_URL", "https://env.example.test/msp-api");
        let config = MspConfig::from_env().unwrap();
        assert_eq!(config.api_key(), "env-msp-key");
        assert_eq!(config.api_url, "https://env.example.test/msp-api");

        env::remove_var("ENBOX_MSP_API_URL");
        let config = MspConfig::from_env().unwrap();
        assert_eq!(config.api_url, DEFAULT_MSP_API_URL);

        env::remove_var("ENBOX_MSP_API_KEY");
        let error = MspConfig::from_env().unwrap_err();
        assert!(matches!(error, EnboxError::MissingEnvVar(_)));
    }
}
