//! MspClient implementation.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use enbox_core::{ActionInvoker, ActionParams, Credential, EnboxError, Transport};

use crate::config::MspConfig;

/// Client for management (MSP) actions against the Enbox platform.
///
/// Each method issues exactly one `{ "action": ..., ...params }` POST to the
/// configured MSP endpoint, authenticated by the `X-MSP-API-Key` header, and
/// returns the remote service's JSON payload unmodified. The client performs
/// no domain validation beyond presence checks; duplicate emails, unknown
/// ids, rate limits and the like come back through the error channel.
pub struct MspClient {
    invoker: ActionInvoker,
    config: MspConfig,
}

impl MspClient {
    /// Create a new MspClient with the given configuration.
    pub fn new(config: MspConfig) -> Result<Self, EnboxError> {
        let invoker = ActionInvoker::new(&config.api_url, Credential::msp(config.api_key()))?;
        info!("MspClient initialized, endpoint: {}", config.api_url);
        Ok(Self { invoker, config })
    }

    /// Create an MspClient from environment variables.
    ///
    /// See [`MspConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, EnboxError> {
        let config = MspConfig::from_env()?;
        Self::new(config)
    }

    /// Create an MspClient over a caller-supplied transport.
    pub fn with_transport(config: MspConfig, transport: Arc<dyn Transport>) -> Self {
        let invoker = ActionInvoker::with_transport(
            &config.api_url,
            Credential::msp(config.api_key()),
            transport,
        );
        Self { invoker, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &MspConfig {
        &self.config
    }

    /// List all managed Enboxes.
    pub async fn list_enboxes(&self) -> Result<Value, EnboxError> {
        self.invoker.invoke("list-enboxes", ActionParams::new()).await
    }

    /// Create an Enbox directly, with a caller-chosen password.
    ///
    /// Fails locally, without sending a request, when `password` is absent.
    pub async fn create_enbox(
        &self,
        email: &str,
        password: Option<&str>,
        display_name: Option<&str>,
    ) -> Result<Value, EnboxError> {
        let Some(password) = password else {
            return Err(EnboxError::MissingParameter("password".to_string()));
        };

        debug!("Creating Enbox for {} (direct)", email);
        let params = ActionParams::new()
            .with("email", email)
            .with("password", password)
            .with("displayName", display_name);
        self.invoker.invoke("create-enbox", params).await
    }

    /// Create an Enbox via invite: the server issues a claim artifact
    /// (token/link) and the user sets their own password.
    pub async fn create_enbox_invite(
        &self,
        email: &str,
        display_name: Option<&str>,
    ) -> Result<Value, EnboxError> {
        debug!("Creating Enbox for {} (invite)", email);
        let params = ActionParams::new()
            .with("email", email)
            .with("displayName", display_name);
        self.invoker.invoke("create-enbox-invite", params).await
    }

    /// Fetch one managed Enbox by id.
    pub async fn get_enbox(&self, enbox_id: &str) -> Result<Value, EnboxError> {
        let params = ActionParams::new().with("managedEnboxId", enbox_id);
        self.invoker.invoke("get-enbox", params).await
    }

    /// Activate a managed Enbox.
    ///
    /// Idempotent from the client's perspective; the server decides the
    /// effect when the Enbox is already active.
    pub async fn activate_enbox(&self, enbox_id: &str) -> Result<Value, EnboxError> {
        let params = ActionParams::new().with("managedEnboxId", enbox_id);
        self.invoker.invoke("activate-enbox", params).await
    }

    /// Deactivate a managed Enbox. Same idempotence note as activation.
    pub async fn deactivate_enbox(&self, enbox_id: &str) -> Result<Value, EnboxError> {
        let params = ActionParams::new().with("managedEnboxId", enbox_id);
        self.invoker.invoke("deactivate-enbox", params).await
    }

    /// Fetch aggregate statistics.
    pub async fn get_stats(&self) -> Result<Value, EnboxError> {
        self.invoker.invoke("get-stats", ActionParams::new()).await
    }

    /// Fetch the usage breakdown.
    pub async fn get_usage(&self) -> Result<Value, EnboxError> {
        self.invoker.invoke("get-usage", ActionParams::new()).await
    }
}

impl std::fmt::Debug for MspClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MspClient")
            .field("endpoint", &self.config.api_url)
            .finish()
    }
}
