//! UserClient implementation.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use enbox_core::{ActionInvoker, ActionParams, Credential, EnboxError, Transport};

use crate::config::UserConfig;
use crate::types::{EmailQuery, OutgoingEmail};

/// Client for mailbox-user actions against the Enbox platform.
///
/// Operations the owner of a single Enbox performs: reading, sending and
/// organizing email, listing labels, and resolving opaque Enbox ids to
/// profiles. Every method issues exactly one `{ "action": ..., ...params }`
/// POST to the configured User endpoint, authenticated by the
/// `X-Enbox-API-Key` header, and returns the remote JSON payload unmodified.
pub struct UserClient {
    invoker: ActionInvoker,
    config: UserConfig,
}

impl UserClient {
    /// Create a new UserClient with the given configuration.
    pub fn new(config: UserConfig) -> Result<Self, EnboxError> {
        let invoker = ActionInvoker::new(&config.api_url, Credential::user(config.api_key()))?;
        info!("UserClient initialized, endpoint: {}", config.api_url);
        Ok(Self { invoker, config })
    }

    /// Create a UserClient from environment variables.
    ///
    /// See [`UserConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, EnboxError> {
        let config = UserConfig::from_env()?;
        Self::new(config)
    }

    /// Create a UserClient over a caller-supplied transport.
    pub fn with_transport(config: UserConfig, transport: Arc<dyn Transport>) -> Self {
        let invoker = ActionInvoker::with_transport(
            &config.api_url,
            Credential::user(config.api_key()),
            transport,
        );
        Self { invoker, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &UserConfig {
        &self.config
    }

    /// Fetch the authenticated user's profile.
    pub async fn get_profile(&self) -> Result<Value, EnboxError> {
        self.invoker.invoke("get-profile", ActionParams::new()).await
    }

    /// List emails in a folder, paginated.
    pub async fn list_emails(&self, query: &EmailQuery) -> Result<Value, EnboxError> {
        debug!("Listing {} (limit {}, offset {})", query.folder, query.limit, query.offset);
        let params = ActionParams::new()
            .with("folder", query.folder.as_str())
            .with("limit", query.limit)
            .with("offset", query.offset);
        self.invoker.invoke("list-emails", params).await
    }

    /// Fetch one email by id.
    pub async fn get_email(&self, email_id: &str) -> Result<Value, EnboxError> {
        self.invoke_on_email("get-email", email_id).await
    }

    /// Send an email.
    ///
    /// Fails locally, without sending a request, when the recipient list is
    /// empty. Omitted cc/bcc lists go over the wire as empty lists, never
    /// null.
    pub async fn send_email(&self, email: &OutgoingEmail) -> Result<Value, EnboxError> {
        if email.to.is_empty() {
            return Err(EnboxError::InvalidParameter {
                name: "to".to_string(),
                reason: "recipient list is empty".to_string(),
            });
        }

        debug!("Sending email to {} recipient(s)", email.to.len());
        let value = serde_json::to_value(email)?;
        let params = ActionParams::from_value(value).ok_or_else(|| EnboxError::InvalidParameter {
            name: "email".to_string(),
            reason: "did not serialize to an object".to_string(),
        })?;
        self.invoker.invoke("send-email", params).await
    }

    /// Mark an email as read.
    pub async fn mark_read(&self, email_id: &str) -> Result<Value, EnboxError> {
        self.invoke_on_email("mark-read", email_id).await
    }

    /// Mark an email as unread.
    pub async fn mark_unread(&self, email_id: &str) -> Result<Value, EnboxError> {
        self.invoke_on_email("mark-unread", email_id).await
    }

    /// Star an email.
    pub async fn star(&self, email_id: &str) -> Result<Value, EnboxError> {
        self.invoke_on_email("star", email_id).await
    }

    /// Remove the star from an email.
    pub async fn unstar(&self, email_id: &str) -> Result<Value, EnboxError> {
        self.invoke_on_email("unstar", email_id).await
    }

    /// Move an email to the archive.
    pub async fn archive(&self, email_id: &str) -> Result<Value, EnboxError> {
        self.invoke_on_email("archive", email_id).await
    }

    /// Move an email to the trash.
    pub async fn trash(&self, email_id: &str) -> Result<Value, EnboxError> {
        self.invoke_on_email("trash", email_id).await
    }

    /// Restore an email from the trash.
    pub async fn restore(&self, email_id: &str) -> Result<Value, EnboxError> {
        self.invoke_on_email("restore", email_id).await
    }

    /// Delete a draft.
    pub async fn delete_draft(&self, email_id: &str) -> Result<Value, EnboxError> {
        self.invoke_on_email("delete-draft", email_id).await
    }

    /// List the user's labels.
    pub async fn list_labels(&self) -> Result<Value, EnboxError> {
        self.invoker.invoke("list-labels", ActionParams::new()).await
    }

    /// Resolve an opaque Enbox id to a human-facing profile.
    pub async fn resolve_enbox(&self, enbox_id: &str) -> Result<Value, EnboxError> {
        let params = ActionParams::new().with("enboxId", enbox_id);
        self.invoker.invoke("resolve-enbox", params).await
    }

    /// All the single-email actions share one parameter shape.
    async fn invoke_on_email(&self, action: &str, email_id: &str) -> Result<Value, EnboxError> {
        let params = ActionParams::new().with("emailId", email_id);
        self.invoker.invoke(action, params).await
    }
}

impl std::fmt::Debug for UserClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserClient")
            .field("endpoint", &self.config.api_url)
            .finish()
    }
}
