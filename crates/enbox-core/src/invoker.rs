//! The generic action invoker shared by every Enbox client.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::credential::Credential;
use crate::error::EnboxError;
use crate::params::ActionParams;
use crate::transport::{HttpTransport, Transport};

/// Envelope key naming the requested action.
const ACTION_KEY: &str = "action";

/// Longest body snippet carried into a status error.
const ERROR_BODY_LIMIT: usize = 512;

/// Invokes remote actions against one fixed endpoint with one credential.
///
/// This is the single generic client both role facades are built on: it is
/// configured entirely by `(endpoint URL, credential)` at construction and is
/// immutable afterwards. Each invocation serializes `{ "action": <name>,
/// ...params }`, POSTs it once (no retries, no backoff), and normalizes every
/// failure mode into [`EnboxError`].
#[derive(Clone)]
pub struct ActionInvoker {
    endpoint: String,
    credential: Credential,
    transport: Arc<dyn Transport>,
}

impl ActionInvoker {
    /// Create an invoker using the production HTTP transport.
    pub fn new(endpoint: impl Into<String>, credential: Credential) -> Result<Self, EnboxError> {
        let transport = Arc::new(HttpTransport::new()?);
        Ok(Self::with_transport(endpoint, credential, transport))
    }

    /// Create an invoker over a caller-supplied transport.
    ///
    /// This is the seam tests use to substitute a mock transport.
    pub fn with_transport(
        endpoint: impl Into<String>,
        credential: Credential,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            credential,
            transport,
        }
    }

    /// The endpoint URL this invoker POSTs to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Invoke one remote action.
    ///
    /// Local preconditions (empty action name, a parameter squatting on the
    /// reserved `action` key) fail before any request is sent. Otherwise the
    /// result is the decoded response body on a 2xx status, or an error
    /// describing the transport failure, the non-success status, or the
    /// undecodable body.
    pub async fn invoke(&self, action: &str, params: ActionParams) -> Result<Value, EnboxError> {
        if action.is_empty() {
            return Err(EnboxError::EmptyAction);
        }
        if params.contains_key(ACTION_KEY) {
            return Err(EnboxError::ReservedParameter);
        }

        let mut body = params.into_map();
        body.insert(ACTION_KEY.to_string(), Value::String(action.to_string()));
        let body = Value::Object(body);

        debug!("Invoking '{}' against {}", action, self.endpoint);

        let reply = self
            .transport
            .post_json(
                &self.endpoint,
                self.credential.header_name(),
                self.credential.expose_key(),
                &body,
            )
            .await?;

        if !reply.is_success() {
            return Err(EnboxError::Status {
                status: reply.status,
                body: error_body_snippet(reply.status, &reply.body),
            });
        }

        serde_json::from_slice(&reply.body).map_err(|e| EnboxError::Decode(e.to_string()))
    }
}

impl std::fmt::Debug for ActionInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionInvoker")
            .field("endpoint", &self.endpoint)
            .field("credential", &self.credential)
            .finish()
    }
}

/// Reduce a non-success body to a bounded, human-readable snippet.
///
/// Falls back to the status line's canonical reason when the body is blank.
fn error_body_snippet(status: u16, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("no response body")
            .to_string();
    }
    trimmed.chars().take(ERROR_BODY_LIMIT).collect()
}
