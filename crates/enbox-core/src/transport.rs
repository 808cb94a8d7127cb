//! Transport seam between the invoker and the network.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::EnboxError;

/// A raw HTTP reply: status code plus unparsed body bytes.
///
/// The transport reports every completed HTTP exchange, success or not; the
/// invoker decides what a given status means.
#[derive(Debug, Clone)]
pub struct TransportReply {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl TransportReply {
    /// Whether the status is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST and returns the raw reply.
///
/// Implementations must not retry: each call is exactly one attempt, and a
/// failure to complete the exchange (DNS, TCP, TLS, timeout) is reported as
/// [`EnboxError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `url` with the given credential header.
    async fn post_json(
        &self,
        url: &str,
        header_name: &str,
        header_value: &str,
        body: &Value,
    ) -> Result<TransportReply, EnboxError>;
}

/// The production transport, backed by [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    pub fn new() -> Result<Self, EnboxError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| EnboxError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        header_name: &str,
        header_value: &str,
        body: &Value,
    ) -> Result<TransportReply, EnboxError> {
        let response = self
            .client
            .post(url)
            .header(header_name, header_value)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| EnboxError::Transport(format!("Failed to send request: {}", e)))?;

        let status = response.status().as_u16();
        debug!("POST {} answered with status {}", url, status);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| EnboxError::Transport(format!("Failed to read response body: {}", e)))?;

        Ok(TransportReply {
            status,
            body: bytes.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        let reply = |status| TransportReply { status, body: Vec::new() };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(reply(299).is_success());
        assert!(!reply(199).is_success());
        assert!(!reply(301).is_success());
        assert!(!reply(401).is_success());
        assert!(!reply(500).is_success());
    }
}
