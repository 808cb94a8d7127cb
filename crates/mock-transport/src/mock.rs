//! Scripted transport with request recording.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use enbox_core::{EnboxError, Transport, TransportReply};

/// One request as the transport saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Endpoint URL the request was POSTed to.
    pub url: String,
    /// Credential header name.
    pub header_name: String,
    /// Credential header value.
    pub header_value: String,
    /// The JSON envelope that would have gone over the wire.
    pub body: Value,
}

/// One scripted outcome.
#[derive(Debug, Clone)]
enum Outcome {
    Reply { status: u16, body: Value },
    Fail(String),
}

impl Outcome {
    fn produce(&self) -> Result<TransportReply, EnboxError> {
        match self {
            Outcome::Reply { status, body } => Ok(TransportReply {
                status: *status,
                body: body.to_string().into_bytes(),
            }),
            Outcome::Fail(message) => Err(EnboxError::Transport(message.clone())),
        }
    }
}

/// A transport that answers from a script instead of the network.
///
/// Every request is recorded before an outcome is produced, so tests can
/// assert both on what was (or was not) sent and on how replies were
/// handled. Queued outcomes are consumed first-in-first-out; once the queue
/// is empty the fallback outcome (set by the convenience constructors)
/// answers every remaining call.
///
/// # Example
///
/// ```rust
/// use mock_transport::MockTransport;
/// use serde_json::json;
///
/// let transport = MockTransport::replying(json!({"ok": true}));
/// assert_eq!(transport.request_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Outcome>>,
    fallback: Option<Outcome>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// A transport with an empty script and no fallback.
    ///
    /// Every call fails with a "script exhausted" transport error until
    /// outcomes are queued with [`push_reply`](Self::push_reply) or
    /// [`push_failure`](Self::push_failure).
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that answers every call with a 200 and `body`.
    pub fn replying(body: Value) -> Self {
        Self {
            fallback: Some(Outcome::Reply { status: 200, body }),
            ..Self::default()
        }
    }

    /// A transport that answers every call with the given status and `body`.
    pub fn with_status(status: u16, body: Value) -> Self {
        Self {
            fallback: Some(Outcome::Reply { status, body }),
            ..Self::default()
        }
    }

    /// A transport where every call fails with a transport error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fallback: Some(Outcome::Fail(message.into())),
            ..Self::default()
        }
    }

    /// Queue one successful reply.
    pub fn push_reply(&self, status: u16, body: Value) {
        self.script
            .lock()
            .expect("mock transport script lock poisoned")
            .push_back(Outcome::Reply { status, body });
    }

    /// Queue one transport failure.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.script
            .lock()
            .expect("mock transport script lock poisoned")
            .push_back(Outcome::Fail(message.into()));
    }

    /// Every request recorded so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("mock transport request lock poisoned")
            .clone()
    }

    /// How many requests reached the transport.
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("mock transport request lock poisoned")
            .len()
    }

    fn next_outcome(&self) -> Result<TransportReply, EnboxError> {
        let queued = self
            .script
            .lock()
            .expect("mock transport script lock poisoned")
            .pop_front();

        match queued.as_ref().or(self.fallback.as_ref()) {
            Some(outcome) => outcome.produce(),
            None => Err(EnboxError::Transport(
                "mock transport script exhausted".to_string(),
            )),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_json(
        &self,
        url: &str,
        header_name: &str,
        header_value: &str,
        body: &Value,
    ) -> Result<TransportReply, EnboxError> {
        self.requests
            .lock()
            .expect("mock transport request lock poisoned")
            .push(RecordedRequest {
                url: url.to_string(),
                header_name: header_name.to_string(),
                header_value: header_value.to_string(),
                body: body.clone(),
            });

        self.next_outcome()
    }
}
