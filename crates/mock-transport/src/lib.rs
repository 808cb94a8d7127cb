//! Mock transport implementations for testing Enbox API clients.
//!
//! This crate provides scripted implementations of the `Transport` trait:
//! - [`MockTransport`] - canned replies, canned statuses, or injected
//!   transport failures, with full request recording
//!
//! For production traffic, use `enbox_core::HttpTransport` instead.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use enbox_core::{ActionInvoker, ActionParams, Credential};
//! use mock_transport::MockTransport;
//! use serde_json::json;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), enbox_core::EnboxError> {
//!     let transport = Arc::new(MockTransport::replying(json!({"enboxes": []})));
//!     let invoker = ActionInvoker::with_transport(
//!         "https://example.test/msp-api",
//!         Credential::msp("test-key"),
//!         transport.clone(),
//!     );
//!
//!     let reply = invoker.invoke("list-enboxes", ActionParams::new()).await?;
//!     assert_eq!(reply, json!({"enboxes": []}));
//!     assert_eq!(transport.request_count(), 1);
//!     Ok(())
//! }
//! ```

mod mock;

// Re-export core types for convenience
pub use enbox_core::{EnboxError, Transport, TransportReply};

pub use mock::{MockTransport, RecordedRequest};
