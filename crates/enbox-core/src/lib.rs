//! Core action-invocation primitive and shared types for Enbox API clients.
//!
//! The Enbox platform exposes two HTTP JSON APIs (management and mailbox
//! user) that both speak the same envelope: a single POST of
//! `{ "action": "<name>", ...parameters }` authenticated by a role-specific
//! credential header. This crate provides everything the role clients share:
//!
//! - [`ActionInvoker`] - the one generic parametrized client (endpoint URL,
//!   credential, transport)
//! - [`ActionParams`] - the open named-parameter map
//! - [`Credential`] - a role-scoped opaque bearer secret
//! - [`Transport`] / [`HttpTransport`] - the seam to the network
//! - [`EnboxError`] - the uniform error channel
//! - [`normalize`] / [`Cached`] - response-shape tolerance and caller-owned
//!   caching for the presentation boundary
//!
//! # Example
//!
//! ```no_run
//! use enbox_core::{ActionInvoker, ActionParams, Credential};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), enbox_core::EnboxError> {
//!     let invoker = ActionInvoker::new(
//!         "https://example.com/functions/v1/msp-api",
//!         Credential::msp("api-key"),
//!     )?;
//!
//!     let stats = invoker.invoke("get-stats", ActionParams::new()).await?;
//!     println!("{}", stats);
//!     Ok(())
//! }
//! ```

mod cache;
mod credential;
mod error;
mod invoker;
pub mod normalize;
mod params;
mod transport;

pub use cache::Cached;
pub use credential::{Credential, MSP_KEY_HEADER, USER_KEY_HEADER};
pub use error::EnboxError;
pub use invoker::ActionInvoker;
pub use params::ActionParams;
pub use transport::{HttpTransport, Transport, TransportReply};

// Re-export async_trait for downstream Transport implementations.
pub use async_trait::async_trait;
