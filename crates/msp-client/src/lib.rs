//! Administrative (MSP) client for the Enbox platform.
//!
//! A service provider manages Enboxes on behalf of end customers: listing,
//! direct and invite-based creation, activation/deactivation, and
//! platform-level statistics. Every operation is one HTTP JSON action
//! against the MSP endpoint, authenticated by the `X-MSP-API-Key` header.
//!
//! # Example
//!
//! ```no_run
//! use msp_client::{MspClient, MspConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), enbox_core::EnboxError> {
//!     let client = MspClient::from_env()?;
//!
//!     let reply = client.list_enboxes().await?;
//!     for enbox in msp_client::normalize::enboxes(&reply) {
//!         println!("{}", enbox["id"]);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod config;
pub mod normalize;

pub use client::MspClient;
pub use config::{MspConfig, MspConfigBuilder, DEFAULT_MSP_API_URL};

// Re-export core types callers need alongside the client.
pub use enbox_core::{Cached, EnboxError};
