//! Mailbox-user client for the Enbox platform.
//!
//! Everything the owner of a single Enbox does: browse folders, read and
//! send email, star/archive/trash, manage drafts and labels, and resolve
//! opaque Enbox ids to profiles. Every operation is one HTTP JSON action
//! against the User endpoint, authenticated by the `X-Enbox-API-Key`
//! header.
//!
//! # Example
//!
//! ```no_run
//! use user_client::{EmailQuery, OutgoingEmail, UserClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), enbox_core::EnboxError> {
//!     let client = UserClient::from_env()?;
//!
//!     let reply = client.list_emails(&EmailQuery::default()).await?;
//!     for email in user_client::normalize::emails(&reply) {
//!         println!("{}", email["subject"]);
//!     }
//!
//!     let mut email = OutgoingEmail::new("enbox-recipient", "Hello");
//!     email.with_text("Hi from the SDK");
//!     client.send_email(&email).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
pub mod normalize;
mod types;

pub use client::UserClient;
pub use config::{UserConfig, UserConfigBuilder, DEFAULT_USER_API_URL};
pub use types::{EmailQuery, OutgoingEmail, Priority};

// Re-export core types callers need alongside the client.
pub use enbox_core::{Cached, EnboxError};
