//! Create an Enbox via invite and print the claim artifact.
//!
//! Run with: cargo run -p msp-client --example create_enbox -- customer@example.com
//!
//! Make sure to set environment variables in .env:
//!   ENBOX_MSP_API_KEY - MSP API key for authentication

use std::env;

use msp_client::{normalize, MspClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let email = env::args()
        .nth(1)
        .unwrap_or_else(|| "customer@example.com".to_string());

    let client = MspClient::from_env()?;

    println!("Creating invite for {}...", email);
    let reply = client.create_enbox_invite(&email, Some("Example Customer")).await?;

    match normalize::invite_path(&reply) {
        Some(path) => println!("Invite path: {}", path),
        None => println!("No invite path in reply: {}", reply),
    }
    if let Some(token) = normalize::invite_token(&reply) {
        println!("Token: {}", token);
    }
    if let Some(expires) = normalize::invite_expires_at(&reply) {
        println!("Expires: {}", expires);
    }

    Ok(())
}
