//! List the inbox and print a one-line summary per email.
//!
//! Run with: cargo run -p user-client --example inbox
//! Or for another folder: cargo run -p user-client --example inbox -- sent
//!
//! Make sure to set environment variables in .env:
//!   ENBOX_USER_API_KEY - User API key for authentication

use std::env;

use user_client::{normalize, EmailQuery, UserClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let folder = env::args().nth(1).unwrap_or_else(|| "inbox".to_string());

    let client = UserClient::from_env()?;
    println!("Endpoint: {}", client.config().api_url);

    let reply = client.list_emails(&EmailQuery::folder(&folder)).await?;
    let emails = normalize::emails(&reply);

    println!("{} emails in {}:", emails.len(), folder);
    for email in &emails {
        let starred = email["is_starred"].as_bool().unwrap_or(false);
        let subject = email["subject"].as_str().unwrap_or("No Subject");
        let from = email["from_name"].as_str().unwrap_or("Unknown");
        println!("  {} {}  - {}", if starred { "*" } else { " " }, subject, from);
    }

    Ok(())
}
