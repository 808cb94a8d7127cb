//! List every managed Enbox and print a one-line summary per entry.
//!
//! Run with: cargo run -p msp-client --example list_enboxes
//!
//! Make sure to set environment variables in .env:
//!   ENBOX_MSP_API_KEY - MSP API key for authentication

use msp_client::{normalize, MspClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Initializing MspClient...");
    let client = MspClient::from_env()?;
    println!("Endpoint: {}", client.config().api_url);
    println!();

    let reply = client.list_enboxes().await?;
    let enboxes = normalize::enboxes(&reply);
    let count = normalize::enbox_count(&reply, &enboxes);

    println!("{} Enboxes:", count);
    for enbox in &enboxes {
        let id = enbox["id"].as_str().unwrap_or("<no id>");
        let name = enbox["display_name"].as_str().unwrap_or("-");
        let active = enbox["is_active"].as_bool().unwrap_or(true);
        println!(
            "  {}  {}  [{}]",
            id,
            name,
            if active { "active" } else { "inactive" }
        );
    }

    Ok(())
}
