//! Send a test email to an Enbox id given on the command line.
//!
//! Run with: cargo run -p user-client --example send_email -- <enbox-id>
//!
//! Make sure to set environment variables in .env:
//!   ENBOX_USER_API_KEY - User API key for authentication

use std::env;

use user_client::{OutgoingEmail, Priority, UserClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let recipient = env::args()
        .nth(1)
        .ok_or("usage: send_email <enbox-id>")?;

    let client = UserClient::from_env()?;

    let mut email = OutgoingEmail::new(&recipient, "SDK test email");
    email
        .with_text("This is a test email sent from the user-client example.")
        .with_html("<p>This is a <strong>test email</strong> sent from the user-client example.</p>")
        .with_priority(Priority::Normal);

    let reply = client.send_email(&email).await?;
    println!("Sent: {}", reply);

    Ok(())
}
