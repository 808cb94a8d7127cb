//! Integration tests for the mailbox-user client against a mock transport.

use std::sync::Arc;

use serde_json::json;

use enbox_core::EnboxError;
use mock_transport::MockTransport;
use user_client::{EmailQuery, OutgoingEmail, UserClient, UserConfig};

fn client_with(transport: Arc<MockTransport>) -> UserClient {
    let config = UserConfig::builder()
        .api_key("test-user-key")
        .api_url("https://example.test/functions/v1/user-api")
        .build();
    UserClient::with_transport(config, transport)
}

#[tokio::test]
async fn get_profile_sends_the_action_envelope_and_credential_header() {
    let transport = Arc::new(MockTransport::replying(json!({
        "profile": {"enbox_id": "en1", "display_name": "Ana"}
    })));
    let client = client_with(transport.clone());

    let reply = client.get_profile().await.unwrap();
    assert_eq!(
        user_client::normalize::profile(&reply)["display_name"],
        "Ana"
    );

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].header_name, "X-Enbox-API-Key");
    assert_eq!(requests[0].header_value, "test-user-key");
    assert_eq!(requests[0].body, json!({"action": "get-profile"}));
}

#[tokio::test]
async fn list_emails_passes_pagination_through() {
    let transport = Arc::new(MockTransport::replying(json!({"emails": []})));
    let client = client_with(transport.clone());

    let query = EmailQuery::folder("sent").limit(10).offset(30);
    client.list_emails(&query).await.unwrap();

    assert_eq!(
        transport.requests()[0].body,
        json!({"action": "list-emails", "folder": "sent", "limit": 10, "offset": 30})
    );
}

#[tokio::test]
async fn default_query_lists_the_inbox_first_page() {
    let transport = Arc::new(MockTransport::replying(json!({"emails": []})));
    let client = client_with(transport.clone());

    client.list_emails(&EmailQuery::default()).await.unwrap();

    assert_eq!(
        transport.requests()[0].body,
        json!({"action": "list-emails", "folder": "inbox", "limit": 50, "offset": 0})
    );
}

#[tokio::test]
async fn send_email_round_trips_recipients_and_defaults() {
    let transport = Arc::new(MockTransport::replying(json!({"id": "msg-1"})));
    let client = client_with(transport.clone());

    let mut email = OutgoingEmail::new_multi(["a", "b"], "Greetings");
    email.with_text("hello");
    client.send_email(&email).await.unwrap();

    let body = &transport.requests()[0].body;
    assert_eq!(body["action"], "send-email");
    assert_eq!(body["to"], json!(["a", "b"]));
    // Omitted cc/bcc normalize to empty lists, never null.
    assert_eq!(body["cc"], json!([]));
    assert_eq!(body["bcc"], json!([]));
    assert_eq!(body["subject"], "Greetings");
    assert_eq!(body["bodyText"], "hello");
    assert_eq!(body["bodyHtml"], "");
    assert_eq!(body["priority"], "normal");
}

#[tokio::test]
async fn send_email_without_recipients_fails_locally() {
    let transport = Arc::new(MockTransport::replying(json!({"ok": true})));
    let client = client_with(transport.clone());

    let email = OutgoingEmail::new_multi(Vec::<String>::new(), "Empty");
    let error = client.send_email(&email).await.unwrap_err();

    assert!(matches!(error, EnboxError::InvalidParameter { .. }));
    assert!(!error.to_string().is_empty());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn single_email_actions_address_by_email_id() {
    let transport = Arc::new(MockTransport::replying(json!({"ok": true})));
    let client = client_with(transport.clone());

    client.get_email("msg-7").await.unwrap();
    client.mark_read("msg-7").await.unwrap();
    client.mark_unread("msg-7").await.unwrap();
    client.star("msg-7").await.unwrap();
    client.unstar("msg-7").await.unwrap();
    client.archive("msg-7").await.unwrap();
    client.trash("msg-7").await.unwrap();
    client.restore("msg-7").await.unwrap();
    client.delete_draft("msg-7").await.unwrap();

    let requests = transport.requests();
    let actions: Vec<&str> = requests
        .iter()
        .map(|r| r.body["action"].as_str().unwrap())
        .collect();
    assert_eq!(
        actions,
        [
            "get-email",
            "mark-read",
            "mark-unread",
            "star",
            "unstar",
            "archive",
            "trash",
            "restore",
            "delete-draft"
        ]
    );
    for request in &requests {
        assert_eq!(request.body["emailId"], "msg-7");
    }
}

#[tokio::test]
async fn resolve_enbox_addresses_by_enbox_id() {
    let transport = Arc::new(MockTransport::replying(json!({
        "user": {"display_name": "Ana"}
    })));
    let client = client_with(transport.clone());

    let reply = client.resolve_enbox("en-42").await.unwrap();
    assert_eq!(
        user_client::normalize::resolved_user(&reply)["display_name"],
        "Ana"
    );
    assert_eq!(
        transport.requests()[0].body,
        json!({"action": "resolve-enbox", "enboxId": "en-42"})
    );
}

#[tokio::test]
async fn list_labels_takes_no_parameters() {
    let transport = Arc::new(MockTransport::replying(json!({"labels": []})));
    let client = client_with(transport.clone());

    client.list_labels().await.unwrap();
    assert_eq!(transport.requests()[0].body, json!({"action": "list-labels"}));
}

#[tokio::test]
async fn unauthorized_reply_surfaces_as_a_status_error() {
    let transport = Arc::new(MockTransport::with_status(401, json!({"message": "nope"})));
    let client = client_with(transport);

    let error = client.get_profile().await.unwrap_err();
    assert!(matches!(error, EnboxError::Status { status: 401, .. }));
}

#[tokio::test]
async fn transport_failure_surfaces_as_a_non_empty_error_string() {
    let transport = Arc::new(MockTransport::failing("tls handshake failed"));
    let client = client_with(transport);

    let error = client.list_labels().await.unwrap_err();
    assert!(matches!(error, EnboxError::Transport(_)));
    assert!(!error.to_string().is_empty());
}

#[tokio::test]
async fn every_reply_is_exactly_one_outcome() {
    // A scripted mix of outcomes: each call yields Ok xor Err, never anything else.
    let transport = Arc::new(MockTransport::new());
    transport.push_reply(200, json!({"ok": true}));
    transport.push_reply(500, json!({"message": "boom"}));
    transport.push_failure("connection reset");

    let client = client_with(transport);

    assert!(client.get_profile().await.is_ok());
    assert!(client.get_profile().await.is_err());
    assert!(client.get_profile().await.is_err());
}

/// Live smoke test against the real User endpoint.
///
/// Ignored by default; run with `cargo test -p user-client -- --ignored`
/// after setting `ENBOX_USER_API_KEY`.
#[tokio::test]
#[ignore = "requires a valid ENBOX_USER_API_KEY and network access"]
async fn live_get_profile() -> Result<(), EnboxError> {
    let _ = dotenvy::dotenv();

    let client = UserClient::from_env()?;
    let reply = client.get_profile().await?;
    println!("get-profile reply: {}", reply);
    Ok(())
}
