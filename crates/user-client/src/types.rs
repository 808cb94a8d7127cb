//! Value types for mailbox operations.

use serde::Serialize;

/// Delivery priority for an outgoing email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Normal priority (the default).
    #[default]
    Normal,
    /// High priority.
    High,
}

/// An outgoing email, shaped the way the `send-email` action expects.
///
/// Optional recipient lists default to empty lists (never null) and the
/// bodies default to empty strings, so a minimal email serializes to a
/// complete wire payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingEmail {
    /// Primary recipients (Enbox ids).
    pub to: Vec<String>,
    /// CC recipients.
    pub cc: Vec<String>,
    /// BCC recipients.
    pub bcc: Vec<String>,
    /// Email subject.
    pub subject: String,
    /// Plain text body.
    pub body_text: String,
    /// HTML body.
    pub body_html: String,
    /// Delivery priority.
    pub priority: Priority,
}

impl OutgoingEmail {
    /// Create a new email with a single recipient.
    pub fn new(to: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            to: vec![to.into()],
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: subject.into(),
            body_text: String::new(),
            body_html: String::new(),
            priority: Priority::Normal,
        }
    }

    /// Create a new email with multiple recipients.
    pub fn new_multi(
        to: impl IntoIterator<Item = impl Into<String>>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into_iter().map(Into::into).collect(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: subject.into(),
            body_text: String::new(),
            body_html: String::new(),
            priority: Priority::Normal,
        }
    }

    /// Add a recipient to the To field.
    pub fn add_to(&mut self, recipient: impl Into<String>) -> &mut Self {
        self.to.push(recipient.into());
        self
    }

    /// Add a CC recipient.
    pub fn add_cc(&mut self, recipient: impl Into<String>) -> &mut Self {
        self.cc.push(recipient.into());
        self
    }

    /// Add a BCC recipient.
    pub fn add_bcc(&mut self, recipient: impl Into<String>) -> &mut Self {
        self.bcc.push(recipient.into());
        self
    }

    /// Set the plain text body.
    pub fn with_text(&mut self, body: impl Into<String>) -> &mut Self {
        self.body_text = body.into();
        self
    }

    /// Set the HTML body.
    pub fn with_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.body_html = html.into();
        self
    }

    /// Set the delivery priority.
    pub fn with_priority(&mut self, priority: Priority) -> &mut Self {
        self.priority = priority;
        self
    }
}

/// Pagination query for listing emails.
///
/// Values pass straight through to the remote service; the client applies
/// no bounds checking of its own.
#[derive(Debug, Clone)]
pub struct EmailQuery {
    /// Folder to list (`inbox`, `sent`, `drafts`, `trash`).
    pub folder: String,
    /// Maximum number of emails to return.
    pub limit: u32,
    /// Offset into the folder.
    pub offset: u32,
}

impl Default for EmailQuery {
    fn default() -> Self {
        Self {
            folder: "inbox".to_string(),
            limit: 50,
            offset: 0,
        }
    }
}

impl EmailQuery {
    /// Query the default page of the given folder.
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            folder: name.into(),
            ..Self::default()
        }
    }

    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page offset.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}
