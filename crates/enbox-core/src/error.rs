//! Error types for Enbox API client operations.

use thiserror::Error;

/// Errors that can occur when invoking a remote Enbox action.
///
/// Every failure mode of an invocation funnels into one of these variants;
/// the invoker never panics and never lets a transport or decode failure
/// escape any other way. The `Display` string is the human-readable error
/// description callers surface to users.
#[derive(Debug, Error)]
pub enum EnboxError {
    /// Action name was empty. Detected locally, no request sent.
    #[error("Action name must not be empty")]
    EmptyAction,

    /// A parameter tried to use the reserved `action` envelope key.
    /// Detected locally, no request sent.
    #[error("Parameter name 'action' is reserved by the request envelope")]
    ReservedParameter,

    /// Missing required parameter. Detected locally, no request sent.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value. Detected locally, no request sent.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Transport-level failure (DNS, TCP, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote service answered with a non-success HTTP status.
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Local JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing required environment variable.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_are_non_empty() {
        let errors = [
            EnboxError::EmptyAction,
            EnboxError::ReservedParameter,
            EnboxError::MissingParameter("password".to_string()),
            EnboxError::InvalidParameter {
                name: "to".to_string(),
                reason: "recipient list is empty".to_string(),
            },
            EnboxError::Transport("connection refused".to_string()),
            EnboxError::Status {
                status: 401,
                body: "Unauthorized".to_string(),
            },
            EnboxError::Decode("expected value at line 1".to_string()),
            EnboxError::Config("bad endpoint".to_string()),
            EnboxError::MissingEnvVar("ENBOX_MSP_API_KEY".to_string()),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn status_error_includes_code_and_body() {
        let error = EnboxError::Status {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(error.to_string(), "API error (429): rate limited");
    }
}
