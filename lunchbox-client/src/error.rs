//! Client error types

use serde::Deserialize;
use thiserror::Error;

/// Message shown when the server gave nothing usable
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required (401)
    #[error("Unauthorized: {}", .0.as_deref().unwrap_or("authentication required"))]
    Unauthorized(Option<String>),

    /// Permission denied (403)
    #[error("Permission denied: {}", .0.as_deref().unwrap_or("forbidden"))]
    Forbidden(Option<String>),

    /// Resource not found (404)
    #[error("Not found: {}", .0.as_deref().unwrap_or("resource not found"))]
    NotFound(Option<String>),

    /// Request rejected by server-side validation (400 / 422)
    #[error("Validation error: {}", .0.as_deref().unwrap_or("invalid request"))]
    Validation(Option<String>),

    /// Any other non-success status
    #[error("API error {status}: {}", message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// Body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a failed status and its body text to an error
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_error_message(body);
        match status {
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            400 | 422 => Self::Validation(message),
            _ => Self::Api { status, message },
        }
    }

    /// Server-provided message, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Validation(m)
            | Self::Api { message: m, .. } => m.as_deref(),
            _ => None,
        }
    }

    /// Text suitable for a dismissible banner
    pub fn user_message(&self) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
    }

    /// Whether the caller should send the user back to sign-in
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Conventional error body: `{"message": "..."}` or `{"message": ["...", "..."]}`
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<MessageField>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MessageField {
    One(String),
    Many(Vec<String>),
}

/// Pull the human-readable message out of an error body
pub fn extract_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match parsed.message {
        Some(MessageField::One(s)) => Some(s),
        Some(MessageField::Many(list)) => Some(
            list.into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
        ),
        None => parsed.error,
    };
    message
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_string_message() {
        assert_eq!(
            extract_error_message(r#"{"statusCode":400,"message":"Insufficient wallet balance"}"#),
            Some("Insufficient wallet balance".to_string())
        );
    }

    #[test]
    fn test_extract_array_message() {
        assert_eq!(
            extract_error_message(r#"{"message":["amount must be positive"," ","name is required"]}"#),
            Some("amount must be positive; name is required".to_string())
        );
    }

    #[test]
    fn test_extract_falls_back_to_error_field() {
        assert_eq!(
            extract_error_message(r#"{"error":"Bad Gateway"}"#),
            Some("Bad Gateway".to_string())
        );
    }

    #[test]
    fn test_extract_non_json() {
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(r#"{"message":"  "}"#), None);
    }

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(ClientError::from_status(401, ""), ClientError::Unauthorized(None)));
        assert!(matches!(
            ClientError::from_status(422, r#"{"message":"bad"}"#),
            ClientError::Validation(Some(ref m)) if m == "bad"
        ));
        assert!(matches!(
            ClientError::from_status(503, ""),
            ClientError::Api { status: 503, message: None }
        ));
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ClientError::from_status(500, "Internal Server Error");
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);

        let err = ClientError::from_status(403, r#"{"message":"Managers only"}"#);
        assert_eq!(err.user_message(), "Managers only");

        let err = ClientError::InvalidResponse("missing field".into());
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }
}
