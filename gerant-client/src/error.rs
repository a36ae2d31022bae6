//! Client error types
//!
//! Every resource client reports failures through [`ClientError`]. Transport
//! and HTTP status failures are classified in one place ([`classify_status`],
//! [`classify_transport`]) so every resource behaves the same way.

use http::StatusCode;
use shared::ValidationError;
use thiserror::Error;

/// Message used when a rejection carries no readable body
pub const FALLBACK_MESSAGE: &str = "Server error";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response reached the client
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend answered with another 4xx/5xx status
    #[error("Rejected by server ({status}): {message}")]
    RemoteRejected { status: u16, message: String },

    /// Client-side check failed; nothing was sent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Successful response whose body has none of the accepted shapes
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Controller was closed while the operation was pending
    #[error("Operation cancelled: controller closed")]
    Cancelled,

    /// Client could not be built from its configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// The record is already gone on the backend
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Failure raised before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// HTTP status reported by the backend, if a response arrived
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND.as_u16()),
            Self::RemoteRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Classify a non-success HTTP response.
///
/// 404 becomes [`ClientError::NotFound`]; every other status becomes
/// [`ClientError::RemoteRejected`] with the backend's message.
pub fn classify_status(status: StatusCode, body: &str) -> ClientError {
    let message = rejection_message(body);
    if status == StatusCode::NOT_FOUND {
        ClientError::NotFound(message)
    } else {
        ClientError::RemoteRejected {
            status: status.as_u16(),
            message,
        }
    }
}

/// Classify a failure where no usable response arrived
pub fn classify_transport(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Network(format!("request timed out: {err}"))
    } else if err.is_connect() {
        ClientError::Network(format!("server unreachable: {err}"))
    } else {
        ClientError::Network(err.to_string())
    }
}

/// Extract the backend's rejection reason.
///
/// Order: `{"message": "..."}` envelope, bare JSON string, raw body text,
/// then [`FALLBACK_MESSAGE`].
pub fn rejection_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return FALLBACK_MESSAGE.to_string();
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => match map.get("message") {
            Some(serde_json::Value::String(message)) if !message.is_empty() => message.clone(),
            _ => trimmed.to_string(),
        },
        Ok(serde_json::Value::String(message)) if !message.is_empty() => message,
        _ => trimmed.to_string(),
    }
}
