//! Client error types

use http::StatusCode;
use shared::error::{ApiErrorBody, AppError};
use shared::authz::DenyReason;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response not covered by a more specific variant
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 401
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// 403
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// Form validation failed before sending
    #[error("Validation error: {0}")]
    Validation(AppError),

    /// Refused locally by the authorization predicate or a transition guard
    #[error("Not allowed: {0}")]
    Denied(AppError),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Token file could not be read or written
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The view that issued the request went away
    #[error("Request cancelled")]
    Cancelled,

    #[error("Not logged in")]
    NotLoggedIn,
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<AppError> for ClientError {
    fn from(err: AppError) -> Self {
        ClientError::Validation(err)
    }
}

impl From<DenyReason> for ClientError {
    fn from(reason: DenyReason) -> Self {
        ClientError::Denied(reason.into())
    }
}

impl ClientError {
    /// Build the error for a non-2xx response.
    ///
    /// The body's `message` (or `error`) field is used verbatim when present,
    /// else the raw text, else a generic line naming the status.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .ok()
            .and_then(|b| b.text().map(str::to_string))
            .or_else(|| {
                let raw = text.trim();
                // A JSON string body is unwrapped, anything else is kept as is
                (!raw.is_empty()).then(|| {
                    serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.to_string())
                })
            })
            .unwrap_or_else(|| fallback_message(status));

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Text for a transient notification
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. }
            | ClientError::Unauthorized(message)
            | ClientError::Forbidden(message)
            | ClientError::NotFound(message) => message.clone(),
            ClientError::Validation(err) | ClientError::Denied(err) => err.message.clone(),
            ClientError::Http(err) if err.is_timeout() => "The server took too long to respond".to_string(),
            ClientError::Http(_) => "Unable to reach the server".to_string(),
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                "Unexpected response from the server".to_string()
            }
            ClientError::Config(msg) => msg.clone(),
            ClientError::Storage(_) => "Could not access saved login".to_string(),
            ClientError::Cancelled => "Request cancelled".to_string(),
            ClientError::NotLoggedIn => "Please log in first".to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }
}

fn fallback_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("Request failed: {} {}", status.as_u16(), reason),
        None => format!("Request failed with status {}", status.as_u16()),
    }
}
