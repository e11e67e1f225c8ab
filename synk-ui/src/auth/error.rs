//! Authentication errors
//!
//! Remote failures are surfaced to the user verbatim; transport and decode
//! failures get a short prefix.

use thiserror::Error;

/// Shown when the auth service gives no usable message
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The auth service answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not what the auth service documents
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl AuthError {
    /// Text views display for this error
    pub fn message(&self) -> String {
        match self {
            AuthError::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Pick the text for a rejected request: body `message`, then status text,
/// then [`FALLBACK_MESSAGE`].
pub fn rejection_message(body_message: Option<String>, status_text: &str) -> String {
    body_message
        .filter(|m| !m.trim().is_empty())
        .or_else(|| (!status_text.is_empty()).then(|| status_text.to_string()))
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}
