//! Request failure type shared by every API helper.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Why an API call failed.
///
/// Callers do not branch on the variant; they surface
/// [`ApiError::user_message`] and move on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, pulling `message` out of a JSON error body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: extract_server_message(body) }
    }

    /// Message supplied by the server, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(m), .. } => Some(m.as_str()),
            _ => None,
        }
    }

    /// Text for the blocking alert: the server message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// Extract a non-empty `message` field from a JSON error body.
pub fn extract_server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}
