//! # API Error Taxonomy
//!
//! Every failure of a remote operation is normalized into [`ApiError`] and
//! forwarded to the caller unmodified. The layer never recovers locally.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the voting backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server could not be reached (connect failure).
    #[error("Cannot reach server: {0}")]
    Unreachable(String),

    /// Transport-level failure other than connect (timeout, protocol).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    ///
    /// `message` is the human-readable text extracted from the response
    /// body when the server supplied one, verbatim.
    #[error("Server rejected request with {}{}", .status, message_suffix(.message))]
    Rejected {
        /// The HTTP status the server answered with.
        status: StatusCode,
        /// Server-supplied message, if any.
        message: Option<String>,
    },

    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}

impl ApiError {
    /// The HTTP status for rejected requests, if this error carries one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a 401: the caller should be prompted to re-authenticate.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// True for a 403: the caller's role is insufficient.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(StatusCode::FORBIDDEN)
    }

    /// True for a 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// True for any 5xx server fault.
    #[must_use]
    pub fn is_server_fault(&self) -> bool {
        self.status().is_some_and(|s| s.is_server_error())
    }
}

/// Pull a human-readable message out of an error response body.
///
/// The backend uses both `message` and `error` fields depending on the
/// controller; anything else yields `None`.
#[must_use]
pub fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["message", "error"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            return Some(text.to_string());
        }
    }
    None
}
