//! Directory client errors.

use thiserror::Error;

/// Errors that can occur when talking to the booking backend.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("backend rejected request: {status} - {body}")]
    Rejected { status: u16, body: String },

    /// Response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Endpoint URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl DirectoryError {
    /// Whether the backend answered and said no.
    ///
    /// Every other variant means no usable answer came back at all.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
