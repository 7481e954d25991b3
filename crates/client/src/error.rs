// ABOUTME: Error types for export fetching.
// ABOUTME: FetchError enum with InvalidUrl, Http, Status, and TooLarge variants.

use thiserror::Error;

/// Errors that can occur while fetching a document export.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The export URL is empty, unparseable, or not http(s).
    #[error("invalid export url: {0}")]
    InvalidUrl(String),

    /// The request itself failed (connect, TLS, body read).
    #[error("fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The export body exceeds the configured size cap.
    #[error("export body too large ({0} bytes)")]
    TooLarge(usize),
}

impl FetchError {
    /// Creates an InvalidUrl error with a custom message.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        FetchError::InvalidUrl(msg.into())
    }

    /// Returns true if the failure was a non-success status code.
    pub fn is_status(&self) -> bool {
        matches!(self, FetchError::Status(_))
    }
}
