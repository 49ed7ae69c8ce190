//! Load error types shared across the workspace.
//!
//! Adapters define their own typed errors (wrapping client/decoder sources)
//! and convert into [`LoadError`] at the port boundary. [`LoadError`] keeps
//! only a human-readable message so it can live inside the session state.

use std::fmt;

/// Message reported when the catalog endpoint answers with a non-success status.
pub const RESPONSE_NOT_OK: &str = "Network response was not ok";

/// Coarse classification of a failed load, kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unreachable host, transport failure, or non-success status.
    Network,
    /// The body could not be decoded as a JSON array.
    Decode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network"),
            Self::Decode => f.write_str("decode"),
        }
    }
}

/// Failure of the single catalog load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// Transport failure or non-success response.
    #[error("{0}")]
    Network(String),

    /// Malformed or non-array response body.
    #[error("{0}")]
    Decode(String),
}

impl LoadError {
    /// The error raised for any non-success HTTP status (4xx and 5xx alike).
    #[must_use]
    pub fn response_not_ok() -> Self {
        Self::Network(RESPONSE_NOT_OK.to_string())
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// The user-visible message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message) | Self::Decode(message) => message,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
