//! HTTP adapter error types.

use salonview_domain::error::LoadError;

/// Errors specific to the HTTP catalog adapter.
#[derive(Debug, thiserror::Error)]
pub enum CatalogHttpError {
    /// The request could not be sent or the body could not be read.
    #[error("catalog request failed")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("catalog endpoint answered {0}")]
    Status(reqwest::StatusCode),

    /// The body was not a JSON array.
    #[error("failed to decode catalog body")]
    Decode(#[source] serde_json::Error),
}

impl CatalogHttpError {
    /// Convert into a [`LoadError`] for propagation across the port boundary.
    ///
    /// Every non-success status collapses into the same network message;
    /// transport and decode failures keep their underlying description.
    pub fn into_domain(self) -> LoadError {
        match self {
            Self::Transport(err) => LoadError::Network(err.to_string()),
            Self::Status(_) => LoadError::response_not_ok(),
            Self::Decode(err) => LoadError::Decode(err.to_string()),
        }
    }
}

impl From<CatalogHttpError> for LoadError {
    fn from(err: CatalogHttpError) -> Self {
        err.into_domain()
    }
}
