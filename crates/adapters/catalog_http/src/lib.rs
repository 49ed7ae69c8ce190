//! # salonview-adapter-catalog-http
//!
//! HTTP adapter — implements the `CatalogSource` port with `reqwest`.
//!
//! ## Responsibilities
//! - Issue one `GET` to the configured catalog endpoint (no body, no custom headers)
//! - Treat any non-success status as a network failure
//! - Decode the body as a JSON array of service records
//!
//! ## Dependency rule
//! Same as other adapters: depends on `salonview-app` and `salonview-domain`.

pub mod config;
pub mod error;

use std::future::Future;

use salonview_app::ports::CatalogSource;
use salonview_domain::error::LoadError;
use salonview_domain::service_record::{self, ServiceRecord};

pub use config::CatalogHttpConfig;
pub use error::CatalogHttpError;

/// Catalog source reading from an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCatalogSource {
    /// Build a source for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogHttpError::Transport`] if the HTTP client cannot be
    /// initialised (e.g. the TLS backend fails to load).
    pub fn new(config: &CatalogHttpConfig) -> Result<Self, CatalogHttpError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(CatalogHttpError::Transport)?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    async fn fetch(&self) -> Result<Vec<ServiceRecord>, CatalogHttpError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(CatalogHttpError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, endpoint = %self.endpoint, "catalog endpoint rejected request");
            return Err(CatalogHttpError::Status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(CatalogHttpError::Transport)?;
        tracing::debug!(bytes = body.len(), "catalog body received");

        service_record::parse_catalog(&body).map_err(CatalogHttpError::Decode)
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<ServiceRecord>, LoadError>> {
        async move { self.fetch().await.map_err(CatalogHttpError::into_domain) }
    }
}
