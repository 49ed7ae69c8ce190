//! HTTP catalog source configuration.

use serde::Deserialize;

/// Address of the catalog published by the salon backend.
pub const DEFAULT_ENDPOINT: &str = "http://20.193.149.47:2242/salons/service";

/// Configuration for [`HttpCatalogSource`](crate::HttpCatalogSource).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogHttpConfig {
    /// Full URL of the catalog endpoint (answers `GET` with a JSON array).
    pub endpoint: String,
}

impl Default for CatalogHttpConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
