//! Catalog source wrapping `gloo-net` for the browser build.

use std::future::Future;

use gloo_net::http::Request;
use salonview_app::ports::CatalogSource;
use salonview_domain::error::LoadError;
use salonview_domain::service_record::{self, ServiceRecord};

/// Catalog endpoint, overridable at build time with `SALONVIEW_ENDPOINT`.
pub const ENDPOINT: &str = match option_env!("SALONVIEW_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "http://20.193.149.47:2242/salons/service",
};

/// Fetches the catalog with the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct GlooCatalogSource {
    endpoint: String,
}

impl GlooCatalogSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for GlooCatalogSource {
    fn default() -> Self {
        Self::new(ENDPOINT)
    }
}

fn network(err: gloo_net::Error) -> LoadError {
    LoadError::Network(err.to_string())
}

impl CatalogSource for GlooCatalogSource {
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<ServiceRecord>, LoadError>> {
        let request = Request::get(&self.endpoint);
        async move {
            let resp = request.send().await.map_err(network)?;
            if !resp.ok() {
                return Err(LoadError::response_not_ok());
            }
            let body = resp.binary().await.map_err(network)?;
            Ok(service_record::parse_catalog(&body)?)
        }
    }
}
