//! Catalog source port — where the service catalog comes from.

use std::future::Future;
use std::sync::Arc;

use salonview_domain::error::LoadError;
use salonview_domain::service_record::ServiceRecord;

/// Fetches the whole service catalog in a single request.
///
/// The returned future is not required to be `Send`: the load runs on the
/// rendering thread, which in the browser is the only thread there is.
pub trait CatalogSource {
    /// Fetch and decode the catalog.
    ///
    /// Transport failures and non-success responses map to
    /// [`LoadError::Network`]; unparseable bodies map to [`LoadError::Decode`].
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<ServiceRecord>, LoadError>>;
}

impl<T: CatalogSource> CatalogSource for Arc<T> {
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<ServiceRecord>, LoadError>> {
        (**self).fetch_catalog()
    }
}

impl<T: CatalogSource> CatalogSource for &T {
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<ServiceRecord>, LoadError>> {
        (**self).fetch_catalog()
    }
}
