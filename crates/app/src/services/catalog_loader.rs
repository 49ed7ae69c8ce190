//! Catalog loader — the single outbound fetch of a session.

use salonview_domain::error::LoadError;
use salonview_domain::service_record::ServiceRecord;

use crate::ports::CatalogSource;

/// Runs the one catalog load of a session.
///
/// [`load`](Self::load) consumes the loader, so a session cannot fetch twice.
/// There is no retry, timeout or cancellation: a request that never resolves
/// leaves the session loading.
pub struct CatalogLoader<S> {
    source: S,
}

impl<S: CatalogSource> CatalogLoader<S> {
    /// Create a loader reading from the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch the catalog.
    ///
    /// # Errors
    ///
    /// Returns the source's [`LoadError`] unchanged; the kind is logged.
    pub async fn load(self) -> Result<Vec<ServiceRecord>, LoadError> {
        tracing::debug!("fetching service catalog");
        match self.source.fetch_catalog().await {
            Ok(records) => {
                tracing::info!(count = records.len(), "service catalog loaded");
                Ok(records)
            }
            Err(err) => {
                tracing::warn!(kind = %err.kind(), error = %err, "service catalog load failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::future::Future;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use salonview_domain::error::LoadError;
    use salonview_domain::scalar::Scalar;
    use salonview_domain::service_record::ServiceRecord;

    use crate::ports::CatalogSource;

    /// In-memory source answering with a fixed outcome and counting calls.
    #[derive(Default)]
    pub struct FakeCatalog {
        pub outcome: Option<Result<Vec<ServiceRecord>, LoadError>>,
        pub calls: Arc<AtomicUsize>,
    }

    impl FakeCatalog {
        pub fn with_records(count: u64) -> Self {
            let records = (1..=count)
                .map(|i| ServiceRecord {
                    id: Some(Scalar::from(i)),
                    service_name: Some(format!("Service {i}")),
                    ..ServiceRecord::default()
                })
                .collect();
            Self {
                outcome: Some(Ok(records)),
                ..Self::default()
            }
        }

        pub fn failing(error: LoadError) -> Self {
            Self {
                outcome: Some(Err(error)),
                ..Self::default()
            }
        }
    }

    impl CatalogSource for FakeCatalog {
        fn fetch_catalog(
            &self,
        ) -> impl Future<Output = Result<Vec<ServiceRecord>, LoadError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let outcome = self.outcome.clone().unwrap_or_else(|| Ok(Vec::new()));
            async { outcome }
        }
    }
}
