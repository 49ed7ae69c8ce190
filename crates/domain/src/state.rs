//! Application state — one immutable value plus pure transitions.
//!
//! Every transition consumes the current state and returns the next one.
//! The dataset is shared behind an [`Arc`] so cloning a state is cheap.

use std::sync::Arc;

use crate::error::LoadError;
use crate::projection::{self, PAGE_SIZE, Projection};
use crate::service_record::ServiceRecord;
use crate::view::{CatalogView, ReadyView};

/// Lifecycle of the single catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    /// The load failed; carries the user-visible message.
    Error(String),
    Ready,
}

impl LoadStatus {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// The four inputs that may change an [`ApplicationState`].
#[derive(Debug, Clone)]
pub enum Action {
    DataLoaded(Vec<ServiceRecord>),
    LoadFailed(LoadError),
    SearchChanged(String),
    PageChanged(usize),
}

/// Session state for the catalog view.
#[derive(Debug, Clone)]
pub struct ApplicationState {
    dataset: Arc<[ServiceRecord]>,
    status: LoadStatus,
    search_query: String,
    current_page: usize,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self {
            dataset: Arc::from(Vec::new()),
            status: LoadStatus::Loading,
            search_query: String::new(),
            current_page: 1,
        }
    }
}

impl ApplicationState {
    /// Fresh state: loading, empty dataset, empty query, page 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn dataset(&self) -> &[ServiceRecord] {
        &self.dataset
    }

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Store the fetched dataset and become [`LoadStatus::Ready`].
    ///
    /// Ignored unless the state is still loading: the status changes once.
    #[must_use]
    pub fn on_data_loaded(self, records: Vec<ServiceRecord>) -> Self {
        if !self.status.is_loading() {
            return self;
        }
        Self {
            dataset: Arc::from(records),
            status: LoadStatus::Ready,
            ..self
        }
    }

    /// Record the load failure. The dataset stays empty.
    ///
    /// Ignored unless the state is still loading.
    #[must_use]
    pub fn on_load_failed(self, error: &LoadError) -> Self {
        if !self.status.is_loading() {
            return self;
        }
        Self {
            status: LoadStatus::Error(error.message().to_string()),
            ..self
        }
    }

    /// Replace the search query and go back to the first page.
    #[must_use]
    pub fn on_search_changed(self, query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            current_page: 1,
            ..self
        }
    }

    /// Select a page, clamped to the pages of the current filtered view.
    #[must_use]
    pub fn on_page_changed(self, page: usize) -> Self {
        let total_pages = projection::page_count(
            projection::filtered_count(&self.dataset, &self.search_query),
            PAGE_SIZE,
        )
        .max(1);
        Self {
            current_page: page.clamp(1, total_pages),
            ..self
        }
    }

    /// Dispatch an [`Action`] to the matching transition.
    #[must_use]
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::DataLoaded(records) => self.on_data_loaded(records),
            Action::LoadFailed(error) => self.on_load_failed(&error),
            Action::SearchChanged(query) => self.on_search_changed(query),
            Action::PageChanged(page) => self.on_page_changed(page),
        }
    }

    /// The visible rows for the current query and page.
    ///
    /// `None` until the dataset has loaded: nothing is projected while
    /// loading or after a failure.
    #[must_use]
    pub fn projection(&self) -> Option<Projection<'_>> {
        match self.status {
            LoadStatus::Ready => Some(projection::project(
                &self.dataset,
                &self.search_query,
                self.current_page,
                PAGE_SIZE,
            )),
            LoadStatus::Loading | LoadStatus::Error(_) => None,
        }
    }

    /// What a renderer should display.
    #[must_use]
    pub fn view(&self) -> CatalogView<'_> {
        match &self.status {
            LoadStatus::Loading => CatalogView::Loading,
            LoadStatus::Error(message) => CatalogView::Error(message),
            LoadStatus::Ready => {
                let projection = projection::project(
                    &self.dataset,
                    &self.search_query,
                    self.current_page,
                    PAGE_SIZE,
                );
                CatalogView::Ready(ReadyView::new(&self.search_query, self.current_page, projection))
            }
        }
    }
}
