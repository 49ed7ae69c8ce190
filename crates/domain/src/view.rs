//! View — what a renderer switches over.
//!
//! Loading shows a progress indicator, Error shows the message, Ready shows
//! the search box, the table and the pagination controls.

use crate::pagination::PaginationControls;
use crate::projection::Projection;
use crate::row::ServiceRow;

/// Render model derived from an [`ApplicationState`](crate::state::ApplicationState).
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView<'a> {
    Loading,
    Error(&'a str),
    Ready(ReadyView<'a>),
}

/// Everything needed to draw the loaded catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadyView<'a> {
    pub search_query: &'a str,
    pub current_page: usize,
    pub projection: Projection<'a>,
    pub controls: PaginationControls,
}

impl<'a> ReadyView<'a> {
    #[must_use]
    pub fn new(search_query: &'a str, current_page: usize, projection: Projection<'a>) -> Self {
        let controls = PaginationControls::new(current_page, projection.page_count);
        Self {
            search_query,
            current_page,
            projection,
            controls,
        }
    }

    /// Display cells for every visible record.
    #[must_use]
    pub fn rows(&self) -> Vec<ServiceRow> {
        self.projection
            .rows
            .iter()
            .map(|record| ServiceRow::from(*record))
            .collect()
    }
}
