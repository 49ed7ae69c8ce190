//! Session store — the observable cell holding the [`ApplicationState`].
//!
//! Backed by a tokio [`watch`] channel: every dispatched action replaces the
//! state and wakes subscribers, which re-render from the latest value.
//! Renderers that own their own reactive cell apply actions with [`reduce`].

use tokio::sync::watch;

use salonview_domain::pagination::PageNav;
use salonview_domain::state::{Action, ApplicationState};
use salonview_domain::view::CatalogView;

use crate::ports::CatalogSource;
use crate::services::catalog_loader::CatalogLoader;

/// Apply one action to `state` in place.
///
/// A load result arriving after the status has resolved is dropped and logged.
pub fn reduce(state: &mut ApplicationState, action: Action) {
    if matches!(action, Action::DataLoaded(_) | Action::LoadFailed(_))
        && !state.status().is_loading()
    {
        tracing::warn!("catalog load already resolved, ignoring result");
    }
    let current = std::mem::take(state);
    *state = current.apply(action);
}

/// Owner of the session's [`ApplicationState`].
pub struct SessionStore {
    sender: watch::Sender<ApplicationState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        let (sender, _) = watch::channel(ApplicationState::new());
        Self { sender }
    }
}

impl SessionStore {
    /// Create a store in the initial loading state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver sees the current state immediately and is notified of
    /// every later dispatch.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ApplicationState> {
        self.sender.subscribe()
    }

    /// Clone of the current state. The dataset is shared, not copied.
    #[must_use]
    pub fn snapshot(&self) -> ApplicationState {
        self.sender.borrow().clone()
    }

    /// Apply one action to the current state.
    pub fn dispatch(&self, action: Action) {
        self.sender.send_modify(|state| reduce(state, action));
    }

    /// Run the session's single load and record its outcome.
    pub async fn run_loader<S: CatalogSource>(&self, loader: CatalogLoader<S>) {
        let action = match loader.load().await {
            Ok(records) => Action::DataLoaded(records),
            Err(err) => Action::LoadFailed(err),
        };
        self.dispatch(action);
    }

    /// Replace the search query (resets to page 1).
    pub fn search(&self, query: impl Into<String>) {
        self.dispatch(Action::SearchChanged(query.into()));
    }

    /// Follow a pagination control.
    ///
    /// Returns `false` without changing anything when the control is disabled
    /// or the catalog is not ready.
    pub fn navigate(&self, nav: PageNav) -> bool {
        // The borrow must end before dispatching, which takes the write lock.
        let target = match self.sender.borrow().view() {
            CatalogView::Ready(view) => view.controls.target(nav),
            CatalogView::Loading | CatalogView::Error(_) => None,
        };
        match target {
            Some(page) => {
                self.dispatch(Action::PageChanged(page));
                true
            }
            None => false,
        }
    }
}
