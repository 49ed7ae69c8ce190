use leptos::prelude::*;
use leptos::task::spawn_local;
use salonview_app::services::catalog_loader::CatalogLoader;
use salonview_app::session;
use salonview_domain::pagination::PaginationControls;
use salonview_domain::row::ServiceRow;
use salonview_domain::state::{Action, ApplicationState, LoadStatus};
use salonview_domain::view::CatalogView;

pub mod api;
mod components;

use api::GlooCatalogSource;
use components::{Loading, Pagination, SearchBox, ServiceTable};

/// Apply `action` to the session state held in `state`.
fn dispatch(state: RwSignal<ApplicationState>, action: Action) {
    state.update(|current| session::reduce(current, action));
}

/// Root application component.
///
/// Starts the single catalog load on mount and switches on the load status.
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(ApplicationState::new());

    spawn_local(async move {
        let action = match CatalogLoader::new(GlooCatalogSource::default()).load().await {
            Ok(records) => Action::DataLoaded(records),
            Err(err) => Action::LoadFailed(err),
        };
        dispatch(state, action);
    });

    let status = Memo::new(move |_| state.with(|s| s.status().clone()));

    move || match status.get() {
        LoadStatus::Loading => view! { <Loading/> }.into_any(),
        LoadStatus::Error(message) => view! {
            <div class="error">{"Error: "} {message}</div>
        }
        .into_any(),
        LoadStatus::Ready => view! { <Catalog state/> }.into_any(),
    }
}

/// The loaded catalog: search box, table and pagination.
#[component]
fn Catalog(state: RwSignal<ApplicationState>) -> impl IntoView {
    let query = Memo::new(move |_| state.with(|s| s.search_query().to_string()));
    let rows = Memo::new(move |_| {
        state.with(|s| match s.view() {
            CatalogView::Ready(view) => view.rows(),
            CatalogView::Loading | CatalogView::Error(_) => Vec::<ServiceRow>::new(),
        })
    });
    let controls = Memo::new(move |_| {
        state.with(|s| match s.view() {
            CatalogView::Ready(view) => view.controls,
            CatalogView::Loading | CatalogView::Error(_) => PaginationControls::new(1, 0),
        })
    });

    view! {
        <main>
            <h1>"Salon Services"</h1>
            <SearchBox
                query
                on_search=move |value: String| dispatch(state, Action::SearchChanged(value))
            />
            <ServiceTable rows/>
            <Pagination
                controls
                on_page=move |page: usize| dispatch(state, Action::PageChanged(page))
            />
        </main>
    }
}
