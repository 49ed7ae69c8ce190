//! End-to-end smoke tests for the full salonview stack.
//!
//! Each test serves a catalog fixture from a local axum router, then runs the
//! real HTTP source, loader and session store against it.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use salonview_adapter_catalog_http::{CatalogHttpConfig, HttpCatalogSource};
use salonview_app::services::catalog_loader::CatalogLoader;
use salonview_app::session::SessionStore;
use salonview_domain::pagination::PageNav;
use salonview_domain::state::LoadStatus;
use salonview_domain::view::CatalogView;
use serde_json::json;

const PATH: &str = "/salons/service";

/// Serve `router` on an ephemeral local port and return the catalog URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener should have an address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("fixture server should run");
    });
    format!("http://{addr}{PATH}")
}

fn catalog_route(body: serde_json::Value) -> Router {
    Router::new().route(PATH, get(move || async move { axum::Json(body) }))
}

/// Load the session from `url` and return the store.
async fn loaded_store(url: String) -> SessionStore {
    let source = HttpCatalogSource::new(&CatalogHttpConfig { endpoint: url })
        .expect("client should build");
    let store = SessionStore::new();
    store.run_loader(CatalogLoader::new(source)).await;
    store
}

fn two_services() -> serde_json::Value {
    json!([
        {"id": 1, "service_name": "Haircut", "price": 200, "discount": 0, "area": "X"},
        {"id": 2, "service_name": "Facial", "price": 500, "discount": 10, "area": "Y"}
    ])
}

fn visible_ids(store: &SessionStore) -> Vec<String> {
    let state = store.snapshot();
    let CatalogView::Ready(view) = state.view() else {
        panic!("expected ready view, got {:?}", state.status());
    };
    view.rows().into_iter().map(|row| row.id).collect()
}

// ---------------------------------------------------------------------------
// Scenarios A–C: two-record catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_show_every_record_when_search_is_empty() {
    let store = loaded_store(serve(catalog_route(two_services())).await).await;

    assert_eq!(store.snapshot().status(), &LoadStatus::Ready);
    assert_eq!(visible_ids(&store), vec!["1", "2"]);
    assert_eq!(store.snapshot().projection().unwrap().total_pages, 1);
}

#[tokio::test]
async fn should_filter_by_name_case_insensitively() {
    let store = loaded_store(serve(catalog_route(two_services())).await).await;

    store.search("facial");

    assert_eq!(visible_ids(&store), vec!["2"]);
}

#[tokio::test]
async fn should_filter_by_id_substring() {
    let store = loaded_store(serve(catalog_route(two_services())).await).await;

    store.search("2");

    assert_eq!(visible_ids(&store), vec!["2"]);
}

// ---------------------------------------------------------------------------
// Scenario D: pagination over 250 records
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_show_remainder_on_last_page() {
    let records: Vec<serde_json::Value> = (1..=250)
        .map(|i| json!({"id": i, "service_name": format!("Service {i}")}))
        .collect();
    let store = loaded_store(serve(catalog_route(json!(records))).await).await;

    assert!(store.navigate(PageNav::Number(3)));

    let state = store.snapshot();
    let CatalogView::Ready(view) = state.view() else {
        panic!("expected ready view");
    };
    assert_eq!(view.rows().len(), 50);
    assert_eq!(view.projection.total_pages, 3);
    assert!(view.controls.next.disabled);
    assert!(view.controls.last.disabled);
}

#[tokio::test]
async fn should_return_to_first_page_when_search_changes() {
    let records: Vec<serde_json::Value> = (1..=250)
        .map(|i| json!({"id": i, "service_name": format!("Service {i}")}))
        .collect();
    let store = loaded_store(serve(catalog_route(json!(records))).await).await;
    store.navigate(PageNav::Last);

    store.search("Service 1");

    let state = store.snapshot();
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.projection().unwrap().rows.len(), 100);
}

// ---------------------------------------------------------------------------
// Scenario E and other failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_enter_error_state_when_endpoint_fails() {
    let router = Router::new().route(
        PATH,
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let store = loaded_store(serve(router).await).await;

    let state = store.snapshot();
    assert_eq!(
        state.status(),
        &LoadStatus::Error("Network response was not ok".to_string())
    );
    assert!(state.dataset().is_empty());
    assert!(state.projection().is_none());
    assert_eq!(state.view(), CatalogView::Error("Network response was not ok"));
}

#[tokio::test]
async fn should_enter_error_state_when_body_is_malformed() {
    let router = Router::new().route(PATH, get(|| async { "not json" }));
    let store = loaded_store(serve(router).await).await;

    assert!(matches!(
        store.snapshot().status(),
        LoadStatus::Error(message) if !message.is_empty()
    ));
}

#[tokio::test]
async fn should_show_scalar_fields_as_served() {
    let store = loaded_store(
        serve(catalog_route(json!([
            {"id": 10.0, "service_name": "Waxing", "price": "200", "discount": 5}
        ])))
        .await,
    )
    .await;

    assert_eq!(visible_ids(&store), vec!["10"]);
    store.search("10.0");
    assert!(visible_ids(&store).is_empty());

    store.search("10");
    let state = store.snapshot();
    let CatalogView::Ready(view) = state.view() else {
        panic!("expected ready view");
    };
    let rows = view.rows();
    assert_eq!(rows[0].price, "\u{20B9}200");
    assert_eq!(rows[0].discount, "5%");
}

#[tokio::test]
async fn should_render_blank_rows_for_malformed_records() {
    let store = loaded_store(
        serve(catalog_route(json!([
            {"id": 7},
            {"service_name": "Threading", "service_time": null},
            42
        ])))
        .await,
    )
    .await;

    let state = store.snapshot();
    let CatalogView::Ready(view) = state.view() else {
        panic!("expected ready view");
    };
    let rows = view.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].id, "7");
    assert_eq!(rows[0].service_name, "");
    assert_eq!(rows[1].service_time, "N/A");
    assert_eq!(rows[2].id, "");
}

#[tokio::test]
async fn should_show_empty_single_page_when_catalog_is_empty() {
    let store = loaded_store(serve(catalog_route(json!([]))).await).await;

    let state = store.snapshot();
    let CatalogView::Ready(view) = state.view() else {
        panic!("expected ready view");
    };
    assert!(view.rows().is_empty());
    assert_eq!(view.projection.total_pages, 1);
    assert!(view.controls.pages.is_empty());
    assert!(view.controls.first.disabled && view.controls.prev.disabled);
    assert!(view.controls.next.disabled && view.controls.last.disabled);
}
