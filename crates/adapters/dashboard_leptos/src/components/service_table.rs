//! Service table component for the visible page of the catalog.

use leptos::prelude::*;
use salonview_domain::row::{COLUMNS, ServiceRow};

/// A six-column table of service rows.
#[component]
pub fn ServiceTable(
    /// Rows of the current page, already formatted.
    #[prop(into)]
    rows: Signal<Vec<ServiceRow>>,
) -> impl IntoView {
    view! {
        <table>
            <thead>
                <tr>
                    {COLUMNS.iter().map(|column| view! { <th>{*column}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|row| view! { <CatalogRow row/> })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

/// A single row in the service table.
#[component]
fn CatalogRow(
    /// The formatted record to display.
    row: ServiceRow,
) -> impl IntoView {
    view! {
        <tr>
            <td>{row.id}</td>
            <td>{row.service_name}</td>
            <td>{row.service_time}</td>
            <td>{row.price}</td>
            <td>{row.discount}</td>
            <td>{row.area}</td>
        </tr>
    }
}
