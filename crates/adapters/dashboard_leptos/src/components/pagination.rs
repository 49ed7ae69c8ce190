//! Pagination bar: First, Prev, one button per page, Next, Last.

use leptos::prelude::*;
use salonview_domain::pagination::{PageControl, PaginationControls};

/// Pagination controls with boundary buttons disabled at the edges.
#[component]
pub fn Pagination(
    #[prop(into)] controls: Signal<PaginationControls>,
    /// Called with the selected page.
    #[prop(into)]
    on_page: Callback<usize>,
) -> impl IntoView {
    move || {
        let controls = controls.get();
        view! {
            <div class="pagination">
                <BoundaryButton label="First" control=controls.first on_page/>
                <BoundaryButton label="Prev" control=controls.prev on_page/>
                {controls
                    .pages
                    .iter()
                    .map(|number| {
                        let page = number.page;
                        let class = if number.current { "page current" } else { "page" };
                        view! {
                            <button class=class on:click=move |_| on_page.run(page)>
                                {page}
                            </button>
                        }
                    })
                    .collect_view()}
                <BoundaryButton label="Next" control=controls.next on_page/>
                <BoundaryButton label="Last" control=controls.last on_page/>
            </div>
        }
    }
}

#[component]
fn BoundaryButton(
    label: &'static str,
    control: PageControl,
    on_page: Callback<usize>,
) -> impl IntoView {
    view! {
        <button disabled=control.disabled on:click=move |_| on_page.run(control.target)>
            {label}
        </button>
    }
}
