//! Search input filtering the catalog by service name or id.

use leptos::prelude::*;

/// Text input reporting every keystroke.
#[component]
pub fn SearchBox(
    /// Current query, mirrored into the input.
    #[prop(into)]
    query: Signal<String>,
    /// Called with the full input value on every change.
    #[prop(into)]
    on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search">
            <input
                type="text"
                placeholder="Search by ID or Service Name..."
                prop:value=move || query.get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
        </div>
    }
}
