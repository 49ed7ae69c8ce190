//! Loading spinner component.

use leptos::prelude::*;

/// Full-height spinner shown while the catalog is being fetched.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <span class="spinner"></span>
        </div>
    }
}
