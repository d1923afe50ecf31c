//! Placeholder shown while the first session check is pending.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="loading__label">"Loading..."</span>
        </div>
    }
}
