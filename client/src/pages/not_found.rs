//! Fallback for paths no route matches.
//!
//! Server-rendered responses for this page carry HTTP 404.

use auth::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <main class="page not-found-page">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href=AppRoute::Home.path() attr:class="btn">
                "Back to home"
            </A>
        </main>
    }
}
