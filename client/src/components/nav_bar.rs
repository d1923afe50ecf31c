//! Top navigation bar.
//!
//! Links depend on auth state: visitors see sign-in/sign-up, signed-in users
//! see the dashboard link and a sign-out button. Nothing auth-specific renders
//! until the first session check resolves.

use auth::{AppRoute, GuardState};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthContext;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let links = Memo::new(move |_| GuardState::from_auth(&auth.state.get()));
    let busy = RwSignal::new(false);

    let on_sign_out = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Failures are already stored and toasted by the action.
            let _ = auth.sign_out().await;
            busy.set(false);
        });
    };

    view! {
        <nav class="nav-bar">
            <A href=AppRoute::Home.path() attr:class="nav-bar__brand">
                "Gatehouse"
            </A>
            <span class="nav-bar__spacer"></span>
            {move || match links.get() {
                GuardState::Loading => ().into_any(),
                GuardState::Unauthenticated => {
                    view! {
                        <A href=AppRoute::SignIn.path() attr:class="nav-bar__link">
                            "Sign in"
                        </A>
                        <A href=AppRoute::SignUp.path() attr:class="nav-bar__link nav-bar__link--primary">
                            "Sign up"
                        </A>
                    }
                        .into_any()
                }
                GuardState::Authenticated => {
                    view! {
                        <A href=AppRoute::Dashboard.path() attr:class="nav-bar__link">
                            "Dashboard"
                        </A>
                        <button class="btn nav-bar__sign-out" on:click=on_sign_out disabled=move || busy.get()>
                            "Sign out"
                        </button>
                    }
                        .into_any()
                }
            }}
        </nav>
    }
}
