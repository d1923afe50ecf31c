//! Route guard wrapping protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Declared as the view of a `ParentRoute`; protected pages are its children
//! and render through `<Outlet/>` only while a user is signed in.
//!
//! DESIGN
//! ======
//! The decision is `auth::GuardState` derived in a `Memo`, so the guard
//! re-renders only when the outcome changes, not on every auth state write
//! (an error set on a signed-in user leaves the outlet mounted).

use auth::GuardState;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{Outlet, Redirect};

use crate::components::loading_spinner::LoadingSpinner;
use crate::state::auth::AuthContext;

#[component]
pub fn RequireAuth() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let guard = Memo::new(move |_| GuardState::from_auth(&auth.state.get()));

    move || {
        let state = guard.get();
        match (state, state.redirect()) {
            (_, Some(route)) => {
                log::debug!("guard redirecting to {}", route.path());
                view! {
                    <Redirect
                        path=route.path()
                        options=NavigateOptions { replace: true, ..NavigateOptions::default() }
                    />
                }
                .into_any()
            }
            (GuardState::Loading, None) => view! { <LoadingSpinner/> }.into_any(),
            (_, None) => view! { <Outlet/> }.into_any(),
        }
    }
}
