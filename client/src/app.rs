//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` is the single owner of the auth session: it builds the identity
//! client, store and provider, exposes them as [`AuthContext`], and in the
//! browser starts the lifecycle driver whose handle is stopped when the app
//! is torn down. The dashboard is nested under the `RequireAuth` guard.

use std::rc::Rc;

use auth::{AppRoute, AuthProvider, AuthStore};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, require_auth::RequireAuth, toaster::Toaster};
use crate::net::gotrue::GoTrueClient;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, not_found::NotFoundPage, sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::state::auth::AuthContext;
use crate::state::toast::{ToastNotifier, ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    let provider = Rc::new(AuthProvider::new(
        Rc::new(GoTrueClient::from_build_env()),
        AuthStore::new(),
        Rc::new(ToastNotifier::new(toasts)),
    ));
    provide_context(AuthContext::new(Rc::clone(&provider)));

    // The session lives in the browser; the server renders the loading state.
    #[cfg(feature = "hydrate")]
    {
        let (handle, driver) = provider.start();
        leptos::task::spawn_local(driver);
        on_cleanup(move || handle.stop());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/gatehouse.css"/>
        <Title text="Gatehouse"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                <Route path=StaticSegment(AppRoute::SignIn.segment()) view=SignInPage/>
                <Route path=StaticSegment(AppRoute::SignUp.segment()) view=SignUpPage/>
                <ParentRoute path=StaticSegment(AppRoute::Dashboard.segment()) view=RequireAuth>
                    <Route path=StaticSegment("") view=DashboardPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <Toaster/>
    }
}
