//! Dashboard page: the protected landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only inside `RequireAuth`, so a user is present whenever this
//! view is built. Signing out flips the guard, which redirects to sign-in.

use leptos::prelude::*;

use crate::state::auth::AuthContext;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let busy = RwSignal::new(false);

    let user = move || auth.state.get().user;
    let display_name = move || user().map(|u| u.display_name().to_owned()).unwrap_or_default();
    let email = move || user().and_then(|u| u.email).unwrap_or_else(|| "no email on file".to_owned());
    let member_since = move || user().and_then(|u| u.created_at);
    let error = move || auth.state.get().error.map(|e| e.message);

    let on_sign_out = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let _ = auth.sign_out().await;
            busy.set(false);
        });
    };

    view! {
        <main class="page dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Welcome, " {display_name}</h1>
                <button class="btn dashboard-page__sign-out" on:click=on_sign_out disabled=move || busy.get()>
                    "Sign out"
                </button>
            </header>
            <section class="dashboard-page__card">
                <dl>
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                    <Show when=move || member_since().is_some()>
                        <dt>"Member since"</dt>
                        <dd>{move || member_since().unwrap_or_default()}</dd>
                    </Show>
                </dl>
            </section>
            <Show when=move || error().is_some()>
                <p class="dashboard-page__error">{move || error().unwrap_or_default()}</p>
            </Show>
        </main>
    }
}
