//! Email + password sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public-only route: a visitor who is already signed in, or who signs in
//! here, is sent to the dashboard once the provider's `SignedIn` event lands
//! in the auth store.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use auth::{AppRoute, Credentials};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;
use crate::util::auth::install_signed_in_redirect;

/// Check the form before calling the provider.
pub(crate) fn validate_sign_in(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(Credentials::new(email, password))
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    install_signed_in_redirect(auth, use_navigate());
    auth.clear_error();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_sign_in(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if auth.sign_in(credentials).await.is_ok() {
                password.set(String::new());
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    let error = move || auth.state.get().error.map(|e| e.message);

    view! {
        <main class="page auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__field">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <Show when=move || error().is_some()>
                    <p class="auth-message auth-message--error">{move || error().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__switch">
                    "No account yet? "
                    <A href=AppRoute::SignUp.path()>"Sign up"</A>
                </p>
            </div>
        </main>
    }
}
