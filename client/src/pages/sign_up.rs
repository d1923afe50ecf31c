//! Account registration page.
//!
//! When the provider requires email confirmation, sign-up returns a user
//! without a session; the page then asks the visitor to check their inbox
//! instead of redirecting.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use auth::{AppRoute, Credentials};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;
use crate::util::auth::install_signed_in_redirect;

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

/// Check the form before calling the provider.
pub(crate) fn validate_sign_up(email: &str, password: &str, confirm: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter an email and a password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(Credentials::new(email, password))
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    install_signed_in_redirect(auth, use_navigate());
    auth.clear_error();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_sign_up(&email.get(), &password.get(), &confirm.get()) {
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
            if let Ok(Some(user)) = auth.sign_up(credentials).await {
                if !user.is_confirmed() {
                    info.set("Check your email to confirm your account, then sign in.".to_owned());
                }
                password.set(String::new());
                confirm.set(String::new());
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
                <h1>"Create an account"</h1>
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
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "Confirm password"
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <Show when=move || error().is_some()>
                    <p class="auth-message auth-message--error">{move || error().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already registered? "
                    <A href=AppRoute::SignIn.path()>"Sign in"</A>
                </p>
            </div>
        </main>
    }
}
