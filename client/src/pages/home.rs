//! Public landing page.

use auth::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let signed_in = move || auth.state.get().is_authenticated();

    view! {
        <main class="page home-page">
            <h1>"Gatehouse"</h1>
            <p class="home-page__lead">"Sign in to reach your dashboard."</p>
            <div class="home-page__actions">
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <A href=AppRoute::SignIn.path() attr:class="btn">
                                "Sign in"
                            </A>
                            <A href=AppRoute::SignUp.path() attr:class="btn btn--primary">
                                "Create an account"
                            </A>
                        }
                    }
                >
                    <A href=AppRoute::Dashboard.path() attr:class="btn btn--primary">
                        "Go to dashboard"
                    </A>
                </Show>
            </div>
        </main>
    }
}
