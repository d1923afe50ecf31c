//! Toast stack rendered above every page.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = toast.class();
                    view! {
                        <div class=class role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
