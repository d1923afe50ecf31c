//! Toast notification queue.
//!
//! DESIGN
//! ======
//! `ToastState` is a plain value kept in an `RwSignal` and rendered by the
//! `Toaster` component. The queue is capped at [`MAX_VISIBLE`]; pushing onto
//! a full queue evicts the oldest toast. In the browser each toast dismisses
//! itself after [`TOAST_TTL`].

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use auth::{Notice, NoticeLevel, Notifier};
use leptos::prelude::*;

pub const MAX_VISIBLE: usize = 3;
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

impl Toast {
    /// CSS modifier class for the toast's level.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "toast toast--success",
            NoticeLevel::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, level: notice.level, message: notice.message });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// [`Notifier`] that turns auth notices into toasts.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    #[must_use]
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let Some(id) = self.toasts.try_update(|t| t.push(notice)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(TOAST_TTL).await;
                let _ = toasts.try_update(|t| t.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
