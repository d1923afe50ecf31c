//! User-visible notifications raised by auth actions.
//!
//! The UI decides how notices are shown (toasts in the Leptos client); the
//! actions only decide when.

/// Severity of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Sink for user-visible notices.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}
