//! Reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` mirrors the framework-independent `auth::AuthStore` into a signal
//! and exposes the auth actions; `toast` holds the notification queue the
//! auth actions write into.

pub mod auth;
pub mod toast;
