//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read auth and toast state from Leptos context providers
//! installed by `App`.

pub mod loading_spinner;
pub mod nav_bar;
pub mod require_auth;
pub mod toaster;
