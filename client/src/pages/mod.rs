//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, redirects) and
//! delegates the session itself to `state::auth`.

pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod sign_in;
pub mod sign_up;
