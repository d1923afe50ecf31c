//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing side effects out of page bodies so pages
//! stay declarative.

pub mod auth;
