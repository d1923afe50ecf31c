//! Networking and browser persistence for the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gotrue` speaks the provider's REST API and implements the `auth` crate's
//! `IdentityClient`; `session_storage` keeps the session across reloads.

pub mod gotrue;
pub mod session_storage;
