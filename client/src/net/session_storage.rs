//! Session persistence in `localStorage`.
//!
//! Requires a browser environment; SSR and tests see an empty store and every
//! write is a no-op. A stored value that no longer parses is discarded.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use auth::Session;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "gatehouse.auth.session";

#[cfg(any(test, feature = "hydrate"))]
fn decode(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted session, if any.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        let session = decode(&raw);
        if session.is_none() {
            log::warn!("discarding unreadable persisted session");
            clear();
        }
        session
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `session`, replacing any previous one.
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else { return };
        match serde_json::to_string(session) {
            Ok(raw) => {
                if storage.set_item(STORAGE_KEY, &raw).is_err() {
                    log::warn!("failed to persist session");
                }
            }
            Err(e) => log::warn!("failed to encode session: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Forget the persisted session.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
