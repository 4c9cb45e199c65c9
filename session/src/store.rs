//! Persistence of the session record across reloads.
//!
//! STORAGE LAYOUT
//! ==============
//! One authoritative record, two persisted forms:
//! - `showreel_session` — the structured JSON record, read by client code.
//! - `showreel_token` — the bare access token, exported for consumers
//!   that cannot parse the record (the edge middleware reads it from a
//!   cookie of the same name in the browser backend).
//!
//! Every write goes through [`TokenStore`], which writes the record first
//! and then exports the bare token, so the two forms never drift.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::types::Session;

/// localStorage key for the structured session record.
pub const SESSION_KEY: &str = "showreel_session";
/// localStorage/cookie key for the bare access token.
pub const TOKEN_KEY: &str = "showreel_token";

/// Key/value persistence the token store writes through.
///
/// Implementations are process-wide singletons from the store's point of
/// view; last writer wins, which is acceptable for a human-paced session
/// flow.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory backend for tests and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: std::collections::HashMap<String, String>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Persists the session under well-known keys and answers presence checks.
#[derive(Clone, Debug, Default)]
pub struct TokenStore<S> {
    backend: S,
}

impl<S: StorageBackend> TokenStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Write the structured record, then export the bare token.
    pub fn save(&mut self, session: &Session) {
        if let Ok(json) = serde_json::to_string(session) {
            self.backend.set(SESSION_KEY, &json);
            self.backend.set(TOKEN_KEY, &session.access_token);
        }
    }

    /// Read the structured record.
    ///
    /// Absence is not an error. Malformed stored data is treated as
    /// absence and both persisted forms are cleared, so a second call
    /// returns `None` without touching the corrupt entry again.
    pub fn load(&mut self) -> Option<Session> {
        let raw = self.backend.get(SESSION_KEY)?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("discarding unreadable session record: {err}");
                self.clear();
                None
            }
        }
    }

    /// Remove both persisted forms.
    pub fn clear(&mut self) {
        self.backend.remove(SESSION_KEY);
        self.backend.remove(TOKEN_KEY);
    }

    /// The exported bare token, read by the HTTP wrapper before each
    /// outgoing request.
    pub fn access_token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Coarse presence check used by the route guard. No validity or
    /// expiry check; the API is the authority.
    pub fn token_present(&self) -> bool {
        self.access_token().is_some()
    }
}

#[cfg(feature = "browser")]
pub use browser::BrowserStorage;

#[cfg(feature = "browser")]
mod browser {
    use wasm_bindgen::JsCast;

    use super::{StorageBackend, TOKEN_KEY};

    /// localStorage-backed storage. Writes to the bare-token key are
    /// mirrored into a same-named cookie so server-side request
    /// inspection can read the token without parsing the record.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserStorage;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    fn write_cookie(value: &str) {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Ok(html) = doc.dyn_into::<web_sys::HtmlDocument>() {
                let _ = html.set_cookie(value);
            }
        }
    }

    impl StorageBackend for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            local_storage().and_then(|s| s.get_item(key).ok().flatten())
        }

        fn set(&mut self, key: &str, value: &str) {
            if let Some(s) = local_storage() {
                let _ = s.set_item(key, value);
            }
            if key == TOKEN_KEY {
                write_cookie(&format!("{TOKEN_KEY}={value}; path=/; samesite=lax"));
            }
        }

        fn remove(&mut self, key: &str) {
            if let Some(s) = local_storage() {
                let _ = s.remove_item(key);
            }
            if key == TOKEN_KEY {
                write_cookie(&format!("{TOKEN_KEY}=; path=/; max-age=0"));
            }
        }
    }
}
