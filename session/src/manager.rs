//! The session manager owns the in-memory session and the token store.
//!
//! All mutations go through this type so the persisted copy and the
//! in-memory copy are updated within the same operation. The manager is
//! an explicitly constructed object handed to the UI layer by reference,
//! not ambient global state.
//!
//! Operations are not reentrant-safe by design: callers gate the UI
//! (disable the submit control) while a login call is outstanding.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use crate::error::SessionError;
use crate::store::{StorageBackend, TokenStore};
use crate::types::{AccessPolicy, Session};

pub struct SessionManager<S> {
    store: TokenStore<S>,
    policy: AccessPolicy,
    current: Option<Session>,
}

impl<S: StorageBackend> SessionManager<S> {
    pub fn new(backend: S, policy: AccessPolicy) -> Self {
        Self {
            store: TokenStore::new(backend),
            policy,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn store(&self) -> &TokenStore<S> {
        &self.store
    }

    /// Install a freshly authenticated session.
    ///
    /// The access policy is checked first: an account the policy rejects
    /// yields [`SessionError::AccessDenied`] and nothing is stored, in
    /// memory or persistently. On success the store and the in-memory
    /// copy are written in the same call.
    pub fn establish(&mut self, session: Session) -> Result<(), SessionError> {
        if !self.policy.permits(session.is_admin) {
            return Err(SessionError::AccessDenied);
        }
        self.store.save(&session);
        self.current = Some(session);
        Ok(())
    }

    /// Apply refreshed account fields to the current session.
    ///
    /// Used after re-validating the account against the API: the token is
    /// unchanged, only the profile fields move. The persisted record and
    /// the in-memory copy are rewritten in the same call. An account the
    /// policy no longer permits is cleared entirely and the call returns
    /// [`SessionError::AccessDenied`]. Without a current session this is
    /// a no-op.
    pub fn refresh_profile(
        &mut self,
        display_name: String,
        email: String,
        is_admin: bool,
    ) -> Result<(), SessionError> {
        let Some(current) = self.current.as_ref() else {
            return Ok(());
        };
        if !self.policy.permits(is_admin) {
            self.clear();
            return Err(SessionError::AccessDenied);
        }
        let updated = Session {
            display_name,
            email,
            is_admin,
            ..current.clone()
        };
        self.store.save(&updated);
        self.current = Some(updated);
        Ok(())
    }

    /// Logout semantics: clear the persisted copy, then the in-memory one.
    pub fn clear(&mut self) {
        self.store.clear();
        self.current = None;
    }

    /// Forced logout after the API rejected the token (401).
    pub fn handle_unauthorized(&mut self) {
        log::warn!("session rejected by the API, clearing stored token");
        self.clear();
    }

    /// Rebuild the in-memory session from persistent storage, typically
    /// once at application mount. Malformed stored data reads as absent
    /// (the store clears it) and the manager proceeds unauthenticated.
    pub fn hydrate(&mut self) -> Option<&Session> {
        self.current = self.store.load();
        self.current.as_ref()
    }
}
