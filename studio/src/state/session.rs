//! Session context for the studio UI.
//!
//! Wires the shared session manager to Leptos: a `RwSignal<SessionState>`
//! is provided via context by `app.rs`, and the operations here keep the
//! persisted copy (token store) and the signal in step within the same
//! call. The studio is the admin client, so logins are gated on
//! administrative privilege.
//!
//! `login` and `logout` are not reentrant-safe; the login form disables
//! its submit control while a call is outstanding.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use showreel_session::{AccessPolicy, Session, SessionError};

/// Accounts the studio accepts.
pub const STUDIO_POLICY: AccessPolicy = AccessPolicy::AdminOnly;

/// UI-facing session state, provided via context.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
    pub last_error: Option<SessionError>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Presence of a persisted token; the route guard's input. Reads storage,
/// not the in-memory state, so it answers correctly before hydration.
pub fn persisted_token_present() -> bool {
    #[cfg(feature = "hydrate")]
    {
        use showreel_session::TokenStore;
        use showreel_session::store::BrowserStorage;
        TokenStore::new(BrowserStorage).token_present()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Rebuild the in-memory session from persisted storage, once at mount.
///
/// Malformed stored data reads as absent (the store clears it) and the
/// app proceeds unauthenticated. When a session is restored the profile
/// is refreshed via `/auth/me`; a rejected token on that call is handled
/// by the HTTP layer (store cleared, redirect to login).
pub fn hydrate_session(state: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        use showreel_session::SessionManager;
        use showreel_session::store::BrowserStorage;

        let mut mgr = SessionManager::new(BrowserStorage, STUDIO_POLICY);
        mgr.hydrate();
        let restored = mgr.current().cloned();
        let authenticated = restored.is_some();
        state.update(|s| {
            s.session = restored;
            s.loading = false;
        });

        if authenticated {
            leptos::task::spawn_local(async move {
                if let Ok(user) = crate::net::api::fetch_current_user().await {
                    // Through the manager, so the persisted record picks up
                    // the refreshed fields in the same operation.
                    let mut mgr = SessionManager::new(BrowserStorage, STUDIO_POLICY);
                    mgr.hydrate();
                    match mgr.refresh_profile(user.display_name, user.email, user.is_admin) {
                        Ok(()) => {
                            let refreshed = mgr.current().cloned();
                            state.update(|s| s.session = refreshed);
                        }
                        Err(_) => state.update(|s| s.session = None),
                    }
                }
            });
            crate::util::push::relay_device_token();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        state.update(|s| s.loading = false);
    }
}

/// Authenticate against the API and establish the session.
///
/// Non-admin accounts are rejected with an access-denied error and
/// nothing is stored. Returns `true` when a session was established, so
/// the caller can navigate to the main view.
pub async fn login(state: RwSignal<SessionState>, email: String, password: String) -> bool {
    state.update(|s| {
        s.loading = true;
        s.last_error = None;
    });

    #[cfg(feature = "hydrate")]
    {
        use showreel_session::SessionManager;
        use showreel_session::store::BrowserStorage;

        let established = match crate::net::api::login(&email, &password).await {
            Ok(resp) => {
                let mut mgr = SessionManager::new(BrowserStorage, STUDIO_POLICY);
                match mgr.establish(resp.into_session()) {
                    Ok(()) => {
                        let session = mgr.current().cloned();
                        state.update(|s| {
                            s.session = session;
                            s.loading = false;
                        });
                        crate::util::push::relay_device_token();
                        true
                    }
                    Err(err) => {
                        state.update(|s| {
                            s.loading = false;
                            s.last_error = Some(err);
                        });
                        false
                    }
                }
            }
            Err(err) => {
                state.update(|s| {
                    s.loading = false;
                    s.last_error = Some(err);
                });
                false
            }
        };
        established
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        state.update(|s| s.loading = false);
        false
    }
}

/// Clear the token store and the in-memory state. The caller navigates
/// to the login view afterwards.
pub fn logout(state: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        use showreel_session::SessionManager;
        use showreel_session::store::BrowserStorage;
        SessionManager::new(BrowserStorage, STUDIO_POLICY).clear();
    }
    state.update(|s| {
        s.session = None;
        s.last_error = None;
    });
}
