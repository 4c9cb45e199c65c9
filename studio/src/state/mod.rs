//! Shared client-side state.
//!
//! A single domain lives here: the session. It is provided to components
//! as an `RwSignal<SessionState>` from `app.rs`.

pub mod session;
