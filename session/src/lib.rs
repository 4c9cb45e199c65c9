//! # showreel-session
//!
//! Shared session management for the Showreel clients (studio dashboard,
//! viewer web client, mobile shell). Each client renders its own UI but
//! holds sessions the same way: one authoritative `Session` record, a
//! token store that persists it across reloads, a route-guard presence
//! check, and a common wire contract for authenticated requests.
//!
//! DESIGN
//! ======
//! The core is platform-agnostic: storage is abstracted behind
//! [`store::StorageBackend`] so session logic runs (and is tested) on
//! native targets with an in-memory backend. The `browser` feature adds
//! a localStorage-backed implementation with a cookie export of the bare
//! token for server-side middleware.

pub mod error;
pub mod guard;
pub mod manager;
pub mod store;
pub mod types;
pub mod wire;

pub use error::SessionError;
pub use manager::SessionManager;
pub use store::TokenStore;
pub use types::{AccessPolicy, Session};
