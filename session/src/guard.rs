//! Navigation-time gate for protected views.
//!
//! The decision is a coarse presence check over persisted storage, not an
//! authorization check: no signature or expiry validation happens here.
//! The API is the actual authority and rejects invalid tokens at request
//! time.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Path of the login view, the only unprotected route.
pub const LOGIN_PATH: &str = "/login";

/// What the router should do before rendering a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardAction {
    Allow,
    /// Unauthenticated access to a protected path.
    ToLogin,
    /// Authenticated access to the login path.
    ToMain,
}

/// Decide navigation for `path` given whether a token is present in
/// persisted storage.
pub fn decide(path: &str, token_present: bool) -> GuardAction {
    let at_login = path == LOGIN_PATH || path.starts_with("/login/");
    match (at_login, token_present) {
        (true, true) => GuardAction::ToMain,
        (false, false) => GuardAction::ToLogin,
        (true, false) | (false, true) => GuardAction::Allow,
    }
}
