use thiserror::Error;

/// Failure taxonomy for session and API operations.
///
/// Nothing here is retried automatically; every failure is terminal for
/// the triggering call and requires a new user action.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Network or transport failure. Shown to the user as a generic error.
    #[error("request failed: {0}")]
    Transport(String),

    /// The API rejected the session token (401). The HTTP layer clears the
    /// token store and forces navigation to the login view, so pages
    /// generally do not render this variant.
    #[error("session expired")]
    Unauthorized,

    /// The account exists but lacks the privilege this client requires.
    /// Surfaced as a specific message; no session is created or stored.
    #[error("this account does not have access to the studio")]
    AccessDenied,

    /// Any other API error, passed through to the caller unmodified.
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
}
