#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// The authenticated identity and token held for the current application
/// instance. At most one session exists per client; the persisted copy in
/// the token store and the in-memory copy are written together.
///
/// Expiry is deliberately absent: clients treat token presence as a
/// liveness hint only, and the API remains the authority (invalid tokens
/// are rejected at request time with a 401).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    pub is_admin: bool,
    pub access_token: String,
}

/// Which accounts a client accepts at login.
///
/// The studio dashboard requires administrative accounts; the viewer and
/// mobile clients accept any account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccessPolicy {
    #[default]
    AnyUser,
    AdminOnly,
}

impl AccessPolicy {
    /// Whether an account with the given privilege may establish a session.
    pub fn permits(self, is_admin: bool) -> bool {
        match self {
            Self::AnyUser => true,
            Self::AdminOnly => is_admin,
        }
    }
}
