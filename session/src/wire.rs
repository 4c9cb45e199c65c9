//! Wire conventions shared by every client's HTTP layer.
//!
//! The API predates these clients and expects the token in a custom
//! `token` header (not standard bearer auth), with the literal value
//! `Bearer <token>`.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

/// Custom header name the API reads the token from.
pub const AUTH_HEADER: &str = "token";

/// Header value for an authenticated request.
pub fn auth_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// The `token` header for a request, or `None` when no session token is
/// present (the header is omitted entirely, never sent empty).
pub fn auth_header(token: Option<&str>) -> Option<(&'static str, String)> {
    token.map(|t| (AUTH_HEADER, auth_header_value(t)))
}

/// Coarse response classification driving the 401 interception.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseClass {
    Ok,
    /// Authentication failure: forced logout and redirect to login.
    Unauthorized,
    /// Every other error, passed through to the caller.
    Failed,
}

pub fn classify_status(status: u16) -> ResponseClass {
    match status {
        200..=299 => ResponseClass::Ok,
        401 => ResponseClass::Unauthorized,
        _ => ResponseClass::Failed,
    }
}
