//! Endpoint catalogue for the platform's REST API.
//!
//! Every call goes through the pipeline in [`super::http`], which attaches
//! the session token and intercepts authentication failures. Nothing here
//! is retried automatically; all failures are terminal for the call.

use showreel_session::SessionError;
use uuid::Uuid;

use super::http;
use super::types::{
    DeviceTokenRequest, LoginRequest, LoginResponse, MediaItem, NewMedia, UploadTicket,
    UserAccount,
};

/// `POST /auth/login` with email/password credentials.
///
/// Runs outside the 401 interception: a 401 on this call means bad
/// credentials, not an expired session.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, SessionError> {
    let body = LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    http::post_json_public("/auth/login", &body).await
}

/// `GET /auth/me` — the account behind the current token.
pub async fn fetch_current_user() -> Result<UserAccount, SessionError> {
    http::get_json("/auth/me").await
}

/// `GET /media` — the content library.
pub async fn fetch_media() -> Result<Vec<MediaItem>, SessionError> {
    http::get_json("/media").await
}

/// `GET /media/{id}`.
pub async fn fetch_media_item(id: Uuid) -> Result<MediaItem, SessionError> {
    http::get_json(&format!("/media/{id}")).await
}

/// `DELETE /media/{id}`.
pub async fn delete_media_item(id: Uuid) -> Result<(), SessionError> {
    http::delete(&format!("/media/{id}")).await
}

/// `POST /media` — create a record and obtain an upload ticket for the
/// object-storage service.
pub async fn create_media(meta: &NewMedia) -> Result<UploadTicket, SessionError> {
    http::post_json("/media", meta).await
}

/// `POST /push/device-token` — relay a push-messaging device token to
/// the API. Delivery itself is the messaging service's concern.
pub async fn register_device_token(token: &str, platform: &str) -> Result<(), SessionError> {
    let body = DeviceTokenRequest {
        token: token.to_owned(),
        platform: platform.to_owned(),
    };
    http::post_json_unit("/push/device-token", &body).await
}
