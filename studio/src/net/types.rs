#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use showreel_session::Session;
use uuid::Uuid;

/// An account as the API reports it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub is_admin: bool,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserAccount,
}

impl LoginResponse {
    /// Collapse the login response into the session record the token
    /// store persists.
    pub fn into_session(self) -> Session {
        Session {
            user_id: self.user.id.to_string(),
            display_name: self.user.display_name,
            email: self.user.email,
            is_admin: self.user.is_admin,
            access_token: self.access_token,
        }
    }
}

/// Processing state of an uploaded video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaStatus {
    Uploading,
    Processing,
    Ready,
    Failed,
}

/// A video in the content library.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MediaItem {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: MediaStatus,
    pub duration_seconds: Option<u32>,
    /// Retrievable address on the object-storage service, present once
    /// the upload finished.
    pub download_url: Option<String>,
}

/// Body of `POST /media`, announcing an upcoming upload.
#[derive(Clone, Debug, serde::Serialize)]
pub struct NewMedia {
    pub title: String,
    pub content_type: String,
    pub size: u64,
}

/// Response of `POST /media`: the created record plus the storage
/// service's upload session URL.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UploadTicket {
    pub media_id: Uuid,
    pub upload_url: String,
}

/// Final response of a completed resumable upload.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompletedUpload {
    pub download_url: String,
}

/// Body of `POST /push/device-token`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct DeviceTokenRequest {
    pub token: String,
    pub platform: String,
}

/// Error payload shape the API uses; both field names occur.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}
