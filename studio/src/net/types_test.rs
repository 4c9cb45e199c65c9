use super::*;

fn login_response() -> LoginResponse {
    LoginResponse {
        access_token: "tok-abc".to_owned(),
        user: UserAccount {
            id: Uuid::nil(),
            display_name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            is_admin: true,
        },
    }
}

// =============================================================
// LoginResponse -> Session mapping
// =============================================================

#[test]
fn into_session_carries_every_field() {
    let session = login_response().into_session();
    assert_eq!(session.user_id, Uuid::nil().to_string());
    assert_eq!(session.display_name, "Ada");
    assert_eq!(session.email, "ada@example.com");
    assert!(session.is_admin);
    assert_eq!(session.access_token, "tok-abc");
}

// =============================================================
// wire shapes
// =============================================================

#[test]
fn login_response_parses_the_api_shape() {
    let json = r#"{
        "access_token": "tok-1",
        "user": {
            "id": "00000000-0000-0000-0000-000000000000",
            "display_name": "Grace",
            "email": "grace@example.com",
            "is_admin": false
        }
    }"#;
    let resp: LoginResponse = serde_json::from_str(json).expect("deserialize");
    assert_eq!(resp.access_token, "tok-1");
    assert!(!resp.user.is_admin);
}

#[test]
fn media_status_uses_lowercase_names() {
    assert_eq!(
        serde_json::to_string(&MediaStatus::Processing).expect("serialize"),
        "\"processing\""
    );
    let status: MediaStatus = serde_json::from_str("\"ready\"").expect("deserialize");
    assert_eq!(status, MediaStatus::Ready);
}

#[test]
fn media_item_tolerates_absent_optional_fields() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-000000000000",
        "title": "Launch teaser",
        "description": null,
        "status": "uploading",
        "duration_seconds": null,
        "download_url": null
    }"#;
    let item: MediaItem = serde_json::from_str(json).expect("deserialize");
    assert_eq!(item.title, "Launch teaser");
    assert_eq!(item.status, MediaStatus::Uploading);
    assert_eq!(item.download_url, None);
}
