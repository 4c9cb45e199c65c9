use super::*;

// =============================================================
// header construction
// =============================================================

#[test]
fn header_value_is_bearer_prefixed() {
    assert_eq!(auth_header_value("tok-abc"), "Bearer tok-abc");
}

#[test]
fn header_is_attached_when_a_token_is_present() {
    assert_eq!(
        auth_header(Some("tok-abc")),
        Some(("token", "Bearer tok-abc".to_owned()))
    );
}

#[test]
fn header_is_omitted_without_a_token() {
    assert_eq!(auth_header(None), None);
}

// =============================================================
// status classification
// =============================================================

#[test]
fn success_statuses_classify_ok() {
    assert_eq!(classify_status(200), ResponseClass::Ok);
    assert_eq!(classify_status(204), ResponseClass::Ok);
}

#[test]
fn only_401_is_unauthorized() {
    assert_eq!(classify_status(401), ResponseClass::Unauthorized);
    assert_eq!(classify_status(403), ResponseClass::Failed);
    assert_eq!(classify_status(400), ResponseClass::Failed);
}

#[test]
fn server_errors_pass_through_as_failed() {
    assert_eq!(classify_status(500), ResponseClass::Failed);
    assert_eq!(classify_status(308), ResponseClass::Failed);
}
