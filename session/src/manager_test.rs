use super::*;
use crate::store::{MemoryStorage, SESSION_KEY};

fn admin_session() -> Session {
    Session {
        user_id: "u-1".to_owned(),
        display_name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        is_admin: true,
        access_token: "tok-admin".to_owned(),
    }
}

fn viewer_session() -> Session {
    Session {
        is_admin: false,
        access_token: "tok-viewer".to_owned(),
        ..admin_session()
    }
}

fn manager(policy: AccessPolicy) -> SessionManager<MemoryStorage> {
    SessionManager::new(MemoryStorage::default(), policy)
}

// =============================================================
// establish
// =============================================================

#[test]
fn admin_login_sets_current_and_persists_matching_token() {
    let mut mgr = manager(AccessPolicy::AdminOnly);
    mgr.establish(admin_session()).expect("admin accepted");

    assert!(mgr.is_authenticated());
    assert_eq!(mgr.current(), Some(&admin_session()));
    assert_eq!(mgr.store().access_token().as_deref(), Some("tok-admin"));
}

#[test]
fn non_admin_login_is_denied_and_stores_nothing() {
    let mut mgr = manager(AccessPolicy::AdminOnly);
    let err = mgr.establish(viewer_session()).unwrap_err();

    assert_eq!(err, SessionError::AccessDenied);
    assert!(mgr.current().is_none());
    assert!(!mgr.store().token_present());
}

#[test]
fn any_user_policy_accepts_non_admin_accounts() {
    let mut mgr = manager(AccessPolicy::AnyUser);
    mgr.establish(viewer_session()).expect("viewer accepted");
    assert_eq!(mgr.store().access_token().as_deref(), Some("tok-viewer"));
}

// =============================================================
// refresh_profile
// =============================================================

#[test]
fn refreshed_profile_round_trips_through_the_store() {
    let mut mgr = manager(AccessPolicy::AdminOnly);
    mgr.establish(admin_session()).expect("admin accepted");

    mgr.refresh_profile("Ada L.".to_owned(), "ada.l@example.com".to_owned(), true)
        .expect("still admin");

    let expected = Session {
        display_name: "Ada L.".to_owned(),
        email: "ada.l@example.com".to_owned(),
        ..admin_session()
    };
    assert_eq!(mgr.current(), Some(&expected));
    // Rehydrating reads the persisted record back, not the memory copy.
    assert_eq!(mgr.hydrate(), Some(&expected));
}

#[test]
fn refresh_that_revokes_admin_clears_the_session() {
    let mut mgr = manager(AccessPolicy::AdminOnly);
    mgr.establish(admin_session()).expect("admin accepted");

    let err = mgr
        .refresh_profile("Ada".to_owned(), "ada@example.com".to_owned(), false)
        .unwrap_err();

    assert_eq!(err, SessionError::AccessDenied);
    assert!(mgr.current().is_none());
    assert!(!mgr.store().token_present());
}

#[test]
fn refresh_without_a_session_is_a_no_op() {
    let mut mgr = manager(AccessPolicy::AdminOnly);
    mgr.refresh_profile("Ada".to_owned(), "ada@example.com".to_owned(), true)
        .expect("no-op");
    assert!(mgr.current().is_none());
    assert!(!mgr.store().token_present());
}

// =============================================================
// clear / handle_unauthorized
// =============================================================

#[test]
fn clear_then_load_is_absent_for_any_prior_state() {
    let mut mgr = manager(AccessPolicy::AdminOnly);
    mgr.establish(admin_session()).expect("admin accepted");

    mgr.clear();
    assert!(mgr.current().is_none());
    assert!(mgr.hydrate().is_none());
}

#[test]
fn clear_with_no_session_is_harmless() {
    let mut mgr = manager(AccessPolicy::AdminOnly);
    mgr.clear();
    assert!(mgr.current().is_none());
}

#[test]
fn unauthorized_response_clears_persisted_storage() {
    let mut mgr = manager(AccessPolicy::AdminOnly);
    mgr.establish(admin_session()).expect("admin accepted");

    mgr.handle_unauthorized();
    assert!(mgr.current().is_none());
    assert!(!mgr.store().token_present());
    assert!(mgr.hydrate().is_none());
}

// =============================================================
// hydrate
// =============================================================

#[test]
fn hydrate_restores_a_previously_saved_session() {
    let mut storage = MemoryStorage::default();
    storage.set(
        SESSION_KEY,
        &serde_json::to_string(&admin_session()).expect("serialize"),
    );
    let mut second = SessionManager::new(storage, AccessPolicy::AdminOnly);
    assert_eq!(second.hydrate(), Some(&admin_session()));
}

#[test]
fn hydrate_over_corrupt_storage_proceeds_unauthenticated() {
    let mut storage = MemoryStorage::default();
    storage.set(SESSION_KEY, "]]garbage[[");
    let mut mgr = SessionManager::new(storage, AccessPolicy::AdminOnly);

    assert!(mgr.hydrate().is_none());
    assert!(!mgr.is_authenticated());
    // The corrupt entry was cleared; hydrating again stays absent.
    assert!(mgr.hydrate().is_none());
}
