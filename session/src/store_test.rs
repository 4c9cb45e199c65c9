use super::*;

fn session() -> Session {
    Session {
        user_id: "u-1".to_owned(),
        display_name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        is_admin: true,
        access_token: "tok-abc".to_owned(),
    }
}

fn store() -> TokenStore<MemoryStorage> {
    TokenStore::new(MemoryStorage::default())
}

// =============================================================
// save / load
// =============================================================

#[test]
fn load_returns_absent_on_empty_storage() {
    let mut store = store();
    assert_eq!(store.load(), None);
}

#[test]
fn save_then_load_round_trips() {
    let mut store = store();
    store.save(&session());
    assert_eq!(store.load(), Some(session()));
}

#[test]
fn save_exports_the_bare_token() {
    let mut store = store();
    store.save(&session());
    assert_eq!(store.access_token().as_deref(), Some("tok-abc"));
    assert!(store.token_present());
}

// =============================================================
// malformed persisted data
// =============================================================

#[test]
fn malformed_record_reads_as_absent_and_is_cleared() {
    let mut backend = MemoryStorage::default();
    backend.set(SESSION_KEY, "{not json");
    backend.set(TOKEN_KEY, "tok-stale");
    let mut store = TokenStore::new(backend);

    assert_eq!(store.load(), None);
    // Cleared as a side effect: the presence check no longer fires.
    assert!(!store.token_present());
    // Idempotent: a second load is still absent, without error.
    assert_eq!(store.load(), None);
}

#[test]
fn wrong_shape_record_reads_as_absent() {
    let mut backend = MemoryStorage::default();
    backend.set(SESSION_KEY, r#"{"user_id": 42}"#);
    let mut store = TokenStore::new(backend);
    assert_eq!(store.load(), None);
    assert_eq!(store.load(), None);
}

// =============================================================
// clear / presence
// =============================================================

#[test]
fn clear_removes_both_forms() {
    let mut store = store();
    store.save(&session());
    store.clear();
    assert_eq!(store.load(), None);
    assert!(!store.token_present());
}

#[test]
fn clear_on_empty_store_is_harmless() {
    let mut store = store();
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn token_present_requires_a_non_empty_token() {
    let mut backend = MemoryStorage::default();
    backend.set(TOKEN_KEY, "");
    let store = TokenStore::new(backend);
    assert!(!store.token_present());
}
