use super::*;
use crate::util::storage::MemoryStorage;

fn user(id: i64, name: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "email": format!("{name}@example.com"),
        "name": name,
        "location": null,
        "is_verified": false,
        "is_admin": false,
        "created_at": "2024-05-01 12:00:00",
        "updated_at": "2024-05-01 12:00:00"
    }))
    .unwrap()
}

#[test]
fn default_session_is_signed_out() {
    let state = SessionState::default();
    assert!(!state.is_signed_in());
    assert_eq!(state.user_id(), None);
}

#[test]
fn restore_from_empty_storage_is_signed_out() {
    let storage = MemoryStorage::default();
    assert_eq!(SessionState::restore(&storage), SessionState::default());
}

#[test]
fn set_user_mirrors_memory_into_storage_byte_for_byte() {
    let storage = MemoryStorage::default();
    let mut state = SessionState::default();
    state.set_user(user(7, "ann"), &storage);

    let stored = storage.get(SESSION_STORAGE_KEY).unwrap();
    let in_memory = serde_json::to_string(state.user.as_ref().unwrap()).unwrap();
    assert_eq!(stored, in_memory);
}

#[test]
fn restore_returns_last_written_user() {
    let storage = MemoryStorage::default();
    let mut state = SessionState::default();
    state.set_user(user(7, "ann"), &storage);
    state.set_user(user(7, "annie"), &storage);

    let restored = SessionState::restore(&storage);
    assert_eq!(restored, state);
    assert_eq!(restored.user.unwrap().name, "annie");
}

#[test]
fn restore_discards_corrupt_record() {
    let storage = MemoryStorage::default();
    storage.set(SESSION_STORAGE_KEY, "{not json");
    let state = SessionState::restore(&storage);
    assert!(!state.is_signed_in());
    assert_eq!(storage.get(SESSION_STORAGE_KEY), None);
}

#[test]
fn sign_out_clears_memory_and_storage() {
    let storage = MemoryStorage::default();
    let mut state = SessionState::default();
    state.set_user(user(1, "bob"), &storage);
    state.sign_out(&storage);
    assert!(!state.is_signed_in());
    assert_eq!(storage.get(SESSION_STORAGE_KEY), None);
}
