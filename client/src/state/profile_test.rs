use super::*;
use crate::state::session::SessionState;
use crate::util::storage::MemoryStorage;
use serde_json::json;

fn user(name: &str, location: Option<&str>) -> User {
    serde_json::from_value(json!({
        "id": 42,
        "email": "ann@example.com",
        "name": name,
        "location": location,
        "is_verified": true,
        "is_admin": false,
        "created_at": "2024-05-01 12:00:00"
    }))
    .unwrap()
}

#[test]
fn begin_seeds_buffers_from_user() {
    let mut form = ProfileForm::default();
    form.begin(&user("Ann", Some("Oslo")));
    assert!(form.editing);
    assert_eq!(form.name, "Ann");
    assert_eq!(form.location, "Oslo");

    form.begin(&user("Bob", None));
    assert_eq!(form.location, "");
}

#[test]
fn cancel_discards_edits_and_session_is_unchanged() {
    let storage = MemoryStorage::default();
    let mut session = SessionState::default();
    session.set_user(user("Ann", Some("Oslo")), &storage);

    let mut form = ProfileForm::default();
    form.begin(session.user.as_ref().unwrap());
    form.name = "Changed".to_owned();
    form.cancel();

    assert!(!form.editing);
    assert_eq!(session.user.as_ref().unwrap().name, "Ann");
    assert!(form.begin_save(42).is_none());
}

#[test]
fn begin_save_sends_buffers_as_typed() {
    let mut form = ProfileForm::default();
    form.begin(&user("Ann", None));
    form.name = String::new();
    form.location = "Riga".to_owned();
    let (_, body) = form.begin_save(42).unwrap();
    assert_eq!(body, UpdateProfileRequest { user_id: 42, name: String::new(), location: "Riga".to_owned() });
    assert!(form.is_saving());
    assert!(form.begin_save(42).is_none());
}

#[test]
fn successful_save_returns_user_and_exits_edit_mode() {
    let mut form = ProfileForm::default();
    form.begin(&user("Ann", None));
    let (ticket, _) = form.begin_save(42).unwrap();
    let updated = user("Annie", Some("Riga"));
    let (next, toast) = form.apply_save(&ticket, Ok(UserEnvelope { user: Some(updated.clone()), error: None }));
    assert_eq!(next, Some(updated));
    assert_eq!(toast, Some(PROFILE_UPDATED));
    assert!(!form.editing);
    assert!(!form.is_saving());
}

#[test]
fn save_without_user_stays_in_edit_mode() {
    let mut form = ProfileForm::default();
    form.begin(&user("Ann", None));
    let (ticket, _) = form.begin_save(42).unwrap();
    let (next, toast) = form.apply_save(&ticket, Ok(UserEnvelope::default()));
    assert!(next.is_none());
    assert_eq!(toast, Some(PROFILE_UPDATE_FAILED));
    assert!(form.editing);
}

#[test]
fn save_error_reports_failure() {
    let mut form = ProfileForm::default();
    form.begin(&user("Ann", None));
    let (ticket, _) = form.begin_save(42).unwrap();
    let (next, toast) = form.apply_save(&ticket, Err(ApiError::Transport("offline".to_owned())));
    assert!(next.is_none());
    assert_eq!(toast, Some(PROFILE_UPDATE_FAILED));
}

#[test]
fn save_finishing_after_cancel_is_dropped() {
    let mut form = ProfileForm::default();
    form.begin(&user("Ann", None));
    let (ticket, _) = form.begin_save(42).unwrap();
    form.cancel();
    let (next, toast) = form.apply_save(&ticket, Ok(UserEnvelope { user: Some(user("X", None)), error: None }));
    assert!(next.is_none());
    assert!(toast.is_none());
}
