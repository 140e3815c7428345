use super::*;
use serde_json::json;

fn acked(message: serde_json::Value) -> Result<MessageEnvelope, ApiError> {
    Ok(serde_json::from_value(json!({ "message": message })).unwrap())
}

fn user_envelope() -> Result<UserEnvelope, ApiError> {
    Ok(serde_json::from_value(json!({
        "user": {"id": 1, "email": "a@b.c", "name": "User_1234", "is_verified": false, "is_admin": false, "created_at": "2024-01-01"}
    }))
    .unwrap())
}

fn code_sent_form() -> LoginForm {
    let mut form = LoginForm { email: "a@b.c".to_owned(), ..LoginForm::default() };
    let (ticket, _) = form.begin_send_code().unwrap();
    form.apply_send_code(&ticket, acked(json!("Code sent")));
    form
}

// =============================================================
// Code input
// =============================================================

#[test]
fn normalize_code_input_truncates_to_code_length() {
    assert_eq!(normalize_code_input("123456"), "1234");
    assert_eq!(normalize_code_input("12"), "12");
    assert_eq!(normalize_code_input("äöüß!"), "äöüß");
}

#[test]
fn code_complete_depends_only_on_length() {
    for code in ["1234", "abcd", "    ", "!@#$", "äöüß"] {
        assert!(code_complete(code), "{code:?} should be complete");
    }
    for code in ["", "1", "123", "12345"] {
        assert!(!code_complete(code), "{code:?} should be incomplete");
    }
}

// =============================================================
// send code
// =============================================================

#[test]
fn send_code_with_message_moves_to_code_sent() {
    let mut form = LoginForm { email: "a@b.c".to_owned(), ..LoginForm::default() };
    let (ticket, email) = form.begin_send_code().unwrap();
    assert_eq!(email, "a@b.c");
    assert!(form.is_pending());

    let toast = form.apply_send_code(&ticket, acked(json!("Code sent")));
    assert_eq!(form.stage, LoginStage::CodeSent);
    assert_eq!(toast, Some(CODE_SENT));
    assert!(!form.is_pending());
}

#[test]
fn send_code_without_truthy_message_stays_not_started() {
    for body in [json!({"error": "Email required"}), json!({"message": ""}), json!({})] {
        let mut form = LoginForm::default();
        let (ticket, _) = form.begin_send_code().unwrap();
        let toast = form.apply_send_code(&ticket, Ok(serde_json::from_value(body).unwrap()));
        assert_eq!(form.stage, LoginStage::NotStarted);
        assert_eq!(toast, Some(CODE_SEND_FAILED));
    }
}

#[test]
fn send_code_transport_error_stays_not_started() {
    let mut form = LoginForm::default();
    let (ticket, _) = form.begin_send_code().unwrap();
    let toast = form.apply_send_code(&ticket, Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(form.stage, LoginStage::NotStarted);
    assert_eq!(toast, Some(CODE_SEND_FAILED));
}

#[test]
fn send_code_is_not_resubmitted_while_pending() {
    let mut form = LoginForm::default();
    assert!(form.begin_send_code().is_some());
    assert!(form.begin_send_code().is_none());
}

#[test]
fn send_code_does_not_validate_email() {
    let mut form = LoginForm { email: "not an email".to_owned(), ..LoginForm::default() };
    let (_, email) = form.begin_send_code().unwrap();
    assert_eq!(email, "not an email");
}

// =============================================================
// verify code
// =============================================================

#[test]
fn verify_requires_complete_code() {
    let mut form = code_sent_form();
    form.set_code("123");
    assert!(!form.can_confirm());
    assert!(form.begin_verify_code().is_none());

    form.set_code("1234");
    assert!(form.can_confirm());
    let (_, email, code) = form.begin_verify_code().unwrap();
    assert_eq!((email.as_str(), code.as_str()), ("a@b.c", "1234"));
}

#[test]
fn verify_with_user_authenticates() {
    let mut form = code_sent_form();
    form.set_code("1234");
    let (ticket, _, _) = form.begin_verify_code().unwrap();
    let (user, toast) = form.apply_verify_code(&ticket, user_envelope());
    assert_eq!(user.map(|u| u.id), Some(1));
    assert_eq!(toast, Some(SIGNED_IN));
    assert_eq!(form.stage, LoginStage::Authenticated);
}

#[test]
fn wrong_code_keeps_code_sent_and_allows_retry() {
    let mut form = code_sent_form();
    form.set_code("0000");
    for _ in 0..5 {
        let (ticket, _, _) = form.begin_verify_code().unwrap();
        let (user, toast) = form.apply_verify_code(
            &ticket,
            Ok(serde_json::from_value(json!({"error": "Invalid or expired code"})).unwrap()),
        );
        assert!(user.is_none());
        assert_eq!(toast, Some(WRONG_CODE));
        assert_eq!(form.stage, LoginStage::CodeSent);
    }
}

#[test]
fn verify_transport_error_reports_sign_in_failure() {
    let mut form = code_sent_form();
    form.set_code("1234");
    let (ticket, _, _) = form.begin_verify_code().unwrap();
    let (user, toast) = form.apply_verify_code(&ticket, Err(ApiError::Decode("html".to_owned())));
    assert!(user.is_none());
    assert_eq!(toast, Some(SIGN_IN_FAILED));
    assert_eq!(form.stage, LoginStage::CodeSent);
}

#[test]
fn cancelled_verify_is_ignored() {
    let mut form = code_sent_form();
    form.set_code("1234");
    let (ticket, _, _) = form.begin_verify_code().unwrap();
    form.reset();
    let (user, toast) = form.apply_verify_code(&ticket, user_envelope());
    assert!(user.is_none());
    assert!(toast.is_none());
    assert_eq!(form.stage, LoginStage::NotStarted);
}

// =============================================================
// change email
// =============================================================

#[test]
fn change_email_returns_to_not_started() {
    let mut form = code_sent_form();
    form.set_code("12");
    form.change_email();
    assert_eq!(form.stage, LoginStage::NotStarted);
    assert!(form.code.is_empty());
    assert_eq!(form.email, "a@b.c");
}
