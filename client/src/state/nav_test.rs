use super::*;

// =============================================================
// NavState defaults
// =============================================================

#[test]
fn nav_state_default_shows_splash_on_home() {
    let state = NavState::default();
    assert!(state.splash_visible);
    assert_eq!(state.active_tab, Tab::Home);
    assert!(!state.login_open);
    assert!(!state.admin_open);
}

#[test]
fn tab_default_is_home() {
    assert_eq!(Tab::default(), Tab::Home);
}

// =============================================================
// select_tab
// =============================================================

#[test]
fn profile_without_session_opens_login_and_keeps_tab() {
    let mut state = NavState::default();
    state.select_tab(Tab::About, false);
    assert_eq!(state.select_tab(Tab::Profile, false), TabChange::LoginRequired);
    assert_eq!(state.active_tab, Tab::About);
    assert!(state.login_open);
}

#[test]
fn profile_with_session_switches() {
    let mut state = NavState::default();
    assert_eq!(state.select_tab(Tab::Profile, true), TabChange::Switched);
    assert_eq!(state.active_tab, Tab::Profile);
    assert!(!state.login_open);
}

#[test]
fn home_and_about_never_open_login() {
    for signed_in in [false, true] {
        let mut state = NavState::default();
        assert_eq!(state.select_tab(Tab::About, signed_in), TabChange::Switched);
        assert_eq!(state.select_tab(Tab::Home, signed_in), TabChange::Switched);
        assert!(!state.login_open);
    }
}

#[test]
fn visible_tab_hides_profile_after_sign_out() {
    let mut state = NavState::default();
    state.select_tab(Tab::Profile, true);
    assert_eq!(state.visible_tab(true), Some(Tab::Profile));
    assert_eq!(state.visible_tab(false), None);
}

// =============================================================
// Dialogs and splash
// =============================================================

#[test]
fn dialog_toggles() {
    let mut state = NavState::default();
    state.open_admin();
    state.open_login();
    assert!(state.admin_open && state.login_open);
    state.close_admin();
    state.close_login();
    assert!(!state.admin_open && !state.login_open);
}

#[test]
fn dismiss_splash_hides_it() {
    let mut state = NavState::default();
    state.dismiss_splash();
    assert!(!state.splash_visible);
}
