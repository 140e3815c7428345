//! Navigation state: splash, active tab, and dialog visibility.
//!
//! DESIGN
//! ======
//! Keeps presentation toggles apart from session and admin data so guards
//! like "profile needs a session" are plain functions over this slice.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// How long the splash screen stays up after mount.
pub const SPLASH_DURATION_MS: u32 = 2_000;

/// Bottom-bar destinations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Home,
    About,
    Profile,
}

/// Result of a tab click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabChange {
    Switched,
    /// Profile was requested without a session; the login dialog opened.
    LoginRequired,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub splash_visible: bool,
    pub active_tab: Tab,
    pub login_open: bool,
    pub admin_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self { splash_visible: true, active_tab: Tab::Home, login_open: false, admin_open: false }
    }
}

impl NavState {
    pub fn select_tab(&mut self, tab: Tab, signed_in: bool) -> TabChange {
        if tab == Tab::Profile && !signed_in {
            self.login_open = true;
            return TabChange::LoginRequired;
        }
        self.active_tab = tab;
        TabChange::Switched
    }

    /// Tab to render; a stale `Profile` without a session shows nothing.
    #[must_use]
    pub fn visible_tab(&self, signed_in: bool) -> Option<Tab> {
        match self.active_tab {
            Tab::Profile if !signed_in => None,
            tab => Some(tab),
        }
    }

    pub fn dismiss_splash(&mut self) {
        self.splash_visible = false;
    }

    pub fn open_login(&mut self) {
        self.login_open = true;
    }

    pub fn close_login(&mut self) {
        self.login_open = false;
    }

    pub fn open_admin(&mut self) {
        self.admin_open = true;
    }

    pub fn close_admin(&mut self) {
        self.admin_open = false;
    }
}
