//! Build-time service configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell talks to three external services. Their base URLs are baked in
//! at compile time so the WASM bundle and the SSR render agree without a
//! runtime config fetch.
//!
//! Recognized build variables:
//! - `NEWSWORLD_AUTH_URL`, `NEWSWORLD_NEWS_URL`, `NEWSWORLD_ADMIN_URL`
//! - `NEWSWORLD_READ_KEY`: admin-key header value for the about-text read
//!   (the admin service rejects every call without one)
//! - `NEWSWORLD_NEWS_LIMIT`: max feed items requested (default 50)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_AUTH_URL: &str = "https://functions.poehali.dev/62578318-d60b-4d68-ad63-e806b2ca8065";
pub const DEFAULT_NEWS_URL: &str = "https://functions.poehali.dev/4acc7da9-02c7-40f3-a16c-f2bb997c17a1";
pub const DEFAULT_ADMIN_URL: &str = "https://functions.poehali.dev/e02ccb54-93f0-4611-a97b-3906da209caf";
pub const DEFAULT_NEWS_LIMIT: u32 = 50;
/// Key the deployed admin service expects on the settings read.
pub const DEFAULT_READ_KEY: &str = "Exx1";

/// Endpoints and read settings for the auth, news, and admin services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub auth_url: String,
    pub news_url: String,
    pub admin_url: String,
    /// Admin-key header value for the about-text read. Never sent to the
    /// news service.
    pub read_key: String,
    pub news_limit: u32,
}

impl ServiceConfig {
    /// Assemble the configuration from `NEWSWORLD_*` compile-time variables.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("NEWSWORLD_AUTH_URL"),
            option_env!("NEWSWORLD_NEWS_URL"),
            option_env!("NEWSWORLD_ADMIN_URL"),
            option_env!("NEWSWORLD_READ_KEY"),
            option_env!("NEWSWORLD_NEWS_LIMIT"),
        )
    }

    fn from_parts(
        auth: Option<&str>,
        news: Option<&str>,
        admin: Option<&str>,
        read_key: Option<&str>,
        news_limit: Option<&str>,
    ) -> Self {
        Self {
            auth_url: base_url(auth, DEFAULT_AUTH_URL),
            news_url: base_url(news, DEFAULT_NEWS_URL),
            admin_url: base_url(admin, DEFAULT_ADMIN_URL),
            read_key: read_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .unwrap_or(DEFAULT_READ_KEY)
                .to_owned(),
            news_limit: news_limit
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_NEWS_LIMIT),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_parts(None, None, None, None, None)
    }
}

fn base_url(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_owned()
}
