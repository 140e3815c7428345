//! HTTP calls to the auth, news, and admin services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! services are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses are decoded like successes: the services answer failures
//! with an envelope lacking the success field, and callers branch on that
//! field. The one status with its own meaning is 401 from the admin service,
//! surfaced as `ApiError::Unauthorized` so the admin gate can stay locked.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ServiceConfig;

use super::types::{
    AboutEnvelope, AdminRequest, AuthRequest, MessageEnvelope, NewsEnvelope, UpdateProfileRequest, UserEnvelope,
    UsersEnvelope,
};

/// Header the admin service reads its key from.
pub const ADMIN_KEY_HEADER: &str = "x-admin-password";

/// Failure modes of a service call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("admin key rejected")]
    Unauthorized,
    #[error("not available on server")]
    Unavailable,
}

/// The two public reads, which differ in the headers their services accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadEndpoint {
    News,
    Settings,
}

/// Admin-key header value for a public read. The news service's CORS policy
/// rejects the header; the admin service rejects any call without it.
#[must_use]
pub fn read_key_for(cfg: &ServiceConfig, endpoint: ReadEndpoint) -> Option<&str> {
    match endpoint {
        ReadEndpoint::News => None,
        ReadEndpoint::Settings => Some(&cfg.read_key),
    }
}

fn news_endpoint(cfg: &ServiceConfig) -> String {
    format!("{}?limit={}", cfg.news_url, cfg.news_limit)
}

fn admin_query_endpoint(cfg: &ServiceConfig, action: &str) -> String {
    format!("{}?action={action}", cfg.admin_url)
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ADMIN_KEY_HEADER, ApiError};

    pub(super) fn with_key(builder: RequestBuilder, key: Option<&str>) -> RequestBuilder {
        match key {
            Some(key) => builder.header(ADMIN_KEY_HEADER, key),
            None => builder,
        }
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    pub(super) async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        builder
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    pub(super) fn ensure_authorized(resp: &Response) -> Result<(), ApiError> {
        if resp.status() == 401 {
            return Err(ApiError::Unauthorized);
        }
        Ok(())
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        ensure_authorized(&resp)?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

// =============================================================================
// AUTH SERVICE
// =============================================================================

/// Ask the auth service to email a one-time code to `email`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not JSON.
pub async fn send_code(cfg: &ServiceConfig, email: &str) -> Result<MessageEnvelope, ApiError> {
    let body = AuthRequest::SendCode { email: email.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send_json(gloo_net::http::Request::post(&cfg.auth_url), &body).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, body);
        Err(ApiError::Unavailable)
    }
}

/// Exchange `email` + `code` for a user record.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not JSON. A wrong
/// code is not an error: the envelope simply has no `user`.
pub async fn verify_code(cfg: &ServiceConfig, email: &str, code: &str) -> Result<UserEnvelope, ApiError> {
    let body = AuthRequest::VerifyCode { email: email.to_owned(), code: code.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send_json(gloo_net::http::Request::post(&cfg.auth_url), &body).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, body);
        Err(ApiError::Unavailable)
    }
}

/// Save name and location for the signed-in user.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not JSON.
pub async fn update_profile(cfg: &ServiceConfig, body: &UpdateProfileRequest) -> Result<UserEnvelope, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send_json(gloo_net::http::Request::put(&cfg.auth_url), body).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, body);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// PUBLIC READS
// =============================================================================

/// Fetch the news feed, newest first.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not JSON.
pub async fn fetch_news(cfg: &ServiceConfig) -> Result<NewsEnvelope, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::with_key(
            gloo_net::http::Request::get(&news_endpoint(cfg)),
            read_key_for(cfg, ReadEndpoint::News),
        );
        let resp = transport::send(builder).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = news_endpoint(cfg);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the "about" text from the admin service's settings.
///
/// # Errors
///
/// Returns an error if the request fails, the body is not JSON, or the
/// service rejects the read key.
pub async fn fetch_about(cfg: &ServiceConfig) -> Result<AboutEnvelope, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::with_key(
            gloo_net::http::Request::get(&admin_query_endpoint(cfg, "settings")),
            read_key_for(cfg, ReadEndpoint::Settings),
        );
        let resp = transport::send(builder).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = admin_query_endpoint(cfg, "settings");
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// ADMIN SERVICE
// =============================================================================

/// List every registered user. Doubles as the admin gate check: a rejected
/// `admin_key` yields `ApiError::Unauthorized`.
///
/// # Errors
///
/// Returns an error if the request fails, the body is not JSON, or the key
/// is rejected.
pub async fn fetch_users(cfg: &ServiceConfig, admin_key: &str) -> Result<UsersEnvelope, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::with_key(
            gloo_net::http::Request::get(&admin_query_endpoint(cfg, "users")),
            Some(admin_key),
        );
        let resp = transport::send(builder).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (admin_query_endpoint(cfg, "users"), admin_key);
        Err(ApiError::Unavailable)
    }
}

/// Mark a user verified.
///
/// # Errors
///
/// Returns an error if the request fails or the key is rejected.
pub async fn verify_user(
    cfg: &ServiceConfig,
    admin_key: &str,
    user_id: i64,
    idempotency_key: &str,
) -> Result<(), ApiError> {
    let body = AdminRequest::VerifyUser { user_id, idempotency_key: idempotency_key.to_owned() };
    admin_command(cfg, admin_key, AdminMethod::Post, &body).await
}

/// Publish an announcement attributed to the administrative identity.
///
/// # Errors
///
/// Returns an error if the request fails or the key is rejected.
pub async fn post_announcement(cfg: &ServiceConfig, admin_key: &str, body: &AdminRequest) -> Result<(), ApiError> {
    admin_command(cfg, admin_key, AdminMethod::Post, body).await
}

/// Replace the "about" text.
///
/// # Errors
///
/// Returns an error if the request fails or the key is rejected.
pub async fn update_about(cfg: &ServiceConfig, admin_key: &str, about: &str) -> Result<(), ApiError> {
    let body = AdminRequest::UpdateAbout { about: about.to_owned() };
    admin_command(cfg, admin_key, AdminMethod::Put, &body).await
}

#[derive(Clone, Copy)]
enum AdminMethod {
    Post,
    Put,
}

/// Send a mutating admin command. The response body is not consumed; callers
/// re-fetch or patch local state themselves.
async fn admin_command(
    cfg: &ServiceConfig,
    admin_key: &str,
    method: AdminMethod,
    body: &AdminRequest,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = match method {
            AdminMethod::Post => gloo_net::http::Request::post(&cfg.admin_url),
            AdminMethod::Put => gloo_net::http::Request::put(&cfg.admin_url),
        };
        let resp = transport::send_json(transport::with_key(builder, Some(admin_key)), body).await?;
        transport::ensure_authorized(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, admin_key, body);
        match method {
            AdminMethod::Post | AdminMethod::Put => Err(ApiError::Unavailable),
        }
    }
}
