//! Wire DTOs for the auth, news, and admin services.
//!
//! DESIGN
//! ======
//! Response envelopes keep every field optional. The services answer errors
//! with the same JSON shape minus the success field, so "field missing" is
//! the failure signal callers check, not the HTTP status.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A registered account as returned by the auth and admin services.
///
/// Unknown server columns are kept in `extra` so a user written to local
/// storage serializes back exactly as it was received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier; opaque to the client.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-form preferences blob; never interpreted client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<serde_json::Value>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_admin: bool,
    /// Registration timestamp as the service formats it.
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A published feed entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub published_at: String,
    #[serde(default)]
    pub author_name: Option<String>,
    /// Whether the author account is verified, when the author is known.
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub is_admin_post: bool,
}

/// Reply to `send_code` and other message-style acknowledgements.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageEnvelope {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    /// Echoed one-time code, when the service is configured to return it.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MessageEnvelope {
    /// `true` when `message` holds a truthy JSON value.
    #[must_use]
    pub fn acknowledged(&self) -> bool {
        self.message.as_ref().is_some_and(json_truthy)
    }
}

/// Reply to `verify_code` and profile updates.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserEnvelope {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NewsEnvelope {
    #[serde(default)]
    pub news: Option<Vec<NewsItem>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub users: Option<Vec<User>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AboutEnvelope {
    #[serde(default)]
    pub about: Option<String>,
}

/// `POST` bodies understood by the auth service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AuthRequest {
    SendCode { email: String },
    VerifyCode { email: String, code: String },
}

/// `PUT` body for the auth service's profile update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateProfileRequest {
    pub user_id: i64,
    pub name: String,
    pub location: String,
}

/// Mutating bodies understood by the admin service.
///
/// `idempotency_key` lets the service drop replays of the same submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AdminRequest {
    VerifyUser {
        user_id: i64,
        idempotency_key: String,
    },
    #[serde(rename = "post_as_spawner")]
    PostAnnouncement {
        title: String,
        content: String,
        category: String,
        idempotency_key: String,
    },
    UpdateAbout {
        about: String,
    },
}

/// JavaScript truthiness, which is what the services' callers historically
/// keyed on.
#[must_use]
pub fn json_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

/// Text column that may arrive as `null`; read as empty.
fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected numeric id, got {s:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
