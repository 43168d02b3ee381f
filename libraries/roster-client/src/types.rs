//! Types for directory API requests and responses.

use roster_core::{Page, User, UserFields, UserId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for connecting to the directory API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API (e.g., "https://reqres.in/api")
    pub url: String,
    /// Value sent as `x-api-key` on every request (if set)
    pub api_key: Option<String>,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl ApiConfig {
    /// Create a config with just the URL and default timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Set the `x-api-key` header value.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the request and connect timeouts.
    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for login endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from successful login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// =============================================================================
// User Types
// =============================================================================

/// A user as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User {
            id: UserId::new(dto.id),
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            avatar: dto.avatar.unwrap_or_default(),
        }
    }
}

/// One page of the user collection.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersPageResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<UserDto>,
}

impl From<UsersPageResponse> for Page {
    fn from(response: UsersPageResponse) -> Self {
        Page {
            records: response.data.into_iter().map(User::from).collect(),
            total_pages: response.total_pages,
        }
    }
}

/// Request body for user update.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateUserRequest<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<&'a str>,
}

impl<'a> From<&'a UserFields> for UpdateUserRequest<'a> {
    fn from(fields: &'a UserFields) -> Self {
        Self {
            first_name: &fields.first_name,
            last_name: &fields.last_name,
            email: &fields.email,
            avatar: fields.avatar.as_deref(),
        }
    }
}

/// Response from user update.
///
/// The demo API echoes whatever it received plus a timestamp, so every field
/// is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserResponse {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl UpdateUserResponse {
    /// Fields as confirmed by the server, falling back to what was sent.
    pub fn confirmed(self, sent: &UserFields) -> UserFields {
        UserFields {
            first_name: self.first_name.unwrap_or_else(|| sent.first_name.clone()),
            last_name: self.last_name.unwrap_or_else(|| sent.last_name.clone()),
            email: self.email.unwrap_or_else(|| sent.email.clone()),
            avatar: self.avatar.or_else(|| sent.avatar.clone()),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// API error response from server.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiError {
    pub error: String,
}

impl ApiError {
    /// Best-effort extraction of the `error` field from a response body.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiError>(body)
            .ok()
            .map(|e| e.error)
    }
}
