//! Authentication methods for the directory API.

use crate::client::authorize;
use crate::error::{ClientError, Result};
use crate::types::{ApiError, LoginRequest, LoginResponse};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Authentication client for the directory API.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    api_key: Option<&'a str>,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, api_key: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Login with email and password.
    ///
    /// Returns the bearer token on success. The token is not stored; that is
    /// the session owner's decision.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/login", self.base_url);
        debug!(url = %url, email = %email, "Attempting login");

        let request = LoginRequest { email, password };

        let response = authorize(self.http.post(&url), None, self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let login_response: LoginResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse login response: {}", e))
            })?;

            if login_response.token.is_empty() {
                warn!(email = %email, "Login answered without a token");
                return Err(ClientError::AuthFailed(
                    "Server returned an empty token".to_string(),
                ));
            }

            info!(email = %email, "Login successful");
            Ok(login_response)
        } else if status.as_u16() == 400 || status.as_u16() == 401 {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Login failed: invalid credentials");
            Err(ClientError::AuthFailed(
                ApiError::message_from(&error_text)
                    .unwrap_or_else(|| "Invalid email or password".to_string()),
            ))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
