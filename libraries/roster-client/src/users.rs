//! User collection operations for the directory API.

use crate::client::authorize;
use crate::error::{ClientError, Result};
use crate::types::{UpdateUserRequest, UpdateUserResponse, UsersPageResponse};
use reqwest::{Client, RequestBuilder, Response};
use roster_core::{UserFields, UserId};
use tracing::debug;

/// Users client for the directory API.
pub struct UsersClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    api_key: Option<&'a str>,
    access_token: Option<String>,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(
        http: &'a Client,
        base_url: &'a str,
        api_key: Option<&'a str>,
        access_token: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url,
            api_key,
            access_token,
        }
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        authorize(builder, self.access_token.as_deref(), self.api_key)
    }

    /// Get one page (1-based) of users.
    pub async fn fetch_page(&self, page: u32) -> Result<UsersPageResponse> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, page, "Fetching users page");

        let response = self
            .request(self.http.get(&url))
            .query(&[("page", page)])
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let users: UsersPageResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse users response: {}", e))
            })?;

            debug!(
                page,
                users = users.data.len(),
                total_pages = users.total_pages,
                "Fetched users page"
            );

            Ok(users)
        } else {
            Err(server_error(response).await)
        }
    }

    /// Update a single user.
    pub async fn update_user(
        &self,
        user_id: UserId,
        fields: &UserFields,
    ) -> Result<UpdateUserResponse> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        debug!(url = %url, user_id = %user_id, "Updating user");

        let response = self
            .request(self.http.put(&url))
            .json(&UpdateUserRequest::from(fields))
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let updated: UpdateUserResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse update response: {}", e))
            })?;

            debug!(user_id = %user_id, updated_at = ?updated.updated_at, "Updated user");
            Ok(updated)
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound(user_id))
        } else {
            Err(server_error(response).await)
        }
    }

    /// Delete a single user.
    pub async fn delete_user(&self, user_id: UserId) -> Result<()> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        debug!(url = %url, user_id = %user_id, "Deleting user");

        let response = self
            .request(self.http.delete(&url))
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            debug!(user_id = %user_id, "Deleted user");
            Ok(())
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound(user_id))
        } else {
            Err(server_error(response).await)
        }
    }
}

async fn server_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let error_text = response.text().await.unwrap_or_default();
    ClientError::ServerError {
        status,
        message: error_text,
    }
}
