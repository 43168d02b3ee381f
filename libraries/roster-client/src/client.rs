//! Main directory API client.

use crate::auth::AuthClient;
use crate::error::{ClientError, Result};
use crate::types::{ApiConfig, LoginResponse};
use crate::users::UsersClient;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use roster_core::{
    Authenticator, Credentials, Page, RemoteCollection, SessionContext, UserFields, UserId,
};
use tracing::debug;
use url::Url;

/// Main client for the user directory API.
///
/// The client reads the bearer token from the [`SessionContext`] it was built
/// with on every request, so logging in or out through any clone of the
/// session takes effect immediately.
///
/// # Example
///
/// ```ignore
/// use roster_client::{ApiConfig, RosterClient};
/// use roster_core::SessionContext;
///
/// let session = SessionContext::new();
/// let client = RosterClient::new(ApiConfig::new("https://reqres.in/api"), session.clone())?;
///
/// let login = client.login("eve.holt@reqres.in", "cityslicka").await?;
/// session.set(login.token);
///
/// let page = client.users().fetch_page(2).await?;
/// println!("Page {} of {}", page.page, page.total_pages);
/// ```
pub struct RosterClient {
    http: Client,
    config: ApiConfig,
    session: SessionContext,
}

impl RosterClient {
    /// Create a new client with the given configuration and session.
    pub fn new(config: ApiConfig, session: SessionContext) -> Result<Self> {
        let url = normalize_url(&config.url)?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Roster/{} (CLI)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        debug!(url = %url, "Created directory client");

        Ok(Self {
            http,
            config: ApiConfig { url, ..config },
            session,
        })
    }

    /// Get the API base URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// The session this client authorizes requests with.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Login with email and password.
    ///
    /// The returned token is not stored in the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        AuthClient::new(&self.http, &self.config.url, self.config.api_key.as_deref())
            .login(email, password)
            .await
    }

    /// Get a users client carrying the current session token (if any).
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(
            &self.http,
            &self.config.url,
            self.config.api_key.as_deref(),
            self.session.token(),
        )
    }
}

#[async_trait]
impl RemoteCollection for RosterClient {
    async fn fetch_page(&self, page: u32) -> roster_core::Result<Page> {
        Ok(self.users().fetch_page(page).await?.into())
    }

    async fn update_record(
        &self,
        id: UserId,
        fields: &UserFields,
    ) -> roster_core::Result<UserFields> {
        let response = self.users().update_user(id, fields).await?;
        Ok(response.confirmed(fields))
    }

    async fn delete_record(&self, id: UserId) -> roster_core::Result<()> {
        Ok(self.users().delete_user(id).await?)
    }
}

#[async_trait]
impl Authenticator for RosterClient {
    async fn login(&self, credentials: &Credentials) -> roster_core::Result<String> {
        let response = RosterClient::login(self, &credentials.email, &credentials.password).await?;
        Ok(response.token)
    }
}

/// Authorization step shared by every request: bearer token and API key.
pub(crate) fn authorize(
    builder: RequestBuilder,
    access_token: Option<&str>,
    api_key: Option<&str>,
) -> RequestBuilder {
    let builder = match access_token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    };
    match api_key {
        Some(key) => builder.header("x-api-key", key),
        None => builder,
    }
}

fn normalize_url(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
    }

    let url = raw.trim().trim_end_matches('/').to_string();
    let parsed = Url::parse(&url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ClientError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    Ok(url)
}
