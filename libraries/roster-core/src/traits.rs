/// Core traits for Roster
///
/// These are the seams between the presentation engine and its collaborators:
/// the remote API, the navigator, the notification surface and the
/// confirmation prompt.
use crate::error::Result;
use crate::types::{Credentials, Notification, Page, Route, UserFields, UserId};
use async_trait::async_trait;

/// Server-paginated user collection with single-record mutations.
///
/// Each call is attempted once; implementations must not retry. On failure the
/// caller must not assume any partial result.
#[async_trait]
pub trait RemoteCollection: Send + Sync {
    /// Fetch one page (1-based) of users and the total page count
    ///
    /// # Errors
    /// Network or server errors on any non-success response
    async fn fetch_page(&self, page: u32) -> Result<Page>;

    /// Update a user and return the fields as confirmed by the server
    ///
    /// # Errors
    /// `NotFound` if the user does not exist, network or server errors otherwise
    async fn update_record(&self, id: UserId, fields: &UserFields) -> Result<UserFields>;

    /// Delete a user
    ///
    /// # Errors
    /// `NotFound` if the user does not exist, network or server errors otherwise
    async fn delete_record(&self, id: UserId) -> Result<()>;
}

/// Exchanges credentials for an opaque bearer token.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// # Errors
    /// `Auth` on rejected credentials, network or server errors otherwise
    async fn login(&self, credentials: &Credentials) -> Result<String>;
}

/// Receives navigation requests.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Fire-and-forget notification surface.
pub trait Notifier: Send + Sync {
    /// Show a notification for its duration
    fn notify(&self, notification: Notification);

    /// Dismiss every notification still on screen
    fn dismiss_all(&self);
}

/// Yes/no gate in front of destructive actions.
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that always answers yes (non-interactive front ends).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

#[async_trait]
impl ConfirmationGate for AssumeYes {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
