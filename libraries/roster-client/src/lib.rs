//! Roster HTTP Client
//!
//! HTTP client library for a reqres-style user directory API.
//!
//! # Features
//!
//! - **Authentication**: Login with email/password, bearer token from the session
//! - **Users**: Fetch one page of users, update and delete single users
//! - **Avatars**: Turn a local image file into a data URI for preview/upload
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{ApiConfig, RosterClient};
//! use roster_core::{RemoteCollection, SessionContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = SessionContext::new();
//!     let client = RosterClient::new(ApiConfig::new("https://reqres.in/api"), session.clone())?;
//!
//!     // Login and keep the token for subsequent requests
//!     let login = client.login("eve.holt@reqres.in", "cityslicka").await?;
//!     session.set(login.token);
//!
//!     // First page of users
//!     let page = client.fetch_page(1).await?;
//!     println!("{} users, {} pages", page.records.len(), page.total_pages);
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod avatar;
mod client;
mod error;
mod types;
mod users;

// Re-export main types
pub use client::RosterClient;
pub use error::{ClientError, Result};
pub use types::{ApiConfig, LoginResponse, UpdateUserResponse, UserDto, UsersPageResponse};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use avatar::{mime_type_for_file, read_avatar_data_uri};
pub use users::UsersClient;
