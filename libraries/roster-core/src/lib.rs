//! Roster Core
//!
//! Platform-agnostic core types, traits, and error handling for Roster.
//!
//! This crate provides the building blocks shared by the HTTP client, the
//! presentation engine, and the front ends.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserFields`, `Page`, `Route`, `Notification`
//! - **Core Traits**: `RemoteCollection`, `Authenticator`, `Navigator`, `Notifier`,
//!   `ConfirmationGate`
//! - **Session**: `SessionContext`, the explicit bearer-token slot
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::{SessionContext, User, UserFields, UserId};
//!
//! let session = SessionContext::new();
//! assert!(!session.is_authenticated());
//!
//! let mut user = User::new(UserId::new(1), "George", "Bluth", "george@x.com");
//! user.apply(&UserFields::new("George", "Michael", "gm@x.com"));
//! assert_eq!(user.last_name, "Michael");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod session;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use session::SessionContext;
pub use traits::{
    AssumeYes, Authenticator, ConfirmationGate, Navigator, Notifier, RemoteCollection,
};

pub use types::{
    Credentials, Notification, NotificationKind, Page, Route, User, UserFields, UserId,
};
