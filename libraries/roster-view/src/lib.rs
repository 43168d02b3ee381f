//! Roster - List Presentation Engine
//!
//! Platform-agnostic presentation logic for a paginated, searchable user
//! directory backed by a remote collection.
//!
//! This crate provides:
//! - Page store (the currently loaded page plus pagination metadata)
//! - View projection (case-insensitive search over the loaded page)
//! - Pagination controller (range-guarded page fetches)
//! - Mutation coordinator (confirmed delete/update, reconciled after remote success)
//! - Login, edit-form and directory view state
//! - Session-guarded navigation
//!
//! # Architecture
//!
//! `roster-view` knows nothing about HTTP, terminals or browsers:
//! - The remote API is a `RemoteCollection` / `Authenticator`
//! - Routing is a `Navigator`
//! - Toasts are a `Notifier`
//! - Confirmation dialogs are a `ConfirmationGate`
//!
//! Front ends provide those collaborators and render what the engine exposes.
//!
//! # Example: Search over the loaded page
//!
//! ```rust
//! use roster_core::{User, UserId};
//! use roster_view::{project, SearchFilterState};
//!
//! let records = vec![
//!     User::new(UserId::new(1), "George", "Bluth", "george@x.com"),
//!     User::new(UserId::new(2), "Lucille", "Bluth", "lucille@x.com"),
//! ];
//!
//! let search = SearchFilterState::with_term("LUCILLE");
//! let visible = project(&records, &search);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].id, UserId::new(2));
//! ```
//!
//! # Example: Directory wiring
//!
//! ```rust,no_run
//! use roster_core::{ConfirmationGate, Navigator, Notifier, RemoteCollection, SessionContext};
//! use roster_view::{GuardedNavigator, UsersDirectory};
//! use std::sync::Arc;
//!
//! async fn show_users(
//!     collection: Arc<dyn RemoteCollection>,
//!     notifier: Arc<dyn Notifier>,
//!     navigator: Arc<dyn Navigator>,
//!     confirm: Arc<dyn ConfirmationGate>,
//!     session: SessionContext,
//! ) {
//!     let navigator = Arc::new(GuardedNavigator::new(navigator, session.clone()));
//!     let mut directory = UsersDirectory::new(collection, session, notifier, navigator, confirm);
//!
//!     directory.mount().await;
//!     directory.set_search_term("bluth");
//!     for user in directory.visible().await {
//!         println!("{} {}", user.id, user.full_name());
//!     }
//! }
//! ```

mod directory;
mod edit;
mod error;
mod login;
pub mod messages;
mod mutation;
mod pagination;
mod projection;
mod router;
mod store;

// Public exports
pub use directory::{MountOutcome, UsersDirectory};
pub use edit::EditForm;
pub use error::{Result, ViewError};
pub use login::{LoginController, LoginForm, LoginOutcome, DEFAULT_REDIRECT_DELAY};
pub use mutation::{MutationCoordinator, MutationKey, MutationKind, MutationOutcome, MutationState};
pub use pagination::{page_buttons, PageButton, PageOutcome, PaginationController};
pub use projection::{project, FilterOption, SearchFilterState};
pub use router::{guard, GuardedNavigator};
pub use store::{PageStore, SharedPageStore};
