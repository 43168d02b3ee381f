//! Users directory view
//!
//! Ties the page store, pagination, projection and mutations together into
//! the state behind the list screen.

use crate::edit::EditForm;
use crate::messages;
use crate::mutation::{MutationCoordinator, MutationOutcome};
use crate::pagination::{PageButton, PageOutcome, PaginationController};
use crate::projection::{project, FilterOption, SearchFilterState};
use crate::store::{PageStore, SharedPageStore};
use roster_core::{
    ConfirmationGate, Navigator, Notification, Notifier, RemoteCollection, Route, SessionContext,
    User, UserId,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of showing the list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    /// No session; the login view was requested instead
    RedirectedToLogin,

    /// The current page was (re)loaded
    Page(PageOutcome),
}

/// State behind the user list screen
pub struct UsersDirectory {
    session: SessionContext,
    store: SharedPageStore,
    pagination: PaginationController,
    mutations: MutationCoordinator,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    search: SearchFilterState,

    /// Welcome notification already shown
    welcomed: bool,
}

impl UsersDirectory {
    pub fn new(
        collection: Arc<dyn RemoteCollection>,
        session: SessionContext,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        confirm: Arc<dyn ConfirmationGate>,
    ) -> Self {
        let store = PageStore::shared();

        let pagination = PaginationController::new(
            Arc::clone(&collection),
            Arc::clone(&store),
            Arc::clone(&notifier),
        );
        let mutations = MutationCoordinator::new(
            collection,
            Arc::clone(&store),
            Arc::clone(&notifier),
            Arc::clone(&navigator),
            confirm,
        );

        Self {
            session,
            store,
            pagination,
            mutations,
            notifier,
            navigator,
            search: SearchFilterState::new(),
            welcomed: false,
        }
    }

    /// Show the list view
    ///
    /// Without a session this silently redirects to login. The first mount
    /// greets the user; every mount reloads the current page.
    pub async fn mount(&mut self) -> MountOutcome {
        if !self.session.is_authenticated() {
            debug!("Directory mounted without a session");
            self.navigator.navigate(Route::Login);
            return MountOutcome::RedirectedToLogin;
        }

        if !self.welcomed {
            self.notifier.notify(Notification::success(messages::WELCOME));
            self.welcomed = true;
        }

        MountOutcome::Page(self.pagination.reload().await)
    }

    /// Users of the loaded page matching the search state, in server order
    pub async fn visible(&self) -> Vec<User> {
        let store = self.store.read().await;
        project(store.records(), &self.search)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn search(&self) -> &SearchFilterState {
        &self.search
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search.term = term.into();
    }

    pub fn set_filter(&mut self, filter: FilterOption) {
        self.search.filter = filter;
    }

    /// Reset search term and filter
    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub async fn go_to_page(&self, page: u32) -> PageOutcome {
        self.pagination.go_to_page(page).await
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pagination
    }

    pub async fn page_buttons(&self) -> Vec<PageButton> {
        self.pagination.page_buttons().await
    }

    pub async fn current_page(&self) -> u32 {
        self.store.read().await.current_page()
    }

    pub async fn total_pages(&self) -> Option<u32> {
        self.store.read().await.total_pages()
    }

    /// Snapshot of the page store
    pub async fn store_snapshot(&self) -> PageStore {
        self.store.read().await.clone()
    }

    pub fn mutations(&self) -> &MutationCoordinator {
        &self.mutations
    }

    /// Confirm and delete a user
    pub async fn delete(&self, id: UserId) -> MutationOutcome {
        self.mutations.delete(id).await
    }

    /// Open the edit view for a loaded user
    ///
    /// Returns `false` (and navigates nowhere) when the user is not on the
    /// loaded page.
    pub async fn edit(&self, id: UserId) -> bool {
        let selected = self.store.read().await.get(id).cloned();
        match selected {
            Some(user) => {
                self.navigator.navigate(Route::EditUser(Box::new(user)));
                true
            }
            None => {
                debug!(user_id = %id, "Edit requested for a user that is not loaded");
                false
            }
        }
    }

    /// Submit an edit form
    pub async fn update(&self, form: &mut EditForm) -> MutationOutcome {
        self.mutations.update(form).await
    }

    /// Leave the edit view without saving
    pub fn cancel_edit(&self) {
        self.notifier.dismiss_all();
        self.navigator.navigate(Route::Users);
    }

    /// End the session and return to login
    pub fn logout(&self) {
        self.notifier.notify(Notification::success(messages::LOGGED_OUT));
        self.session.clear();
        info!("Logged out");
        self.navigator.navigate(Route::Login);
    }
}
