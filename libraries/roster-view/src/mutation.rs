//! Mutation coordinator
//!
//! Runs delete and update against the remote collection and reconciles the
//! page store only after the remote side confirmed. There is no optimistic
//! removal: a failed mutation leaves the store exactly as it was.
//!
//! Each mutation key `(kind, id)` follows:
//!
//! ```text
//! Idle ──► Pending ──► Committed
//!   ▲         │
//!   │         └──────► Failed
//!   └── declined / dropped
//! ```
//!
//! While a key is `Pending` a second submission of the same action is refused.

use crate::edit::EditForm;
use crate::messages;
use crate::store::SharedPageStore;
use roster_core::{
    ConfirmationGate, Navigator, Notification, Notifier, RemoteCollection, RosterError, Route,
    UserId,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Kind of mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Delete,
    Update,
}

/// Identifies one user action for duplicate suppression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MutationKey {
    pub kind: MutationKind,
    pub id: UserId,
}

impl MutationKey {
    pub fn delete(id: UserId) -> Self {
        Self {
            kind: MutationKind::Delete,
            id,
        }
    }

    pub fn update(id: UserId) -> Self {
        Self {
            kind: MutationKind::Update,
            id,
        }
    }
}

/// State of the latest invocation of a mutation key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationState {
    /// Nothing in flight
    #[default]
    Idle,

    /// Remote call in flight
    Pending,

    /// Remote side confirmed, store reconciled
    Committed,

    /// Remote call failed, store untouched
    Failed,
}

/// Result of one mutation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Confirmed remotely and reconciled locally
    Committed,

    /// Remote call failed
    Failed(RosterError),

    /// User answered "no" at the confirmation gate
    Declined,

    /// Same action already in flight; nothing sent
    AlreadyPending,
}

type StateMap = Arc<Mutex<HashMap<MutationKey, MutationState>>>;

/// Marks a key `Pending` for as long as it lives.
///
/// Dropping it unsettled (declined, or the future was dropped mid-flight)
/// returns the key to `Idle`.
struct PendingGuard {
    states: StateMap,
    key: MutationKey,
    settled: bool,
}

impl PendingGuard {
    fn settle(mut self, state: MutationState) {
        set_state(&self.states, self.key, state);
        self.settled = true;
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if !self.settled {
            set_state(&self.states, self.key, MutationState::Idle);
        }
    }
}

fn set_state(states: &StateMap, key: MutationKey, state: MutationState) {
    states
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key, state);
}

/// Confirmed delete/update with store reconciliation
pub struct MutationCoordinator {
    collection: Arc<dyn RemoteCollection>,
    store: SharedPageStore,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    confirm: Arc<dyn ConfirmationGate>,
    states: StateMap,
}

impl MutationCoordinator {
    pub fn new(
        collection: Arc<dyn RemoteCollection>,
        store: SharedPageStore,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        confirm: Arc<dyn ConfirmationGate>,
    ) -> Self {
        Self {
            collection,
            store,
            notifier,
            navigator,
            confirm,
            states: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// State of the latest invocation of `key`
    pub fn state(&self, key: MutationKey) -> MutationState {
        self.states
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .copied()
            .unwrap_or_default()
    }

    pub fn is_pending(&self, key: MutationKey) -> bool {
        self.state(key) == MutationState::Pending
    }

    /// Move `key` to `Pending` unless it already is
    fn begin(&self, key: MutationKey) -> Option<PendingGuard> {
        let mut states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        if states.get(&key) == Some(&MutationState::Pending) {
            return None;
        }
        states.insert(key, MutationState::Pending);

        Some(PendingGuard {
            states: Arc::clone(&self.states),
            key,
            settled: false,
        })
    }

    /// Delete a user after an explicit yes from the confirmation gate
    ///
    /// The record disappears from the store only once the remote delete
    /// succeeded.
    pub async fn delete(&self, id: UserId) -> MutationOutcome {
        let Some(guard) = self.begin(MutationKey::delete(id)) else {
            debug!(user_id = %id, "Delete already in flight");
            return MutationOutcome::AlreadyPending;
        };

        if !self.confirm.confirm(messages::DELETE_PROMPT).await {
            debug!(user_id = %id, "Delete declined");
            drop(guard);
            return MutationOutcome::Declined;
        }

        match self.collection.delete_record(id).await {
            Ok(()) => {
                let removed = self.store.write().await.remove_record(id);
                info!(user_id = %id, removed, "User deleted");
                self.notifier
                    .notify(Notification::success(messages::DELETE_SUCCEEDED));
                guard.settle(MutationState::Committed);
                MutationOutcome::Committed
            }
            Err(e) => {
                warn!(user_id = %id, error = %e, "Delete failed");
                self.notifier.notify(Notification::error(messages::DELETE_FAILED));
                guard.settle(MutationState::Failed);
                MutationOutcome::Failed(e)
            }
        }
    }

    /// Submit an edit form
    ///
    /// On success the loaded record is updated in place and the list view is
    /// shown again. On failure the form keeps the user's input and carries an
    /// inline error.
    pub async fn update(&self, form: &mut EditForm) -> MutationOutcome {
        let id = form.id();
        let Some(guard) = self.begin(MutationKey::update(id)) else {
            debug!(user_id = %id, "Update already in flight");
            return MutationOutcome::AlreadyPending;
        };

        form.clear_error();
        let fields = form.fields();

        match self.collection.update_record(id, &fields).await {
            Ok(confirmed) => {
                let reconciled = self.store.write().await.update_record(id, &confirmed);
                info!(user_id = %id, reconciled, "User updated");
                self.notifier
                    .notify(Notification::success(messages::UPDATE_SUCCEEDED));
                guard.settle(MutationState::Committed);
                self.navigator.navigate(Route::Users);
                MutationOutcome::Committed
            }
            Err(e) => {
                warn!(user_id = %id, error = %e, "Update failed");
                self.notifier.notify(Notification::error(messages::UPDATE_FAILED));
                form.set_error(messages::UPDATE_FAILED_INLINE);
                guard.settle(MutationState::Failed);
                MutationOutcome::Failed(e)
            }
        }
    }
}
