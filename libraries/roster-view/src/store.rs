//! Page store
//!
//! Holds the currently loaded page of users plus pagination metadata.
//! Pages are replaced wholesale; single records are removed or updated only
//! after the remote side confirmed the mutation.

use crate::error::{Result, ViewError};
use roster_core::{User, UserFields, UserId};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Store shared between the pagination controller, the mutation coordinator
/// and the directory view.
///
/// The lock is only taken for the in-memory update, never across a remote call.
pub type SharedPageStore = Arc<RwLock<PageStore>>;

/// The currently loaded page
///
/// Invariants:
/// - `records` is always the last successfully fetched page, never a mix of two
/// - `current_page <= total_pages` once the total is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStore {
    /// Users in server order
    records: Vec<User>,

    /// 1-based page the records belong to
    current_page: u32,

    /// Total page count, unknown until the first successful fetch
    total_pages: Option<u32>,
}

impl PageStore {
    /// Create an empty store positioned on page 1
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            current_page: 1,
            total_pages: None,
        }
    }

    /// Create an empty store behind a shared lock
    pub fn shared() -> SharedPageStore {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Records of the loaded page, in server order
    pub fn records(&self) -> &[User] {
        &self.records
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Look up a loaded record
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.records.iter().find(|user| user.id == id)
    }

    /// Whether `page` may be requested: at least 1 and, once the total is
    /// known, not beyond it
    pub fn accepts_page(&self, page: u32) -> bool {
        page >= 1 && !matches!(self.total_pages, Some(total) if page > total)
    }

    /// Replace the loaded page wholesale
    ///
    /// A reported total of 0 (empty collection) counts as one page. A total
    /// that excludes `page` is rejected and leaves the store untouched.
    pub fn replace_page(&mut self, records: Vec<User>, total_pages: u32, page: u32) -> Result<()> {
        let total_pages = total_pages.max(1);
        if page == 0 || page > total_pages {
            return Err(ViewError::PageOutOfRange { page, total_pages });
        }

        self.records = records;
        self.total_pages = Some(total_pages);
        self.current_page = page;
        Ok(())
    }

    /// Remove a record by identity
    ///
    /// Returns whether a record was removed; an absent id is a no-op.
    pub fn remove_record(&mut self, id: UserId) -> bool {
        let before = self.records.len();
        self.records.retain(|user| user.id != id);
        self.records.len() != before
    }

    /// Overwrite the fields of a record in place
    ///
    /// Returns whether a record was updated; an absent id is a no-op.
    pub fn update_record(&mut self, id: UserId, fields: &UserFields) -> bool {
        match self.records.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.apply(fields);
                true
            }
            None => false,
        }
    }
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new()
    }
}
