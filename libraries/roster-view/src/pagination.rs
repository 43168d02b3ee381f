//! Pagination controller
//!
//! Maps a requested page number to a remote fetch and replaces the store on
//! success. Out-of-range requests never reach the remote side.

use crate::error::ViewError;
use crate::messages;
use crate::store::SharedPageStore;
use roster_core::{Notification, Notifier, RemoteCollection};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of a page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Page fetched and stored
    Loaded { page: u32, records: usize },

    /// Page outside `[1, total_pages]`; nothing fetched
    Rejected { page: u32 },

    /// Fetch failed; the previous page stays displayed
    Failed(ViewError),
}

/// One page control in the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// 1-based page number (also the label)
    pub number: u32,

    /// Whether this is the page currently displayed
    pub current: bool,
}

/// Page controls for every page, `1..=total_pages`, without windowing
///
/// Before the total is known a single control for page 1 is shown.
pub fn page_buttons(current_page: u32, total_pages: Option<u32>) -> Vec<PageButton> {
    (1..=total_pages.unwrap_or(1).max(1))
        .map(|number| PageButton {
            number,
            current: number == current_page,
        })
        .collect()
}

/// Range-guarded page navigation
pub struct PaginationController {
    collection: Arc<dyn RemoteCollection>,
    store: SharedPageStore,
    notifier: Arc<dyn Notifier>,

    /// Page of the most recent request, for spotting out-of-order arrivals
    latest_request: AtomicU32,
}

impl PaginationController {
    pub fn new(
        collection: Arc<dyn RemoteCollection>,
        store: SharedPageStore,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            collection,
            store,
            notifier,
            latest_request: AtomicU32::new(0),
        }
    }

    /// Fetch and display `page`
    ///
    /// Pages below 1 or beyond the known total are ignored. Responses are
    /// applied in arrival order; a response for an older request that lands
    /// after a newer one still replaces the page.
    pub async fn go_to_page(&self, page: u32) -> PageOutcome {
        if !self.store.read().await.accepts_page(page) {
            debug!(page, "Ignoring out-of-range page request");
            return PageOutcome::Rejected { page };
        }

        self.latest_request.store(page, Ordering::SeqCst);
        debug!(page, "Requesting page");

        let fetched = match self.collection.fetch_page(page).await {
            Ok(fetched) => fetched,
            Err(e) => {
                warn!(page, error = %e, "Failed to fetch page");
                self.notifier.notify(Notification::error(messages::FETCH_FAILED));
                return PageOutcome::Failed(e.into());
            }
        };

        let latest = self.latest_request.load(Ordering::SeqCst);
        if latest != page {
            warn!(
                page,
                latest, "Page response arrived after a newer request; applying it anyway"
            );
        }

        let records = fetched.records.len();
        let replaced = self
            .store
            .write()
            .await
            .replace_page(fetched.records, fetched.total_pages, page);

        match replaced {
            Ok(()) => {
                debug!(page, records, total_pages = fetched.total_pages, "Page loaded");
                PageOutcome::Loaded { page, records }
            }
            Err(e) => {
                warn!(page, error = %e, "Discarding page response");
                self.notifier.notify(Notification::error(messages::FETCH_FAILED));
                PageOutcome::Failed(e)
            }
        }
    }

    /// Re-fetch the current page
    pub async fn reload(&self) -> PageOutcome {
        let current = self.store.read().await.current_page();
        self.go_to_page(current).await
    }

    /// Step to the following page, if there is one
    pub async fn next_page(&self) -> PageOutcome {
        let current = self.store.read().await.current_page();
        self.go_to_page(current.saturating_add(1)).await
    }

    /// Step to the preceding page, if there is one
    pub async fn previous_page(&self) -> PageOutcome {
        let current = self.store.read().await.current_page();
        self.go_to_page(current.saturating_sub(1)).await
    }

    /// Page controls for the current store state
    pub async fn page_buttons(&self) -> Vec<PageButton> {
        let store = self.store.read().await;
        page_buttons(store.current_page(), store.total_pages())
    }
}
