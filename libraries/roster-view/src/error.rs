//! Error types for the presentation engine

use roster_core::RosterError;
use thiserror::Error;

/// Presentation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Server answered with a page count that excludes the requested page
    #[error("Page {page} is outside 1..={total_pages}")]
    PageOutOfRange { page: u32, total_pages: u32 },

    /// Remote call failed
    #[error(transparent)]
    Remote(#[from] RosterError),
}

/// Result type for presentation operations
pub type Result<T> = std::result::Result<T, ViewError>;
