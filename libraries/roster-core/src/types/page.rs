/// Paginated collection types
use serde::{Deserialize, Serialize};

use super::User;

/// One server-paginated batch of users plus the total page count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Page {
    /// Users in server order
    pub records: Vec<User>,

    /// Total number of pages the server reports
    pub total_pages: u32,
}

impl Page {
    pub fn new(records: Vec<User>, total_pages: u32) -> Self {
        Self {
            records,
            total_pages,
        }
    }
}
