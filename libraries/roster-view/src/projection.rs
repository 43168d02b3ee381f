//! View projection
//!
//! Computes the visible users from the loaded page, a search term and a
//! filter selector. Only the loaded page is searched; the API has no
//! cross-page search.

use roster_core::User;
use serde::{Deserialize, Serialize};

/// Filter selector
///
/// Extension point for predicates beyond the search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterOption {
    /// No additional predicate
    #[default]
    All,
}

impl FilterOption {
    /// Whether the user passes this filter
    pub fn matches(self, _user: &User) -> bool {
        match self {
            FilterOption::All => true,
        }
    }
}

/// Search and filter input of the list view
///
/// Ephemeral UI state; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchFilterState {
    pub term: String,
    pub filter: FilterOption,
}

impl SearchFilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            filter: FilterOption::All,
        }
    }

    /// Reset term and filter together
    pub fn clear(&mut self) {
        self.term.clear();
        self.filter = FilterOption::All;
    }

    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty() && self.filter == FilterOption::All
    }
}

/// Ordered subsequence of `records` matching the search state
///
/// A user matches when the term occurs case-insensitively in the first name,
/// last name or email. A blank term matches everyone.
pub fn project<'a>(records: &'a [User], search: &SearchFilterState) -> Vec<&'a User> {
    let needle = search.term.trim().to_lowercase();

    records
        .iter()
        .filter(|user| search.filter.matches(user))
        .filter(|user| needle.is_empty() || matches_term(user, &needle))
        .collect()
}

fn matches_term(user: &User, needle: &str) -> bool {
    [&user.first_name, &user.last_name, &user.email]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::UserId;

    fn records() -> Vec<User> {
        vec![
            User::new(UserId::new(1), "George", "Bluth", "george@x.com"),
            User::new(UserId::new(2), "Lucille", "Bluth", "lucille@x.com"),
            User::new(UserId::new(7), "Michael", "Lawson", "michael.lawson@reqres.in"),
        ]
    }

    fn ids(users: &[&User]) -> Vec<i64> {
        users.iter().map(|u| u.id.as_i64()).collect()
    }

    #[test]
    fn empty_term_matches_all() {
        let records = records();
        let visible = project(&records, &SearchFilterState::new());
        assert_eq!(ids(&visible), vec![1, 2, 7]);
    }

    #[test]
    fn last_name_case_insensitive() {
        let records = records();
        let visible = project(&records, &SearchFilterState::with_term("bluth"));
        assert_eq!(ids(&visible), vec![1, 2]);
    }

    #[test]
    fn first_name_match() {
        let records = records();
        let visible = project(&records, &SearchFilterState::with_term("lucille"));
        assert_eq!(ids(&visible), vec![2]);
    }

    #[test]
    fn email_match() {
        let records = records();
        let visible = project(&records, &SearchFilterState::with_term("REQRES.IN"));
        assert_eq!(ids(&visible), vec![7]);
    }

    #[test]
    fn whitespace_term_matches_all() {
        let records = records();
        let visible = project(&records, &SearchFilterState::with_term("   "));
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn no_match() {
        let records = records();
        assert!(project(&records, &SearchFilterState::with_term("tobias")).is_empty());
    }

    #[test]
    fn clear_resets_term_and_filter() {
        let mut search = SearchFilterState::with_term("bluth");
        assert!(!search.is_empty());

        search.clear();
        assert!(search.is_empty());
        assert_eq!(search.filter, FilterOption::All);
    }
}
