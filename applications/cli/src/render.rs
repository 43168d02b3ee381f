//! Plain-text rendering of the list view

use roster_core::User;
use roster_view::PageButton;
use std::fmt::Write;

const EMPTY_PAGE: &str = "No users to show";

/// Users as an aligned table, in the order given
pub fn render_users(users: &[User]) -> String {
    if users.is_empty() {
        return format!("{EMPTY_PAGE}\n");
    }

    let id_width = users
        .iter()
        .map(|u| u.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max(2);
    let name_width = users
        .iter()
        .map(|u| u.full_name().chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::new();
    let _ = writeln!(out, "{:>id_width$}  {:<name_width$}  EMAIL", "ID", "NAME");
    for user in users {
        let _ = writeln!(
            out,
            "{:>id_width$}  {:<name_width$}  {}",
            user.id,
            user.full_name(),
            user.email
        );
    }
    out
}

/// Pager line, current page in brackets: `Pages: 1 [2]`
pub fn render_pager(buttons: &[PageButton]) -> String {
    let labels: Vec<String> = buttons
        .iter()
        .map(|b| {
            if b.current {
                format!("[{}]", b.number)
            } else {
                b.number.to_string()
            }
        })
        .collect();
    format!("Pages: {}", labels.join(" "))
}
