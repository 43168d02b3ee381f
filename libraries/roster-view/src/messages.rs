//! User-facing texts for notifications, prompts and inline form errors.

pub const WELCOME: &str = "Welcome to User Management";
pub const FETCH_FAILED: &str = "Failed to fetch users. Please try again.";

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";
pub const DELETE_SUCCEEDED: &str = "User deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete user. Please try again.";

pub const UPDATE_SUCCEEDED: &str = "User updated successfully";
pub const UPDATE_FAILED: &str = "Failed to update user. Please try again.";
/// Inline error on the edit form
pub const UPDATE_FAILED_INLINE: &str = "Failed to update user";

pub const LOGIN_SUCCEEDED: &str = "Login Successful! Redirecting to Users List";
pub const LOGIN_FAILED: &str = "Invalid login credentials. Please try again.";
/// Inline error on the login form
pub const LOGIN_FAILED_INLINE: &str = "Invalid login credentials";

pub const LOGGED_OUT: &str = "Logged out successfully";
