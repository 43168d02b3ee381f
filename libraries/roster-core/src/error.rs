/// Core error types for Roster
use thiserror::Error;
use crate::types::UserId;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
///
/// Every remote failure is expressed through this taxonomy before it reaches the
/// presentation layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Login rejected (bad credentials)
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Transport-level failure (connection refused, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Mutation target does not exist remotely
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RosterError {
    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a server error
    pub fn server(status: u16, msg: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: msg.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether the failure happened before any server answered.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
