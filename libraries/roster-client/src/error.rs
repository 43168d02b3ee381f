//! Error types for the Roster HTTP client.

use roster_core::{RosterError, UserId};
use thiserror::Error;

/// Errors that can occur when talking to the directory API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed (invalid credentials)
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// User does not exist on the server
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// Invalid API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Avatar file not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Avatar file is not an image the directory accepts
    #[error("Unsupported avatar file: {0}")]
    UnsupportedAvatar(String),

    /// IO error while reading an avatar
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Classify a transport failure from reqwest.
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ClientError::ServerUnreachable(err.to_string())
        } else {
            ClientError::Request(err)
        }
    }
}

impl From<ClientError> for RosterError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::AuthFailed(msg) => RosterError::Auth(msg),
            ClientError::NotFound(id) => RosterError::NotFound(id),
            ClientError::ServerError { status, message } => RosterError::Server { status, message },
            ClientError::ServerUnreachable(msg) => RosterError::Network(msg),
            ClientError::Request(e) => match e.status() {
                Some(status) => RosterError::server(status.as_u16(), e.to_string()),
                None => RosterError::Network(e.to_string()),
            },
            // Unreadable body from a server that answered: reported as a bad gateway
            ClientError::ParseError(msg) => RosterError::server(502, msg),
            ClientError::InvalidUrl(msg) => RosterError::invalid_input(msg),
            ClientError::FileNotFound(path) => {
                RosterError::invalid_input(format!("File not found: {}", path))
            }
            ClientError::UnsupportedAvatar(path) => {
                RosterError::invalid_input(format!("Unsupported avatar file: {}", path))
            }
            ClientError::Io(e) => RosterError::invalid_input(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_to_core_taxonomy() {
        assert_eq!(
            RosterError::from(ClientError::AuthFailed("user not found".into())),
            RosterError::Auth("user not found".into())
        );
        assert_eq!(
            RosterError::from(ClientError::NotFound(UserId::new(23))),
            RosterError::NotFound(UserId::new(23))
        );
        assert!(RosterError::from(ClientError::ServerUnreachable("refused".into())).is_network());
        assert_eq!(
            RosterError::from(ClientError::ServerError {
                status: 503,
                message: "down".into()
            }),
            RosterError::server(503, "down")
        );
    }

    #[test]
    fn test_avatar_errors_are_invalid_input() {
        assert_eq!(
            RosterError::from(ClientError::UnsupportedAvatar("notes.txt".into())),
            RosterError::invalid_input("Unsupported avatar file: notes.txt")
        );
        assert_eq!(
            RosterError::from(ClientError::FileNotFound("/tmp/missing.png".into())),
            RosterError::invalid_input("File not found: /tmp/missing.png")
        );
    }
}
