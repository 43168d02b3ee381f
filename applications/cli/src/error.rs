/// CLI error types
use roster_client::ClientError;
use roster_core::RosterError;
use roster_view::ViewError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not logged in (run `roster login` or set ROSTER_TOKEN)")]
    NotLoggedIn,

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    Remote(#[from] RosterError),

    #[error("{0}")]
    View(#[from] ViewError),

    #[error("Unknown command: {0} (type `help`)")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing required fields: {0}")]
    MissingFields(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
