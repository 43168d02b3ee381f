//! Roster CLI
//!
//! Terminal front end for the Roster user directory: an interactive shell
//! plus one-shot commands for scripting.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod shell;
pub mod terminal;

pub use commands::Context;
pub use crate::config::RosterConfig;
pub use error::{CliError, Result};
pub use shell::Shell;
