//! CLI commands.

pub mod book;
pub mod directory;

use barber_booking_widget::{ConfigError, DirectoryError, SubmitOutcome};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend call failed.
    #[error("Backend error: {0}")]
    Directory(#[from] DirectoryError),

    /// A select does not offer the requested value.
    #[error("No {field} option with value {value:?}")]
    UnknownOption { field: &'static str, value: String },

    /// The booking was not confirmed.
    #[error("Booking not confirmed: {0:?}")]
    NotConfirmed(SubmitOutcome),
}
