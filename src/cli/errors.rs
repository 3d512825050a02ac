use std::process::ExitCode;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Input must be at least one entry.")]
    NoInput,

    #[error("Could not print version info: {0}")]
    Version(String),

    #[error(transparent)]
    Library(#[from] graphene_cli::Error),
}

impl AppError {
    /// Whether the usage text should follow the message.
    pub fn shows_usage(&self) -> bool {
        match self {
            AppError::MissingArgument { .. } | AppError::NoInput => true,
            AppError::Library(e) => e.is_configuration(),
            AppError::Version(_) => false,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.shows_usage() {
            ExitCode::from(2)
        } else {
            ExitCode::FAILURE
        }
    }
}
