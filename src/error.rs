//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, engine and serialization errors, and provides semantic
//! variants for configuration problems and per-item batch failures.
use std::path::PathBuf;

use thiserror::Error;

use crate::engine::EngineError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Input source {source_name} is not (yet) implemented")]
    UnsupportedInputMode { source_name: String },

    #[error("Can't read from file {path:?}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Analysis engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Analysis of input #{index} failed: {source}")]
    Analysis {
        index: usize,
        #[source]
        source: EngineError,
    },

    #[error("Could not convert result to JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not write file {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The output length is not the same as the input size: {results}:{inputs}")]
    BatchLengthMismatch { results: usize, inputs: usize },
}

impl Error {
    /// True for errors raised before any item was processed because the
    /// invocation itself is malformed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Configuration(_) | Error::MissingArgument { .. }
        )
    }
}
