//! Error handling for lexicalization runs
//!
//! Every hard failure of a run is one of these; [`crate::run`] collapses all
//! of them into the generic error fragment.

use std::path::PathBuf;

use thiserror::Error;

use tablex_agentic::LlmError;

/// Top-level run error
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Backend error: {0}")]
    Backend(#[from] LlmError),
}

/// Required backend settings are absent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVariable(&'static str),
}

/// Input documents could not be loaded
#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
