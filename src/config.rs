//! Run configuration
//!
//! Backend settings come from the environment (optionally seeded from a
//! `.env` file by the binary) and are validated once at startup. File
//! locations are resolved against a working directory.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable holding the backend API key
pub const API_KEY_VAR: &str = "GPT_KEY";

/// Environment variable holding the full chat-completions endpoint URL
pub const ENDPOINT_VAR: &str = "GPT_ENDPOINT";

/// Default file name of the table document
pub const TABLE_FILE: &str = "input.json";

/// Default file name of the parameters document
pub const PARAMS_FILE: &str = "inputData.json";

/// Default file name of the rendered fragment
pub const OUTPUT_FILE: &str = "output.html";

/// Validated backend settings
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl BackendConfig {
    /// Read and validate the backend settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read and validate the backend settings through `lookup`.
    ///
    /// Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVariable(name))
        };
        Ok(Self {
            api_key: required(API_KEY_VAR)?,
            endpoint: required(ENDPOINT_VAR)?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Locations of the run's input and output files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub table: PathBuf,
    pub params: PathBuf,
    pub output: PathBuf,
}

impl RunPaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            table: dir.join(TABLE_FILE),
            params: dir.join(PARAMS_FILE),
            output: dir.join(OUTPUT_FILE),
        }
    }
}
