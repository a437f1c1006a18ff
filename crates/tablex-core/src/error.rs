//! Error types for table selection parameters

use thiserror::Error;

/// Errors raised while interpreting selection parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("invalid signal value {0}: expected 0 or 1")]
    InvalidSignal(u8),

    #[error("unknown wide-table policy '{0}'. Valid values: keep-all, anchored-tail")]
    UnknownWidePolicy(String),
}
