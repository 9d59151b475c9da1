//! Error types for the row operations.

use perf_core::{ConfigError, StoreError};
use thiserror::Error;

/// Errors returned by row operations.
#[derive(Error, Debug)]
pub enum RowOpError {
    /// Transport or store fault. Never retried by the operation.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration the operation cannot run with.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
