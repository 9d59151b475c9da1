//! Store client abstraction.
//!
//! Operations issue every request through [`StoreClient`]. Calls are
//! synchronous and block until the store answers; timeouts belong to the
//! client implementation. Nothing in this workspace retries a failed call.

use crate::row::{Row, RowGet};
use thiserror::Error;

/// Transport or store faults surfaced by a [`StoreClient`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// Connection to the store was lost or could not be established.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The store rejected the request.
    #[error("Server error: {0}")]
    Server(String),

    /// At least one row of a batched write failed, so the whole batch failed.
    #[error("Batch rejected: {failed} of {total} rows failed")]
    BatchRejected { failed: usize, total: usize },

    /// Underlying I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Synchronous client for a table-oriented key-value store.
///
/// Implementations are either owned by a single worker or internally
/// thread-safe.
pub trait StoreClient: Send + Sync {
    /// Write one row.
    fn put(&self, table: &str, row: &Row) -> Result<(), StoreError>;

    /// Write all rows as one request. Fails as a whole if any row fails.
    fn put_batch(&self, table: &str, rows: &[Row]) -> Result<(), StoreError>;

    /// Read one column, returning `None` when the row or column is absent.
    fn get(&self, table: &str, get: &RowGet) -> Result<Option<Vec<u8>>, StoreError>;
}

impl<S: StoreClient + ?Sized> StoreClient for std::sync::Arc<S> {
    fn put(&self, table: &str, row: &Row) -> Result<(), StoreError> {
        (**self).put(table, row)
    }

    fn put_batch(&self, table: &str, rows: &[Row]) -> Result<(), StoreError> {
        (**self).put_batch(table, rows)
    }

    fn get(&self, table: &str, get: &RowGet) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(table, get)
    }
}
