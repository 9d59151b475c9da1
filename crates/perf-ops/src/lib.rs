//! Row operations for write and verification load tests.
//!
//! A host driver owns the worker threads and the row range each worker
//! covers. For every row index it calls [`RowOperation::execute`] on an
//! operation instance that belongs to that worker alone. The operations
//! here only decide what a single row looks like and which store request it
//! turns into:
//!
//! | Operation | Per call |
//! |-----------|----------|
//! | [`FloatWriteOp`] | one put of a random key holding a random `f32` |
//! | [`BatchWriteOp`] | the same row, buffered; one batched put per threshold crossing |
//! | [`VerificationWriteOp`] | one put of the fixed key/value pair for the index |
//! | [`VerificationReadOp`] | one get of the fixed key, compared with the expected value |
//!
//! # Example
//!
//! ```rust
//! use perf_core::RowOpConfig;
//! use perf_memstore::MemoryStore;
//! use perf_ops::{RowOperation, VerificationReadOp, VerificationWriteOp};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let config = RowOpConfig::default();
//!
//! let mut write = VerificationWriteOp::new(store.clone(), config.clone()).unwrap();
//! let mut read = VerificationReadOp::new(store, config).unwrap();
//! for i in 0..10 {
//!     write.execute(i).unwrap();
//!     read.execute(i).unwrap();
//! }
//! assert!(read.report().is_success());
//! ```

pub mod args;
pub mod batch_write;
pub mod error;
pub mod float_write;
pub mod metrics;
pub mod operation;
pub mod report;
pub mod verification;

pub use args::RowOpArgs;
pub use batch_write::BatchWriteOp;
pub use error::RowOpError;
pub use float_write::FloatWriteOp;
pub use metrics::RowOpMetrics;
pub use operation::RowOperation;
pub use report::{MismatchInfo, VerificationReport};
pub use verification::{VerificationReadOp, VerificationWriteOp};
