//! Benchmark row operations for a distributed key-value store.
//!
//! A host benchmarking harness registers the commands in [`COMMANDS`],
//! builds one operation per worker with [`build_operation`], and calls
//! `execute(row)` for every row of the worker's range. Thread pools, row
//! partitioning, table setup and the harness command line all live in the
//! host.
//!
//! ```rust
//! use perf_eval_ext::perf_core::RowOpConfig;
//! use perf_eval_ext::perf_memstore::MemoryStore;
//! use perf_eval_ext::{build_operation, OperationKind};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let kind: OperationKind = "batchWrite".parse().unwrap();
//! let mut op = build_operation(kind, store, RowOpConfig::default(), StdRng::from_entropy()).unwrap();
//! for i in 0..10 {
//!     op.execute(i).unwrap();
//! }
//! // batched rows are only written when the driver flushes at the end
//! op.flush().unwrap();
//! ```

pub mod registry;

pub use perf_core;
pub use perf_memstore;
pub use perf_ops;

pub use perf_ops::{RowOpError, RowOperation};
pub use registry::{build_operation, CommandDescriptor, OperationKind, RegistryError, COMMANDS};
