//! Core types for the perf-eval-ext row operations.
//!
//! This crate holds everything the row operations share but that is not an
//! operation itself:
//!
//! - [`codec`]: the fixed-width key and decimal value encodings used by the
//!   verification operations
//! - [`random`]: randomly keyed, randomly valued row material for the write
//!   throughput operations
//! - [`row`] and [`store`]: the single-column row model and the synchronous
//!   [`StoreClient`] abstraction every operation talks to
//! - [`config`]: the table/column constants and the write durability flag
//!
//! # Example
//!
//! ```rust
//! use perf_core::codec::{encode_key, encode_value};
//!
//! assert_eq!(&encode_key(-5), b"0000000005");
//! assert_eq!(encode_value(-5), b"-5".to_vec());
//! ```

pub mod codec;
pub mod config;
pub mod random;
pub mod row;
pub mod store;

// Re-exports for convenience
pub use codec::CodecError;
pub use config::{ConfigError, RowOpConfig};
pub use row::{Row, RowGet};
pub use store::{StoreClient, StoreError};
