//! Row operation integration tests.
//!
//! These tests drive registered operations the way a host harness does:
//! build one instance per worker, call `execute` for each row in the
//! worker's range, then flush. Everything runs against `MemoryStore`.

mod batch_write;
mod verification;
