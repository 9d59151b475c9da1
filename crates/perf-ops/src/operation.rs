//! The contract between a host driver and a row operation.

use crate::error::RowOpError;
use crate::metrics::RowOpMetrics;
use crate::report::VerificationReport;

/// One kind of per-row load, instantiated once per worker.
///
/// Instances share no state with each other, so a driver may move each one
/// to its own thread without locking.
pub trait RowOperation: Send {
    /// Command name the operation is registered under.
    fn name(&self) -> &'static str;

    /// Issue the request(s) for row `i`.
    ///
    /// Store faults are returned as-is; nothing is retried.
    fn execute(&mut self, i: i32) -> Result<(), RowOpError>;

    /// Write out anything still held by the operation.
    ///
    /// Operations never do this on their own at the end of a run. A driver
    /// that skips this call loses whatever was still buffered.
    fn flush(&mut self) -> Result<(), RowOpError> {
        Ok(())
    }

    fn metrics(&self) -> &RowOpMetrics;

    /// Comparison results, for operations that verify what they read.
    fn verification_report(&self) -> Option<&VerificationReport> {
        None
    }
}
