//! Deterministic write/read pairs for read-after-write verification.
//!
//! Row `i` is keyed by [`encode_key`] and holds [`encode_value`]. Running
//! [`VerificationWriteOp`] over a range and later [`VerificationReadOp`] over
//! the same range checks that every row came back intact.

use crate::error::RowOpError;
use crate::metrics::RowOpMetrics;
use crate::operation::RowOperation;
use crate::report::{MismatchInfo, VerificationReport};
use perf_core::codec::{encode_key, encode_value};
use perf_core::{Row, RowGet, RowOpConfig, StoreClient};
use std::time::Instant;
use tracing::{info, warn};

/// Writes the fixed key/value pair for each row index.
pub struct VerificationWriteOp<S> {
    store: S,
    config: RowOpConfig,
    metrics: RowOpMetrics,
}

impl<S: StoreClient> VerificationWriteOp<S> {
    pub fn new(store: S, config: RowOpConfig) -> Result<Self, RowOpError> {
        config.validate()?;
        info!(
            "verificationWrite targeting '{}' ({}:{}, write_to_wal={})",
            config.table, config.family, config.qualifier, config.write_to_wal
        );
        Ok(Self {
            store,
            config,
            metrics: RowOpMetrics::default(),
        })
    }
}

impl<S: StoreClient> RowOperation for VerificationWriteOp<S> {
    fn name(&self) -> &'static str {
        "verificationWrite"
    }

    fn execute(&mut self, i: i32) -> Result<(), RowOpError> {
        let row = Row::new(
            encode_key(i),
            self.config.family_bytes(),
            self.config.qualifier_bytes(),
            encode_value(i),
        )
        .with_write_to_wal(self.config.write_to_wal);

        let start = Instant::now();
        let result = self.store.put(&self.config.table, &row);
        self.metrics.store_duration += start.elapsed();
        result?;

        self.metrics.rows_written += 1;
        self.metrics.rows_executed += 1;
        Ok(())
    }

    fn metrics(&self) -> &RowOpMetrics {
        &self.metrics
    }
}

/// Reads the fixed key for each row index and compares the stored value
/// byte for byte with the expected encoding.
///
/// A wrong or absent value is logged and recorded in the
/// [`VerificationReport`]; it does not fail the call.
pub struct VerificationReadOp<S> {
    store: S,
    config: RowOpConfig,
    report: VerificationReport,
    metrics: RowOpMetrics,
}

impl<S: StoreClient> VerificationReadOp<S> {
    pub fn new(store: S, config: RowOpConfig) -> Result<Self, RowOpError> {
        config.validate()?;
        info!(
            "verificationRead targeting '{}' ({}:{})",
            config.table, config.family, config.qualifier
        );
        Ok(Self {
            store,
            config,
            report: VerificationReport::default(),
            metrics: RowOpMetrics::default(),
        })
    }

    pub fn report(&self) -> &VerificationReport {
        &self.report
    }

    /// Hand over the report collected so far and start a fresh one.
    pub fn take_report(&mut self) -> VerificationReport {
        std::mem::take(&mut self.report)
    }
}

impl<S: StoreClient> RowOperation for VerificationReadOp<S> {
    fn name(&self) -> &'static str {
        "verificationRead"
    }

    fn execute(&mut self, i: i32) -> Result<(), RowOpError> {
        let get = RowGet::new(
            encode_key(i),
            self.config.family_bytes(),
            self.config.qualifier_bytes(),
        );

        let start = Instant::now();
        let result = self.store.get(&self.config.table, &get);
        self.metrics.store_duration += start.elapsed();
        let actual = result?;
        self.metrics.rows_read += 1;

        let expected = encode_value(i);
        if actual.as_deref() == Some(expected.as_slice()) {
            self.report.record_match();
        } else {
            let info = MismatchInfo {
                index: i,
                key: get.key,
                expected,
                actual,
            };
            warn!(
                key = %info.key_string(),
                missing = info.is_missing(),
                "Row {} not expected",
                info.key_string()
            );
            self.report.record_mismatch(info);
        }

        self.metrics.rows_executed += 1;
        Ok(())
    }

    fn metrics(&self) -> &RowOpMetrics {
        &self.metrics
    }

    fn verification_report(&self) -> Option<&VerificationReport> {
        Some(&self.report)
    }
}
