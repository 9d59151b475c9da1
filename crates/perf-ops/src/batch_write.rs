//! Random-float writes grouped into batched puts.

use crate::error::RowOpError;
use crate::float_write::random_row;
use crate::metrics::RowOpMetrics;
use crate::operation::RowOperation;
use perf_core::{Row, RowOpConfig, StoreClient};
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::{debug, info};

/// Buffers one random row per call and writes the buffer as a single batch
/// once it holds more than `batch_threshold` rows.
///
/// The comparison is strict, so with the default threshold of 5000 every
/// batch carries 5001 rows.
///
/// Rows buffered after the last batch stay in memory until the driver calls
/// [`RowOperation::flush`]. Dropping the operation discards them.
pub struct BatchWriteOp<S> {
    store: S,
    config: RowOpConfig,
    rng: StdRng,
    buffer: Vec<Row>,
    metrics: RowOpMetrics,
}

impl<S: StoreClient> BatchWriteOp<S> {
    pub fn new(store: S, config: RowOpConfig, rng: StdRng) -> Result<Self, RowOpError> {
        config.validate()?;
        info!(
            "batchWrite targeting '{}' ({}:{}, write_to_wal={}, batch threshold {})",
            config.table,
            config.family,
            config.qualifier,
            config.write_to_wal,
            config.batch_threshold
        );
        Ok(Self {
            store,
            buffer: Vec::with_capacity(config.batch_threshold.saturating_add(1)),
            config,
            rng,
            metrics: RowOpMetrics::default(),
        })
    }

    /// Rows buffered and not yet written.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    pub fn batch_threshold(&self) -> usize {
        self.config.batch_threshold
    }

    /// Write the whole buffer as one batch. The buffer is kept if the store
    /// rejects the batch.
    fn write_buffer(&mut self) -> Result<(), RowOpError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let start = Instant::now();
        let result = self.store.put_batch(&self.config.table, &self.buffer);
        self.metrics.store_duration += start.elapsed();
        result?;

        debug!(
            "Flushed batch of {} rows to '{}'",
            self.buffer.len(),
            self.config.table
        );
        self.metrics.rows_written += self.buffer.len() as u64;
        self.metrics.batch_count += 1;
        self.buffer.clear();
        Ok(())
    }
}

impl<S: StoreClient> RowOperation for BatchWriteOp<S> {
    fn name(&self) -> &'static str {
        "batchWrite"
    }

    fn execute(&mut self, _i: i32) -> Result<(), RowOpError> {
        let row = random_row(&mut self.rng, &self.config);
        self.buffer.push(row);

        if self.buffer.len() > self.config.batch_threshold {
            self.write_buffer()?;
        }

        self.metrics.rows_executed += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), RowOpError> {
        self.write_buffer()
    }

    fn metrics(&self) -> &RowOpMetrics {
        &self.metrics
    }
}
