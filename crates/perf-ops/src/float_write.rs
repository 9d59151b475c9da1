//! Random-float single-row writes.

use crate::error::RowOpError;
use crate::metrics::RowOpMetrics;
use crate::operation::RowOperation;
use perf_core::random::{random_key_now, random_value};
use perf_core::{Row, RowOpConfig, StoreClient};
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::info;

/// Build a randomly keyed row holding a random `f32`.
///
/// The row index plays no part; the key comes from `rng` and the clock.
pub(crate) fn random_row(rng: &mut StdRng, config: &RowOpConfig) -> Row {
    Row::new(
        random_key_now(rng),
        config.family_bytes(),
        config.qualifier_bytes(),
        random_value(rng),
    )
    .with_write_to_wal(config.write_to_wal)
}

/// Writes one random row per call, immediately.
pub struct FloatWriteOp<S> {
    store: S,
    config: RowOpConfig,
    rng: StdRng,
    metrics: RowOpMetrics,
}

impl<S: StoreClient> FloatWriteOp<S> {
    /// Create the operation.
    ///
    /// # Arguments
    ///
    /// * `store` - Client the rows are written through
    /// * `config` - Target table, column and durability flag
    /// * `rng` - Random source owned by this instance alone
    pub fn new(store: S, config: RowOpConfig, rng: StdRng) -> Result<Self, RowOpError> {
        config.validate()?;
        info!(
            "floatWrite targeting '{}' ({}:{}, write_to_wal={})",
            config.table, config.family, config.qualifier, config.write_to_wal
        );
        Ok(Self {
            store,
            config,
            rng,
            metrics: RowOpMetrics::default(),
        })
    }
}

impl<S: StoreClient> RowOperation for FloatWriteOp<S> {
    fn name(&self) -> &'static str {
        "floatWrite"
    }

    fn execute(&mut self, _i: i32) -> Result<(), RowOpError> {
        let row = random_row(&mut self.rng, &self.config);

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
