//! Per-operation counters.

use std::time::Duration;

/// Counters kept by every row operation instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowOpMetrics {
    /// Calls to `execute` that returned successfully.
    pub rows_executed: u64,
    /// Rows acknowledged by the store.
    pub rows_written: u64,
    /// Rows read back from the store.
    pub rows_read: u64,
    /// Batched writes issued.
    pub batch_count: u64,
    /// Time spent blocked on store requests.
    pub store_duration: Duration,
}

impl RowOpMetrics {
    /// Executed rows per second of store time.
    pub fn rows_per_second(&self) -> f64 {
        if self.store_duration.as_secs_f64() > 0.0 {
            self.rows_executed as f64 / self.store_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_per_second() {
        let metrics = RowOpMetrics {
            rows_executed: 1000,
            store_duration: Duration::from_secs(10),
            ..Default::default()
        };
        assert_eq!(metrics.rows_per_second(), 100.0);
    }

    #[test]
    fn test_rows_per_second_without_store_time() {
        let metrics = RowOpMetrics {
            rows_executed: 5,
            ..Default::default()
        };
        assert_eq!(metrics.rows_per_second(), 0.0);
    }
}
