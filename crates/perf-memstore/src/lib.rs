//! In-memory [`StoreClient`] for exercising row operations without a cluster.
//!
//! `MemoryStore` keeps one cell map per table, records every request it
//! serves and can be told to fail a class of requests, which is how the
//! operations' error propagation is tested.

use perf_core::{Row, RowGet, StoreClient, StoreError};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};
use tracing::trace;

/// Cell address within a table: (row key, family, qualifier).
type CellKey = (Vec<u8>, Vec<u8>, Vec<u8>);

/// Request classes that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fault {
    /// Single-row writes fail with a connection error.
    Put,
    /// Batched writes are rejected as a whole.
    PutBatch,
    /// Reads fail with a connection error.
    Get,
}

/// Counters for the requests a [`MemoryStore`] has served.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Successful single-row writes.
    pub puts: u64,
    /// Row count of each successful batched write, in order.
    pub batches: Vec<usize>,
    /// Reads served, hits and misses alike.
    pub gets: u64,
    /// Rows written with the write-ahead log disabled.
    pub wal_skipped: u64,
    /// Requests failed by an injected fault.
    pub failed: u64,
}

#[derive(Default)]
struct Inner {
    tables: HashMap<String, BTreeMap<CellKey, Vec<u8>>>,
    faults: HashSet<Fault>,
    stats: StoreStats,
}

/// Thread-safe in-memory store.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent request of the given class fail.
    pub fn inject_fault(&self, fault: Fault) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.faults.insert(fault);
        }
    }

    /// Stop failing requests.
    pub fn clear_faults(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.faults.clear();
        }
    }

    /// Snapshot of the request counters.
    pub fn stats(&self) -> StoreStats {
        self.inner
            .lock()
            .map(|inner| inner.stats.clone())
            .unwrap_or_default()
    }

    /// Number of cells stored in a table.
    pub fn cell_count(&self, table: &str) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.tables.get(table).map_or(0, BTreeMap::len))
            .unwrap_or(0)
    }

    /// All cells of a table in key order, as (row key, value) pairs.
    pub fn cells(&self, table: &str) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.inner
            .lock()
            .map(|inner| {
                inner
                    .tables
                    .get(table)
                    .map(|cells| {
                        cells
                            .iter()
                            .map(|((key, _, _), value)| (key.clone(), value.clone()))
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Server("memory store lock poisoned".to_string()))
    }
}

impl Inner {
    fn check(&mut self, fault: Fault) -> Result<(), StoreError> {
        if self.faults.contains(&fault) {
            self.stats.failed += 1;
            return Err(StoreError::Connection(format!(
                "injected {fault:?} fault"
            )));
        }
        Ok(())
    }

    fn apply(&mut self, table: &str, row: &Row) {
        if !row.write_to_wal {
            self.stats.wal_skipped += 1;
        }
        self.tables.entry(table.to_string()).or_default().insert(
            (row.key.clone(), row.family.clone(), row.qualifier.clone()),
            row.value.clone(),
        );
    }
}

impl StoreClient for MemoryStore {
    fn put(&self, table: &str, row: &Row) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.check(Fault::Put)?;
        inner.apply(table, row);
        inner.stats.puts += 1;
        trace!("put {} row into '{}'", String::from_utf8_lossy(&row.key), table);
        Ok(())
    }

    fn put_batch(&self, table: &str, rows: &[Row]) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        if inner.faults.contains(&Fault::PutBatch) {
            inner.stats.failed += 1;
            return Err(StoreError::BatchRejected {
                failed: rows.len(),
                total: rows.len(),
            });
        }
        for row in rows {
            inner.apply(table, row);
        }
        inner.stats.batches.push(rows.len());
        trace!("put batch of {} rows into '{}'", rows.len(), table);
        Ok(())
    }

    fn get(&self, table: &str, get: &RowGet) -> Result<Option<Vec<u8>>, StoreError> {
        let mut inner = self.lock()?;
        inner.check(Fault::Get)?;
        inner.stats.gets += 1;
        let cell = (get.key.clone(), get.family.clone(), get.qualifier.clone());
        Ok(inner
            .tables
            .get(table)
            .and_then(|cells| cells.get(&cell))
            .cloned())
    }
}
