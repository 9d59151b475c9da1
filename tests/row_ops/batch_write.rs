//! batchWrite and floatWrite driven through the registry.

use perf_eval_ext::perf_core::RowOpConfig;
use perf_eval_ext::perf_memstore::{Fault, MemoryStore};
use perf_eval_ext::{build_operation, OperationKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

#[test]
fn test_batch_write_default_threshold() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryStore::new());
    let mut op = build_operation(
        OperationKind::BatchWrite,
        store.clone(),
        RowOpConfig::default(),
        StdRng::seed_from_u64(42),
    )?;

    for i in 0..5000 {
        op.execute(i)?;
    }
    assert!(store.stats().batches.is_empty());

    op.execute(5000)?;
    assert_eq!(store.stats().batches, vec![5001]);
    assert_eq!(op.metrics().batch_count, 1);

    // the driver's final flush has nothing left to write
    op.flush()?;
    assert_eq!(store.stats().batches, vec![5001]);
    Ok(())
}

#[test]
fn test_batch_write_unflushed_tail_is_lost() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryStore::new());
    {
        let mut op = build_operation(
            OperationKind::BatchWrite,
            store.clone(),
            RowOpConfig::default().with_batch_threshold(10),
            StdRng::seed_from_u64(42),
        )?;
        for i in 0..15 {
            op.execute(i)?;
        }
        // dropped without flush
    }

    assert_eq!(store.stats().batches, vec![11]);
    Ok(())
}

#[test]
fn test_batch_write_fault_is_not_retried() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryStore::new());
    let mut op = build_operation(
        OperationKind::BatchWrite,
        store.clone(),
        RowOpConfig::default().with_batch_threshold(1),
        StdRng::seed_from_u64(42),
    )?;

    store.inject_fault(Fault::PutBatch);
    op.execute(0)?;
    assert!(op.execute(1).is_err());
    assert_eq!(store.stats().failed, 1);
    assert!(store.stats().batches.is_empty());
    Ok(())
}

#[test]
fn test_float_write_writes_immediately() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryStore::new());
    let mut op = build_operation(
        OperationKind::FloatWrite,
        store.clone(),
        RowOpConfig::default(),
        StdRng::seed_from_u64(42),
    )?;

    op.execute(0)?;
    op.execute(0)?;
    assert_eq!(op.name(), "floatWrite");
    assert_eq!(store.stats().puts, 2);
    assert!(op.verification_report().is_none());
    Ok(())
}
