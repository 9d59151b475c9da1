//! verificationWrite -> verificationRead workflow.

use perf_eval_ext::perf_core::RowOpConfig;
use perf_eval_ext::perf_memstore::{Fault, MemoryStore};
use perf_eval_ext::{build_operation, OperationKind, RegistryError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::Range;
use std::sync::Arc;

const ROW_COUNT: i32 = 500;
const WORKERS: i32 = 4;

fn write_rows(
    store: Arc<MemoryStore>,
    config: RowOpConfig,
    seed: u64,
    rows: Range<i32>,
) -> Result<(), RegistryError> {
    let mut op = build_operation(
        OperationKind::VerificationWrite,
        store,
        config,
        StdRng::seed_from_u64(seed),
    )?;
    for i in rows {
        op.execute(i)?;
    }
    op.flush()?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("perf_ops=info")
        .try_init()
        .ok();
}

#[test]
fn test_verification_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = RowOpConfig::from_file("tests/fixtures/row_ops_config.yaml")?;
    let store = Arc::new(MemoryStore::new());

    // === PHASE 1: WRITE, one instance per worker over its own row range ===
    let per_worker = ROW_COUNT / WORKERS;
    let results: Vec<Result<(), RegistryError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..WORKERS)
            .map(|worker| {
                let store = store.clone();
                let config = config.clone();
                let rows = worker * per_worker..(worker + 1) * per_worker;
                scope.spawn(move || write_rows(store, config, worker as u64, rows))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("writer thread panicked"))
            .collect()
    });
    for result in results {
        result?;
    }

    assert_eq!(store.cell_count("VerifyTable"), ROW_COUNT as usize);
    assert_eq!(store.stats().wal_skipped, ROW_COUNT as u64);

    // === PHASE 2: READ BACK and compare ===
    let mut read = build_operation(
        OperationKind::VerificationRead,
        store.clone(),
        config,
        StdRng::seed_from_u64(0),
    )?;
    for i in 0..ROW_COUNT {
        read.execute(i)?;
    }

    let report = read
        .verification_report()
        .ok_or("verificationRead should keep a report")?;
    tracing::info!("{}", report.summary());
    assert!(report.is_success(), "{}", report.summary());
    assert_eq!(report.matched, ROW_COUNT as u64);
    assert_eq!(read.metrics().rows_read, ROW_COUNT as u64);

    Ok(())
}

#[test]
fn test_verification_reports_gaps_without_failing() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = RowOpConfig::default().with_table("GapTable");
    let store = Arc::new(MemoryStore::new());

    let mut write = build_operation(
        OperationKind::VerificationWrite,
        store.clone(),
        config.clone(),
        StdRng::seed_from_u64(0),
    )?;
    for i in (0..20).filter(|i| i % 5 != 0) {
        write.execute(i)?;
    }

    let mut read = build_operation(
        OperationKind::VerificationRead,
        store.clone(),
        config,
        StdRng::seed_from_u64(0),
    )?;
    for i in 0..20 {
        read.execute(i)?;
    }

    let report = read.verification_report().ok_or("missing report")?;
    assert_eq!(report.missing, 4);
    assert_eq!(report.matched, 16);
    let missing_keys: Vec<String> = report
        .mismatched_rows
        .iter()
        .map(|info| info.key_string())
        .collect();
    assert_eq!(
        missing_keys,
        vec!["0000000000", "0000000005", "0000000010", "0000000015"]
    );

    Ok(())
}

#[test]
fn test_tables_are_isolated() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryStore::new());

    let mut write = build_operation(
        OperationKind::VerificationWrite,
        store.clone(),
        RowOpConfig::default().with_table("A"),
        StdRng::seed_from_u64(0),
    )?;
    write.execute(1)?;

    let mut read = build_operation(
        OperationKind::VerificationRead,
        store.clone(),
        RowOpConfig::default().with_table("B"),
        StdRng::seed_from_u64(0),
    )?;
    read.execute(1)?;

    assert_eq!(read.verification_report().ok_or("missing report")?.missing, 1);
    Ok(())
}

#[test]
fn test_read_fault_surfaces_to_driver() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryStore::new());
    let mut read = build_operation(
        OperationKind::VerificationRead,
        store.clone(),
        RowOpConfig::default(),
        StdRng::seed_from_u64(0),
    )?;

    store.inject_fault(Fault::Get);
    assert!(read.execute(0).is_err());
    // one attempt, no retry
    assert_eq!(store.stats().failed, 1);
    assert_eq!(store.stats().gets, 0);
    Ok(())
}
