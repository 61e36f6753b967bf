use std::sync::Arc;
use std::time::Duration;

use crate::helpers::{builder_with, syms};
use seasonal::SeasonalError;
use seasonal_mock::MockSource;

#[tokio::test]
async fn failed_symbols_are_reported_not_fatal() {
    let seasonal = builder_with(Arc::new(
        MockSource::new().with_latency(Duration::from_millis(1)),
    ))
    .history_years(5)
    .build()
    .unwrap();

    let requested = syms(&["AAPL", "FAIL", "MSFT", "EMPTY", "SHORT", "JUNK", "NOPE"]);
    let snapshot = seasonal
        .load()
        .symbols(&requested)
        .unwrap()
        .run()
        .await
        .unwrap();

    let report = snapshot.report();
    assert_eq!(report.requested, requested);
    assert_eq!(report.loaded, syms(&["AAPL", "MSFT"]));
    assert_eq!(report.failed, syms(&["FAIL", "EMPTY", "SHORT", "JUNK", "NOPE"]));
    assert_eq!(report.warnings.len(), 5);
    assert!(report.is_partial());

    // Forced provider failure stays tagged with the source name.
    match &report.warnings[0] {
        SeasonalError::Source { provider, .. } => assert_eq!(provider, "seasonal-mock"),
        other => panic!("unexpected warning: {other:?}"),
    }
    // Everything else is expected absence.
    assert!(
        report.warnings[1..]
            .iter()
            .all(|w| matches!(w, SeasonalError::NotFound { .. })),
        "{:?}",
        report.warnings
    );

    assert_eq!(snapshot.symbols(), syms(&["AAPL", "MSFT"]).as_slice());
    assert_eq!(snapshot.stats().len(), 24);
}

#[tokio::test]
async fn all_failed_is_no_usable_data() {
    let seasonal = builder_with(Arc::new(MockSource::new()))
        .history_years(5)
        .build()
        .unwrap();

    let err = seasonal
        .load()
        .symbols(&syms(&["FAIL", "EMPTY", "NOPE"]))
        .unwrap()
        .run()
        .await
        .err()
        .expect("nothing usable");
    assert_eq!(err, SeasonalError::NoUsableData { requested: 3 });
}

#[tokio::test]
async fn every_fixture_produces_twelve_records() {
    let seasonal = builder_with(Arc::new(MockSource::new()))
        .history_years(5)
        .build()
        .unwrap();

    let requested = syms(seasonal_mock::FIXTURE_SYMBOLS);
    let snapshot = seasonal
        .load()
        .symbols(&requested)
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(snapshot.report().loaded, requested);
    for s in &requested {
        let records = snapshot.stats_for(s);
        assert_eq!(records.len(), 12, "{s}");
        assert!(records.iter().all(|r| r.total_years >= 4), "{s}");
    }
}
