use std::time::Duration;

use crate::helpers::{builder_with, falls_in_september, sym, syms};
use seasonal::SeasonalError;
use seasonal_mock::{DynamicMockSource, MockBehavior};

#[tokio::test]
async fn hanging_source_becomes_a_timeout_warning() {
    let (source, ctl) = DynamicMockSource::new_with_controller("slow");
    ctl.set_history_behavior(sym("REF"), MockBehavior::Return(falls_in_september(&[2020])))
        .await;
    ctl.set_history_behavior(sym("HANG"), MockBehavior::Hang).await;
    let seasonal = builder_with(source)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let snapshot = seasonal
        .load()
        .symbols(&syms(&["REF", "HANG"]))
        .unwrap()
        .run()
        .await
        .unwrap();

    let report = snapshot.report();
    assert_eq!(report.loaded, syms(&["REF"]));
    assert_eq!(report.failed, syms(&["HANG"]));
    assert_eq!(
        report.warnings,
        vec![SeasonalError::source_timeout("slow", "HANG")]
    );
}

#[tokio::test]
async fn request_deadline_keeps_symbols_already_fetched() {
    let (source, ctl) = DynamicMockSource::new_with_controller("slow");
    ctl.set_history_behavior(sym("REF"), MockBehavior::Return(falls_in_september(&[2020])))
        .await;
    ctl.set_history_behavior(sym("HANG"), MockBehavior::Hang).await;
    let seasonal = builder_with(source)
        .provider_timeout(Duration::from_secs(30))
        .request_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let snapshot = seasonal
        .load()
        .symbols(&syms(&["REF", "HANG"]))
        .unwrap()
        .run()
        .await
        .unwrap();

    let report = snapshot.report();
    assert_eq!(report.loaded, syms(&["REF"]));
    assert_eq!(report.failed, syms(&["HANG"]));
    assert_eq!(
        report.warnings,
        vec![SeasonalError::request_timeout("load:history")]
    );
    assert_eq!(snapshot.symbols(), syms(&["REF"]).as_slice());
}

#[tokio::test]
async fn request_deadline_with_nothing_fetched_has_no_usable_data() {
    let (source, ctl) = DynamicMockSource::new_with_controller("slow");
    ctl.set_history_behavior(sym("A"), MockBehavior::Hang).await;
    ctl.set_history_behavior(sym("B"), MockBehavior::Hang).await;
    let seasonal = builder_with(source)
        .provider_timeout(Duration::from_secs(30))
        .request_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = seasonal
        .load()
        .symbols(&syms(&["A", "B"]))
        .unwrap()
        .run()
        .await
        .err()
        .expect("nothing loaded");
    assert_eq!(err, SeasonalError::NoUsableData { requested: 2 });
}

#[tokio::test]
async fn request_deadline_is_not_hit_by_fast_loads() {
    let (source, ctl) = DynamicMockSource::new_with_controller("fast");
    ctl.set_history_behavior(sym("REF"), MockBehavior::Return(falls_in_september(&[2020])))
        .await;
    let seasonal = builder_with(source)
        .request_timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let snapshot = seasonal
        .load()
        .symbols(&syms(&["REF"]))
        .unwrap()
        .run()
        .await
        .unwrap();
    assert!(!snapshot.report().is_partial());
}
