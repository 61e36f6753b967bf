use std::path::PathBuf;

use crate::helpers::{builder_with, falls_in_september, rises_only_in_september, sym, syms};
use seasonal::{MonthlyPriceTable, SeasonalError};
use seasonal_mock::{DynamicMockSource, MockBehavior};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("seasonal-{}-{name}.json", std::process::id()))
}

#[tokio::test]
async fn saved_prices_rebuild_an_identical_snapshot() {
    let (source, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_history_behavior(
        sym("REF"),
        MockBehavior::Return(falls_in_september(&[2019, 2020, 2022, 2023])),
    )
    .await;
    ctl.set_history_behavior(sym("B"), MockBehavior::Return(rises_only_in_september()))
        .await;
    let seasonal = builder_with(source).build().unwrap();
    let loaded = seasonal
        .load()
        .symbols(&syms(&["REF", "B"]))
        .unwrap()
        .run()
        .await
        .unwrap();

    let path = temp_path("snapshot");
    loaded.save_prices(&path).unwrap();
    let restored = seasonal.snapshot_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(restored.prices(), loaded.prices());
    assert_eq!(restored.returns(), loaded.returns());
    assert_eq!(restored.stats(), loaded.stats());
    assert_eq!(restored.symbols(), loaded.symbols());
    assert_eq!(restored.report().loaded, syms(&["REF", "B"]));
    assert!(restored.report().warnings.is_empty());
}

#[tokio::test]
async fn restoring_from_missing_file_is_persistence_error() {
    let (source, _ctl) = DynamicMockSource::new_with_controller("dyn");
    let seasonal = builder_with(source).build().unwrap();

    let err = seasonal
        .snapshot_from_file(temp_path("does-not-exist"))
        .err()
        .expect("missing file");
    assert!(matches!(err, SeasonalError::Persistence(_)));
}

#[tokio::test]
async fn empty_table_has_no_usable_data() {
    let (source, _ctl) = DynamicMockSource::new_with_controller("dyn");
    let seasonal = builder_with(source).build().unwrap();

    let err = seasonal
        .snapshot_from_prices(MonthlyPriceTable::new())
        .err()
        .expect("empty table");
    assert_eq!(err, SeasonalError::NoUsableData { requested: 0 });
}
