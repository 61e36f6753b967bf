use std::sync::Arc;

use crate::helpers::{builder_with, falls_in_september, rises_only_in_september, sym, syms};
use seasonal::CacheConfig;
use seasonal_mock::{DynamicMockSource, MockBehavior};

#[tokio::test]
async fn repeated_load_is_served_from_cache() {
    let (source, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_history_behavior(sym("REF"), MockBehavior::Return(falls_in_september(&[2020])))
        .await;
    ctl.set_history_behavior(sym("B"), MockBehavior::Return(rises_only_in_september()))
        .await;
    let seasonal = builder_with(source).build().unwrap();

    let first = seasonal
        .load()
        .symbols(&syms(&["REF", "B"]))
        .unwrap()
        .run()
        .await
        .unwrap();
    // Same set in a different order hits the same entry.
    let second = seasonal
        .load()
        .symbols(&syms(&["B", "REF"]))
        .unwrap()
        .run()
        .await
        .unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(ctl.calls(&sym("REF")).await, 1);
    assert_eq!(ctl.calls(&sym("B")).await, 1);
}

#[tokio::test]
async fn force_reload_replaces_cached_snapshot() {
    let (source, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_history_behavior(sym("REF"), MockBehavior::Return(falls_in_september(&[2020])))
        .await;
    let seasonal = builder_with(source).build().unwrap();
    let symbols = syms(&["REF"]);

    let first = seasonal.load().symbols(&symbols).unwrap().run().await.unwrap();
    let reloaded = seasonal
        .load()
        .symbols(&symbols)
        .unwrap()
        .force_reload(true)
        .run()
        .await
        .unwrap();

    assert!(!Arc::ptr_eq(&first, &reloaded));
    assert_eq!(ctl.calls(&sym("REF")).await, 2);
    assert_eq!(first.prices(), reloaded.prices());

    // The reloaded snapshot is what later loads see.
    let third = seasonal.load().symbols(&symbols).unwrap().run().await.unwrap();
    assert!(Arc::ptr_eq(&reloaded, &third));
    assert_eq!(ctl.calls(&sym("REF")).await, 2);
}

#[tokio::test]
async fn different_window_is_a_different_entry() {
    let (source, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_history_behavior(sym("REF"), MockBehavior::Return(falls_in_september(&[2020])))
        .await;
    let seasonal = builder_with(source).build().unwrap();
    let symbols = syms(&["REF"]);

    seasonal.load().symbols(&symbols).unwrap().run().await.unwrap();
    seasonal
        .load()
        .symbols(&symbols)
        .unwrap()
        .history_years(6)
        .run()
        .await
        .unwrap();

    assert_eq!(ctl.calls(&sym("REF")).await, 2);
}

#[tokio::test]
async fn invalidate_all_drops_entries() {
    let (source, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_history_behavior(sym("REF"), MockBehavior::Return(falls_in_september(&[2020])))
        .await;
    let seasonal = builder_with(source)
        .cache(CacheConfig::default())
        .build()
        .unwrap();
    let symbols = syms(&["REF"]);

    seasonal.load().symbols(&symbols).unwrap().run().await.unwrap();
    seasonal.invalidate_all();
    seasonal.load().symbols(&symbols).unwrap().run().await.unwrap();

    assert_eq!(ctl.calls(&sym("REF")).await, 2);
}

#[tokio::test]
async fn failed_load_is_not_cached() {
    let (source, ctl) = DynamicMockSource::new_with_controller("dyn");
    let seasonal = builder_with(source).build().unwrap();
    let symbols = syms(&["REF"]);

    assert!(seasonal.load().symbols(&symbols).unwrap().run().await.is_err());
    ctl.set_history_behavior(sym("REF"), MockBehavior::Return(falls_in_september(&[2020])))
        .await;
    let snapshot = seasonal.load().symbols(&symbols).unwrap().run().await.unwrap();

    assert_eq!(snapshot.report().loaded, symbols);
    assert_eq!(ctl.calls(&sym("REF")).await, 2);
}
