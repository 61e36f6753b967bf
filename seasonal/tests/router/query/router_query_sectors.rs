use std::sync::Arc;

use chrono::Month;

use crate::helpers::{builder_with, falls_in_september, rises_only_in_september, sym, syms};
use seasonal::{SectorMap, SectorMetric, Snapshot, UNCLASSIFIED};
use seasonal_mock::{DynamicMockSource, MockBehavior};

async fn snapshot(map: SectorMap) -> Arc<Snapshot> {
    let (source, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_history_behavior(
        sym("REF"),
        MockBehavior::Return(falls_in_september(&[2019, 2020, 2022, 2023])),
    )
    .await;
    ctl.set_history_behavior(sym("B"), MockBehavior::Return(rises_only_in_september()))
        .await;
    ctl.set_history_behavior(sym("C"), MockBehavior::Return(falls_in_september(&[2019])))
        .await;
    let seasonal = builder_with(source).sector_map(map).build().unwrap();
    seasonal
        .load()
        .symbols(&syms(&["REF", "B", "C"]))
        .unwrap()
        .run()
        .await
        .unwrap()
}

fn map() -> SectorMap {
    SectorMap::new().with("REF", "Index").with("C", "Index")
}

#[tokio::test]
async fn available_sectors_groups_loaded_symbols() {
    let snapshot = snapshot(map()).await;

    let sectors = snapshot.available_sectors();
    assert_eq!(
        sectors,
        vec![
            ("Index".to_string(), syms(&["REF", "C"])),
            (UNCLASSIFIED.to_string(), syms(&["B"])),
        ]
    );
}

#[tokio::test]
async fn sector_summaries_average_member_records() {
    let snapshot = snapshot(map()).await;

    let rows = snapshot.sector_summaries(&["Index"], 0);
    assert_eq!(rows.len(), 12);
    assert!(rows.iter().all(|r| r.sector == "Index" && r.instruments == 2));

    let sep = rows.iter().find(|r| r.month == Month::September).unwrap();
    // REF 20.0, C 80.0.
    assert!((sep.mean_win_rate - 50.0).abs() < f64::EPSILON);
    assert!((sep.value(SectorMetric::WinRate) - 50.0).abs() < f64::EPSILON);

    let jan = rows.iter().find(|r| r.month == Month::January).unwrap();
    assert!((jan.mean_win_rate - 100.0).abs() < f64::EPSILON);
    assert!((jan.value(SectorMetric::MeanReturn) - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn unknown_sector_yields_nothing() {
    let snapshot = snapshot(map()).await;

    assert!(snapshot.sector_summaries(&["Airlines"], 0).is_empty());
}

#[tokio::test]
async fn catch_all_sector_is_queryable() {
    let snapshot = snapshot(map()).await;

    let rows = snapshot.sector_summaries(&[UNCLASSIFIED], 0);
    assert_eq!(rows.len(), 12);
    assert!(rows.iter().all(|r| r.instruments == 1));
}

#[tokio::test]
async fn month_ranking_orders_sectors() {
    let snapshot = snapshot(map()).await;

    let ranking = snapshot.sector_month_ranking(&["Index", UNCLASSIFIED], Month::September, 0);
    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].sector, UNCLASSIFIED);
    assert_eq!(ranking[0].best_symbol, sym("B"));
    assert!((ranking[0].best_win_rate - 100.0).abs() < f64::EPSILON);

    assert_eq!(ranking[1].sector, "Index");
    assert_eq!(ranking[1].instruments, 2);
    assert_eq!(ranking[1].best_symbol, sym("C"));
    assert!((ranking[1].best_win_rate - 80.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn builtin_map_is_the_default() {
    let (source, _ctl) = DynamicMockSource::new_with_controller("dyn");
    let seasonal = builder_with(source).build().unwrap();

    assert_eq!(seasonal.sectors(), &SectorMap::builtin());
    assert_eq!(seasonal.sectors().sector_of("ZZZ"), UNCLASSIFIED);
}
