use std::sync::Arc;

use chrono::Month;

use crate::helpers::{builder_with, falls_in_september, rises_only_in_september, sym, syms};
use seasonal::{Direction, Snapshot};
use seasonal_mock::{DynamicMockSource, MockBehavior};

async fn snapshot() -> Arc<Snapshot> {
    let (source, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_history_behavior(
        sym("REF"),
        MockBehavior::Return(falls_in_september(&[2019, 2020, 2022, 2023])),
    )
    .await;
    ctl.set_history_behavior(sym("B"), MockBehavior::Return(rises_only_in_september()))
        .await;
    let seasonal = builder_with(source).build().unwrap();
    seasonal
        .load()
        .symbols(&syms(&["REF", "B"]))
        .unwrap()
        .run()
        .await
        .unwrap()
}

#[tokio::test]
async fn records_cover_every_month_per_symbol() {
    let snapshot = snapshot().await;

    assert_eq!(snapshot.stats().len(), 24);
    let ref_records = snapshot.stats_for(&sym("REF"));
    let months: Vec<Month> = ref_records.iter().map(|r| r.month).collect();
    assert_eq!(months.first(), Some(&Month::January));
    assert_eq!(months.last(), Some(&Month::December));

    let sep = ref_records
        .iter()
        .find(|r| r.month == Month::September)
        .unwrap();
    assert_eq!(sep.total_years, 5);
    assert_eq!(sep.up_years, 1);
    assert_eq!(sep.down_years, 4);
    assert!((sep.win_rate - 20.0).abs() < f64::EPSILON);
    assert!((sep.median_return + 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn rankings_and_month_means() {
    let snapshot = snapshot().await;

    let top = snapshot.rank_month(Month::September, Direction::Rising, 1, 0);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].symbol, sym("B"));

    let bottom = snapshot.rank_month(Month::September, Direction::Falling, 1, 0);
    assert_eq!(bottom[0].symbol, sym("REF"));

    // REF wins every month but September, B only September.
    assert_eq!(snapshot.best_month(0), Some(Month::September));
    // Every other month ties at 50; the earliest wins.
    assert_eq!(snapshot.worst_month(0), Some(Month::January));

    let means = snapshot.month_win_rate_means(0);
    assert_eq!(means.len(), 12);
    assert!(means.iter().all(|(m, v)| {
        let expected = if *m == Month::September { 60.0 } else { 50.0 };
        (v - expected).abs() < f64::EPSILON
    }));
}

#[tokio::test]
async fn min_years_filter_applies_to_queries() {
    let snapshot = snapshot().await;

    assert_eq!(snapshot.stats_min_years(5).len(), 24);
    assert!(snapshot.stats_min_years(6).is_empty());
    assert!(snapshot.rank_month(Month::May, Direction::Rising, 10, 6).is_empty());
    assert_eq!(snapshot.best_month(6), None);
}

#[tokio::test]
async fn per_symbol_views() {
    let snapshot = snapshot().await;

    let breakdown = snapshot.monthly_breakdown(&sym("REF"));
    assert_eq!(breakdown.len(), 12);
    let sep = breakdown
        .iter()
        .find(|b| b.month == Month::September)
        .unwrap();
    let years: Vec<i32> = sep.observations.iter().map(|(y, _)| *y).collect();
    assert_eq!(years, vec![2019, 2020, 2021, 2022, 2023]);

    let matrix = snapshot.year_month_matrix(&sym("B"));
    let years: Vec<i32> = matrix.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2019, 2020, 2021, 2022, 2023]);
    assert!(matrix.iter().all(|r| r.cells.iter().all(Option::is_some)));

    assert!(snapshot.monthly_breakdown(&sym("ZZZ")).iter().all(|b| b.observations.is_empty()));
    assert!(snapshot.year_month_matrix(&sym("ZZZ")).is_empty());
}
