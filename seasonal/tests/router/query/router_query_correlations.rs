use std::sync::Arc;

use chrono::Month;

use crate::helpers::{builder_with, falls_in_september, rises_only_in_september, sym, syms};
use seasonal::{Period, SeasonalError, Snapshot};
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
async fn candidate_rising_in_reference_down_years() {
    let snapshot = snapshot().await;

    let out = snapshot.correlations(&sym("REF"), Month::September, 3);
    assert_eq!(out.len(), 2);

    let same = &out[0];
    assert_eq!(same.symbol, sym("B"));
    assert_eq!(same.period, Period::SameMonth);
    assert_eq!(same.month, Month::September);
    assert_eq!(same.common_years, 4);
    assert_eq!(same.rose, 4);
    assert!((same.pct_rose - 100.0).abs() < f64::EPSILON);
    assert!((same.mean_return - 3.0).abs() < 1e-9);
    assert_eq!(same.years, vec![2019, 2020, 2022, 2023]);

    let next = &out[1];
    assert_eq!(next.period, Period::NextMonth);
    assert_eq!(next.month, Month::October);
    assert_eq!(next.rose, 0);
    assert!(next.pct_rose.abs() < f64::EPSILON);
}

#[tokio::test]
async fn overlap_gate_drops_thin_results() {
    let snapshot = snapshot().await;

    assert!(snapshot.correlations(&sym("REF"), Month::September, 5).is_empty());
    assert_eq!(snapshot.correlations(&sym("REF"), Month::September, 4).len(), 2);
}

#[tokio::test]
async fn month_without_down_years_is_empty() {
    let snapshot = snapshot().await;

    assert!(snapshot.correlations(&sym("REF"), Month::March, 1).is_empty());
}

#[tokio::test]
async fn unknown_reference_is_empty_or_rejected() {
    let snapshot = snapshot().await;

    assert!(snapshot.correlations(&sym("ZZZ"), Month::September, 1).is_empty());
    assert!(matches!(
        snapshot.correlations_checked(&sym("ZZZ"), Month::September, 1),
        Err(SeasonalError::InvalidArg(_))
    ));
    assert_eq!(
        snapshot
            .correlations_checked(&sym("REF"), Month::September, 1)
            .unwrap(),
        snapshot.correlations(&sym("REF"), Month::September, 1)
    );
}

#[tokio::test]
async fn reference_rising_into_candidate_down_years() {
    let snapshot = snapshot().await;

    // B rose every September.
    assert!(snapshot.correlations(&sym("B"), Month::September, 1).is_empty());

    // B fell in every October (2019..=2023); REF rose 1% each time.
    let out = snapshot.correlations(&sym("B"), Month::October, 1);
    let same = out
        .iter()
        .find(|r| r.period == Period::SameMonth)
        .expect("same-month record");
    assert_eq!(same.symbol, sym("REF"));
    assert_eq!(same.common_years, 5);
    assert_eq!(same.rose, 5);
    assert!((same.pct_rose - 100.0).abs() < f64::EPSILON);
}
