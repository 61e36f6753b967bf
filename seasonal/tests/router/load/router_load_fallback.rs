use chrono::Days;

use crate::helpers::{AS_OF, d, falls_in_september, sym, syms};
use seasonal::{RawPriceTable, Seasonal, SeasonalError};
use seasonal_mock::{DynamicMockSource, MockBehavior};

#[tokio::test]
async fn sources_are_tried_in_registration_order() {
    let (primary, p_ctl) = DynamicMockSource::new_with_controller("primary");
    let (backup, b_ctl) = DynamicMockSource::new_with_controller("backup");

    // A: primary has nothing, backup has it.
    b_ctl
        .set_history_behavior(sym("A"), MockBehavior::Return(falls_in_september(&[2020])))
        .await;
    // B: primary fails outright, backup has it.
    p_ctl
        .set_history_behavior(
            sym("B"),
            MockBehavior::Fail(SeasonalError::provider("primary", "boom")),
        )
        .await;
    b_ctl
        .set_history_behavior(sym("B"), MockBehavior::Return(falls_in_september(&[2021])))
        .await;
    // C: primary returns an empty table, backup has it.
    p_ctl
        .set_history_behavior(sym("C"), MockBehavior::Return(RawPriceTable::empty()))
        .await;
    b_ctl
        .set_history_behavior(sym("C"), MockBehavior::Return(falls_in_september(&[2022])))
        .await;
    // D: primary answers, backup is never asked.
    p_ctl
        .set_history_behavior(sym("D"), MockBehavior::Return(falls_in_september(&[2023])))
        .await;

    let (y, m, day) = AS_OF;
    let seasonal = Seasonal::builder()
        .with_source(primary)
        .with_source(backup)
        .as_of(d(y, m, day))
        .build()
        .unwrap();

    let snapshot = seasonal
        .load()
        .symbols(&syms(&["A", "B", "C", "D"]))
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(snapshot.report().loaded, syms(&["A", "B", "C", "D"]));
    assert!(snapshot.report().warnings.is_empty());
    assert_eq!(b_ctl.calls(&sym("D")).await, 0);
    assert_eq!(p_ctl.total_calls().await, 4);
    assert_eq!(b_ctl.total_calls().await, 3);
}

#[tokio::test]
async fn real_failure_outranks_not_found() {
    let (primary, _p_ctl) = DynamicMockSource::new_with_controller("primary");
    let (backup, b_ctl) = DynamicMockSource::new_with_controller("backup");
    b_ctl
        .set_history_behavior(
            sym("A"),
            MockBehavior::Fail(SeasonalError::Other("rate limited".into())),
        )
        .await;
    b_ctl
        .set_history_behavior(sym("OK"), MockBehavior::Return(falls_in_september(&[2020])))
        .await;

    let seasonal = Seasonal::builder()
        .with_source(primary)
        .with_source(backup)
        .build()
        .unwrap();

    let snapshot = seasonal
        .load()
        .symbols(&syms(&["A", "OK"]))
        .unwrap()
        .run()
        .await
        .unwrap();

    // Untagged errors are attributed to the source that raised them.
    assert_eq!(
        snapshot.report().warnings,
        vec![SeasonalError::provider(
            "backup",
            SeasonalError::Other("rate limited".into()).to_string()
        )]
    );
}

#[tokio::test]
async fn window_ends_at_as_of_and_spans_the_configured_years() {
    let (source, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_history_behavior(sym("A"), MockBehavior::Return(falls_in_september(&[2020])))
        .await;
    let (y, m, day) = AS_OF;
    let end = d(y, m, day);
    let seasonal = Seasonal::builder()
        .with_source(source)
        .as_of(end)
        .history_years(3)
        .build()
        .unwrap();

    seasonal.load().symbols(&syms(&["A"])).unwrap().run().await.unwrap();

    let windows = ctl.windows().await;
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].end, end);
    assert_eq!(windows[0].start, end - Days::new(365 * 3 + 30));
}
