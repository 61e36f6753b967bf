//! Small numeric helpers shared by the aggregators.

use std::collections::BTreeMap;

use chrono::{Datelike, Month};

use crate::Symbol;
use crate::table::MonthlyReturnTable;
use crate::timeseries::calendar::month_of;

/// Round half-to-even at `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    Some(values.iter().sum::<f64>() / n)
}

pub(crate) fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some(f64::midpoint(sorted[mid - 1], sorted[mid]))
    }
}

/// Sample standard deviation (divides by `n - 1`); `None` below two values.
pub(crate) fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    #[allow(clippy::cast_precision_loss)]
    let denom = (values.len() - 1) as f64;
    Some((ss / denom).sqrt())
}

/// Percentage `part / whole * 100`; zero when `whole` is zero.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let pct = part as f64 / whole as f64 * 100.0;
    pct
}

/// One instrument's returns for one calendar month, keyed by year.
pub(crate) fn month_returns_by_year(
    returns: &MonthlyReturnTable,
    symbol: &Symbol,
    month: Month,
) -> BTreeMap<i32, f64> {
    returns
        .column(symbol)
        .filter(|(date, _)| month_of(*date) == month)
        .map(|(date, v)| (date.year(), v))
        .collect()
}
