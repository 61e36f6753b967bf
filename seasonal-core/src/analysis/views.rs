use std::collections::BTreeMap;

use chrono::{Datelike, Month};
use serde::{Deserialize, Serialize};

use crate::analysis::seasonality::SeasonalityRecord;
use crate::analysis::stats::{mean, month_returns_by_year, round_to};
use crate::table::MonthlyReturnTable;
use crate::timeseries::calendar::ALL_MONTHS;
use crate::{Direction, Symbol};

/// Keep records observed over at least `min_years` years.
#[must_use]
pub fn filter_min_years(records: &[SeasonalityRecord], min_years: usize) -> Vec<SeasonalityRecord> {
    records
        .iter()
        .filter(|r| r.total_years >= min_years)
        .cloned()
        .collect()
}

/// The `top_n` records for `month` by win rate.
///
/// [`Direction::Rising`] orders from the highest win rate, [`Direction::Falling`]
/// from the lowest. Ties keep input order.
#[must_use]
pub fn rank_month(
    records: &[SeasonalityRecord],
    month: Month,
    direction: Direction,
    top_n: usize,
) -> Vec<SeasonalityRecord> {
    let mut selected: Vec<SeasonalityRecord> = records
        .iter()
        .filter(|r| r.month == month)
        .cloned()
        .collect();
    match direction {
        Direction::Rising => selected.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate)),
        Direction::Falling => selected.sort_by(|a, b| a.win_rate.total_cmp(&b.win_rate)),
    }
    selected.truncate(top_n);
    selected
}

/// Mean win rate per calendar month across all records, January first.
///
/// Months without any record are omitted. Means are rounded to two places.
#[must_use]
pub fn month_win_rate_means(records: &[SeasonalityRecord]) -> Vec<(Month, f64)> {
    ALL_MONTHS
        .into_iter()
        .filter_map(|month| {
            let rates: Vec<f64> = records
                .iter()
                .filter(|r| r.month == month)
                .map(|r| r.win_rate)
                .collect();
            mean(&rates).map(|m| (month, round_to(m, 2)))
        })
        .collect()
}

/// Month with the highest mean win rate; the earliest month wins a tie.
#[must_use]
pub fn best_month(records: &[SeasonalityRecord]) -> Option<Month> {
    month_win_rate_means(records)
        .into_iter()
        .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })
        .map(|(month, _)| month)
}

/// Month with the lowest mean win rate; the earliest month wins a tie.
#[must_use]
pub fn worst_month(records: &[SeasonalityRecord]) -> Option<Month> {
    month_win_rate_means(records)
        .into_iter()
        .reduce(|worst, cur| if cur.1 < worst.1 { cur } else { worst })
        .map(|(month, _)| month)
}

/// Every observed return of one instrument in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBreakdown {
    /// Calendar month.
    pub month: Month,
    /// `(year, return)` pairs in ascending year order.
    pub observations: Vec<(i32, f64)>,
}

/// Returns of `symbol` grouped by calendar month.
///
/// Always yields twelve entries, January first; months never observed have
/// no observations.
#[must_use]
pub fn monthly_breakdown(returns: &MonthlyReturnTable, symbol: &Symbol) -> Vec<MonthBreakdown> {
    ALL_MONTHS
        .into_iter()
        .map(|month| MonthBreakdown {
            month,
            observations: month_returns_by_year(returns, symbol, month)
                .into_iter()
                .collect(),
        })
        .collect()
}

/// One calendar year of an instrument's returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    /// Calendar year.
    pub year: i32,
    /// Return per month, index 0 = January.
    pub cells: [Option<f64>; 12],
}

/// Year × month grid of one instrument's returns, oldest year first.
///
/// Only years with at least one observation appear.
#[must_use]
pub fn year_month_matrix(returns: &MonthlyReturnTable, symbol: &Symbol) -> Vec<YearRow> {
    let mut rows: BTreeMap<i32, [Option<f64>; 12]> = BTreeMap::new();
    for (date, value) in returns.column(symbol) {
        rows.entry(date.year()).or_insert([None; 12])[date.month0() as usize] = Some(value);
    }
    rows.into_iter()
        .map(|(year, cells)| YearRow { year, cells })
        .collect()
}
