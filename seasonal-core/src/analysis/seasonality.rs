use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::Symbol;
use crate::analysis::stats::{mean, median, month_returns_by_year, percent, round_to, sample_std};
use crate::table::MonthlyReturnTable;
use crate::timeseries::calendar::ALL_MONTHS;

/// Month-of-year statistics for one instrument.
///
/// `win_rate` is rounded to one decimal place and the return statistics to
/// two; `std_dev` is the sample standard deviation (n − 1) and is `None`
/// when only one year was observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityRecord {
    /// Instrument.
    pub symbol: Symbol,
    /// Calendar month.
    pub month: Month,
    /// Years with a strictly positive return.
    pub up_years: usize,
    /// Years with a strictly negative return.
    pub down_years: usize,
    /// Years observed, including flat (exactly zero) ones.
    pub total_years: usize,
    /// `up_years / total_years * 100`.
    pub win_rate: f64,
    /// Mean return, percent.
    pub mean_return: f64,
    /// Median return, percent.
    pub median_return: f64,
    /// Best return, percent.
    pub max_return: f64,
    /// Worst return, percent.
    pub min_return: f64,
    /// Sample standard deviation of the return, percent.
    pub std_dev: Option<f64>,
}

impl SeasonalityRecord {
    /// Years with an exactly zero return.
    #[must_use]
    pub const fn flat_years(&self) -> usize {
        self.total_years
            .saturating_sub(self.up_years)
            .saturating_sub(self.down_years)
    }

    fn from_values(symbol: &Symbol, month: Month, values: &[f64]) -> Option<Self> {
        let total = values.len();
        if total == 0 {
            return None;
        }
        let up = values.iter().filter(|v| **v > 0.0).count();
        let down = values.iter().filter(|v| **v < 0.0).count();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        Some(Self {
            symbol: symbol.clone(),
            month,
            up_years: up,
            down_years: down,
            total_years: total,
            win_rate: round_to(percent(up, total), 1),
            mean_return: round_to(mean(values)?, 2),
            median_return: round_to(median(values)?, 2),
            max_return: round_to(max, 2),
            min_return: round_to(min, 2),
            std_dev: sample_std(values).map(|s| round_to(s, 2)),
        })
    }
}

/// Compute seasonality records for every instrument and calendar month.
///
/// Records are emitted in column order, then January through December. An
/// (instrument, month) pair with no observed return yields no record. A
/// return of exactly zero counts toward `total_years` but neither toward
/// `up_years` nor `down_years`, so the win-rate denominator is every observed
/// year.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "seasonal_core::compute_stats",
        skip(returns),
        fields(columns = returns.columns().len(), months = returns.len()),
    )
)]
#[must_use]
pub fn compute_stats(returns: &MonthlyReturnTable) -> Vec<SeasonalityRecord> {
    let mut out: Vec<SeasonalityRecord> = Vec::new();
    for symbol in returns.columns() {
        for month in ALL_MONTHS {
            let values: Vec<f64> = month_returns_by_year(returns, symbol, month)
                .into_values()
                .collect();
            if let Some(rec) = SeasonalityRecord::from_values(symbol, month, &values) {
                out.push(rec);
            }
        }
    }
    out
}
