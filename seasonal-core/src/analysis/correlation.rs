use std::collections::BTreeMap;

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::Symbol;
use crate::analysis::stats::{mean, month_returns_by_year, percent, round_to};
use crate::table::MonthlyReturnTable;

/// Which month of the candidate is compared against the reference's down-years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// The reference month itself.
    SameMonth,
    /// The calendar month after the reference month. December wraps to the
    /// following year's January.
    NextMonth,
}

impl Period {
    /// Both periods in evaluation order.
    pub const ALL: [Self; 2] = [Self::SameMonth, Self::NextMonth];

    /// Calendar month examined in the candidate for a given reference month.
    #[must_use]
    pub fn target_month(self, reference: Month) -> Month {
        match self {
            Self::SameMonth => reference,
            Self::NextMonth => reference.succ(),
        }
    }

    /// Year offset applied to each reference year when looking up the candidate.
    #[must_use]
    pub fn year_shift(self, reference: Month) -> i32 {
        match (self, reference) {
            (Self::NextMonth, Month::December) => 1,
            _ => 0,
        }
    }

    /// Short human label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SameMonth => "same month",
            Self::NextMonth => "next month",
        }
    }
}

/// How often a candidate rose while the reference fell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationRecord {
    /// Candidate instrument.
    pub symbol: Symbol,
    /// Compared period.
    pub period: Period,
    /// Calendar month examined in the candidate.
    pub month: Month,
    /// Number of reference down-years for which the candidate has a return.
    pub common_years: usize,
    /// Of those, years in which the candidate's return was strictly positive.
    pub rose: usize,
    /// `rose / common_years * 100`, one decimal place.
    pub pct_rose: f64,
    /// Mean candidate return over the common years, two decimal places.
    pub mean_return: f64,
    /// Matched reference down-years, ascending. For a December reference in
    /// the next-month period these are still the December years, not the
    /// January ones.
    pub years: Vec<i32>,
}

/// Find instruments that tend to rise when `reference` falls in `month`.
///
/// For each other instrument, in column order, the same month and the next
/// month are compared against the years in which the reference's `month`
/// return was negative. A period is reported only if at least
/// `max(min_overlap_years, 1)` such years have a candidate observation: a
/// record needs one overlapping year for its mean return, so a gate of zero
/// admits the same records as a gate of one. The result is sorted by
/// `pct_rose` descending; ties keep evaluation order.
///
/// Returns an empty vector when the reference has no observation for `month`
/// or no negative year, or when it is not a column of the table.
#[must_use]
pub fn find_correlations(
    returns: &MonthlyReturnTable,
    reference: &Symbol,
    month: Month,
    min_overlap_years: usize,
) -> Vec<CorrelationRecord> {
    let reference_returns = month_returns_by_year(returns, reference, month);
    if reference_returns.is_empty() {
        return Vec::new();
    }
    let down_years: Vec<i32> = reference_returns
        .iter()
        .filter(|(_, v)| **v < 0.0)
        .map(|(year, _)| *year)
        .collect();
    if down_years.is_empty() {
        return Vec::new();
    }
    let gate = min_overlap_years.max(1);

    let mut out: Vec<CorrelationRecord> = Vec::new();
    for candidate in returns.columns().iter().filter(|c| *c != reference) {
        for period in Period::ALL {
            let target = period.target_month(month);
            let shift = period.year_shift(month);
            let candidate_returns = month_returns_by_year(returns, candidate, target);
            if let Some(rec) =
                overlap_record(candidate, period, target, shift, &down_years, &candidate_returns, gate)
            {
                out.push(rec);
            }
        }
    }

    out.sort_by(|a, b| b.pct_rose.total_cmp(&a.pct_rose));
    out
}

fn overlap_record(
    candidate: &Symbol,
    period: Period,
    target: Month,
    shift: i32,
    down_years: &[i32],
    candidate_returns: &BTreeMap<i32, f64>,
    gate: usize,
) -> Option<CorrelationRecord> {
    let mut years: Vec<i32> = Vec::new();
    let mut values: Vec<f64> = Vec::new();
    for year in down_years {
        let Some(lookup) = year.checked_add(shift) else {
            continue;
        };
        if let Some(v) = candidate_returns.get(&lookup) {
            years.push(*year);
            values.push(*v);
        }
    }
    if years.len() < gate {
        return None;
    }
    let rose = values.iter().filter(|v| **v > 0.0).count();
    Some(CorrelationRecord {
        symbol: candidate.clone(),
        period,
        month: target,
        common_years: years.len(),
        rose,
        pct_rose: round_to(percent(rose, years.len()), 1),
        mean_return: round_to(mean(&values)?, 2),
        years,
    })
}

/// Split a result set into same-month and next-month records, preserving order.
#[must_use]
pub fn split_by_period(
    records: &[CorrelationRecord],
) -> (Vec<CorrelationRecord>, Vec<CorrelationRecord>) {
    records
        .iter()
        .cloned()
        .partition(|r| r.period == Period::SameMonth)
}
