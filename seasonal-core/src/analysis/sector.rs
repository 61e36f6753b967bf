use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::analysis::seasonality::SeasonalityRecord;
use crate::analysis::stats::{mean, round_to};
use crate::sector_map::SectorMap;
use crate::timeseries::calendar::ALL_MONTHS;
use crate::{SectorMetric, Symbol};

/// Mean seasonality of one sector for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSummaryRecord {
    /// Sector name.
    pub sector: String,
    /// Calendar month.
    pub month: Month,
    /// Mean of the members' win rates, two decimal places.
    pub mean_win_rate: f64,
    /// Mean of the members' mean returns, two decimal places.
    pub mean_return: f64,
    /// Number of contributing instruments.
    pub instruments: usize,
}

impl SectorSummaryRecord {
    /// The value selected by `metric`.
    #[must_use]
    pub const fn value(&self, metric: SectorMetric) -> f64 {
        match metric {
            SectorMetric::WinRate => self.mean_win_rate,
            SectorMetric::MeanReturn => self.mean_return,
        }
    }
}

/// A sector's standing in a single month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorMonthRank {
    /// Sector name.
    pub sector: String,
    /// Mean win rate of the members, two decimal places.
    pub mean_win_rate: f64,
    /// Mean of the members' mean returns, two decimal places.
    pub mean_return: f64,
    /// Number of contributing instruments.
    pub instruments: usize,
    /// Member with the highest win rate; the first one wins a tie.
    pub best_symbol: Symbol,
    /// That member's win rate.
    pub best_win_rate: f64,
}

fn members<'a>(
    records: &'a [SeasonalityRecord],
    map: &'a SectorMap,
    sector: &'a str,
    month: Month,
) -> impl Iterator<Item = &'a SeasonalityRecord> + 'a {
    records
        .iter()
        .filter(move |r| r.month == month && map.sector_of(&r.symbol) == sector)
}

/// Average seasonality records per requested sector and calendar month.
///
/// Output is ordered by the requested sectors, then January through December.
/// A (sector, month) pair with no contributing record is omitted. Sectors
/// requested twice are reported twice.
#[must_use]
pub fn aggregate_by_sector<S: AsRef<str>>(
    records: &[SeasonalityRecord],
    map: &SectorMap,
    sectors: &[S],
) -> Vec<SectorSummaryRecord> {
    let mut out = Vec::new();
    for sector in sectors {
        let sector = sector.as_ref();
        for month in ALL_MONTHS {
            let selected: Vec<&SeasonalityRecord> = members(records, map, sector, month).collect();
            let win_rates: Vec<f64> = selected.iter().map(|r| r.win_rate).collect();
            let returns: Vec<f64> = selected.iter().map(|r| r.mean_return).collect();
            let (Some(wr), Some(ret)) = (mean(&win_rates), mean(&returns)) else {
                continue;
            };
            out.push(SectorSummaryRecord {
                sector: sector.to_string(),
                month,
                mean_win_rate: round_to(wr, 2),
                mean_return: round_to(ret, 2),
                instruments: selected.len(),
            });
        }
    }
    out
}

/// Group instruments by sector.
///
/// Sectors are ordered by member count, largest first; equally sized sectors
/// keep the order in which they were first encountered. Members keep input
/// order.
#[must_use]
pub fn available_sectors(symbols: &[Symbol], map: &SectorMap) -> Vec<(String, Vec<Symbol>)> {
    let mut groups: Vec<(String, Vec<Symbol>)> = Vec::new();
    for symbol in symbols {
        let sector = map.sector_of(symbol);
        match groups.iter_mut().find(|(name, _)| name == sector) {
            Some((_, list)) => list.push(symbol.clone()),
            None => groups.push((sector.to_string(), vec![symbol.clone()])),
        }
    }
    groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    groups
}

/// Compare the requested sectors in one month, strongest mean win rate first.
///
/// Sectors without any record for `month` are omitted.
#[must_use]
pub fn sector_month_ranking<S: AsRef<str>>(
    records: &[SeasonalityRecord],
    map: &SectorMap,
    sectors: &[S],
    month: Month,
) -> Vec<SectorMonthRank> {
    let mut out: Vec<SectorMonthRank> = Vec::new();
    for sector in sectors {
        let sector = sector.as_ref();
        let selected: Vec<&SeasonalityRecord> = members(records, map, sector, month).collect();
        let Some(best) = selected
            .iter()
            .copied()
            .reduce(|best, r| if r.win_rate > best.win_rate { r } else { best })
        else {
            continue;
        };
        let win_rates: Vec<f64> = selected.iter().map(|r| r.win_rate).collect();
        let returns: Vec<f64> = selected.iter().map(|r| r.mean_return).collect();
        let (Some(wr), Some(ret)) = (mean(&win_rates), mean(&returns)) else {
            continue;
        };
        out.push(SectorMonthRank {
            sector: sector.to_string(),
            mean_win_rate: round_to(wr, 2),
            mean_return: round_to(ret, 2),
            instruments: selected.len(),
            best_symbol: best.symbol.clone(),
            best_win_rate: best.win_rate,
        });
    }
    out.sort_by(|a, b| b.mean_win_rate.total_cmp(&a.mean_win_rate));
    out
}
