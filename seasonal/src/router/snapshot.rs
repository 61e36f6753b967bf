use std::sync::Arc;

use seasonal_core::{
    LoadReport, MonthlyPriceTable, MonthlyReturnTable, PriceSeries, SeasonalError,
    SeasonalityRecord, SectorMap, Symbol, align, compute_returns, compute_stats,
};

/// Cache identity of a load: the requested symbol set and the trailing window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotKey {
    symbols: Vec<Symbol>,
    history_years: u32,
}

impl SnapshotKey {
    /// Key for a symbol set; request order does not matter.
    #[must_use]
    pub fn new(symbols: &[Symbol], history_years: u32) -> Self {
        let mut symbols = symbols.to_vec();
        symbols.sort();
        symbols.dedup();
        Self {
            symbols,
            history_years,
        }
    }
}

/// Immutable result of one load: aligned prices, returns and the full
/// seasonality record sequence.
///
/// Snapshots are shared behind `Arc` and never modified; a reload builds a
/// new one.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub(crate) prices: MonthlyPriceTable,
    pub(crate) returns: MonthlyReturnTable,
    pub(crate) stats: Vec<SeasonalityRecord>,
    pub(crate) report: LoadReport,
    pub(crate) sectors: Arc<SectorMap>,
}

impl Snapshot {
    pub(crate) fn from_series(
        series: Vec<(Symbol, PriceSeries)>,
        report: LoadReport,
        sectors: Arc<SectorMap>,
    ) -> Self {
        let prices = align(series);
        Self::from_parts(prices, report, sectors)
    }

    fn from_parts(prices: MonthlyPriceTable, report: LoadReport, sectors: Arc<SectorMap>) -> Self {
        let returns = compute_returns(&prices);
        let stats = compute_stats(&returns);
        Self {
            prices,
            returns,
            stats,
            report,
            sectors,
        }
    }

    /// Rebuild a snapshot from a previously persisted price table.
    ///
    /// # Errors
    /// Returns `Data` if the table is structurally invalid and `NoUsableData`
    /// if it has no columns.
    pub fn from_prices(
        prices: MonthlyPriceTable,
        sectors: Arc<SectorMap>,
    ) -> Result<Self, SeasonalError> {
        prices.validate()?;
        if prices.columns().is_empty() {
            return Err(SeasonalError::NoUsableData { requested: 0 });
        }
        let symbols = prices.columns().to_vec();
        let report = LoadReport {
            requested: symbols.clone(),
            loaded: symbols,
            failed: Vec::new(),
            warnings: Vec::new(),
        };
        Ok(Self::from_parts(prices, report, sectors))
    }

    /// Month-end closing prices of every loaded instrument.
    #[must_use]
    pub const fn prices(&self) -> &MonthlyPriceTable {
        &self.prices
    }

    /// Month-over-month returns in percent.
    #[must_use]
    pub const fn returns(&self) -> &MonthlyReturnTable {
        &self.returns
    }

    /// Seasonality records, instrument by instrument, January first.
    #[must_use]
    pub fn stats(&self) -> &[SeasonalityRecord] {
        &self.stats
    }

    /// Outcome of the load that produced this snapshot.
    #[must_use]
    pub const fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Instruments present in the price table, in load order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        self.prices.columns()
    }

    /// Sector lookup used by the sector queries.
    #[must_use]
    pub fn sector_map(&self) -> &SectorMap {
        &self.sectors
    }
}
