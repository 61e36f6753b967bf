use chrono::Month;
use seasonal_core::{
    CorrelationRecord, Direction, MonthBreakdown, SeasonalError, SeasonalityRecord,
    SectorMonthRank, SectorSummaryRecord, Symbol, YearRow, available_sectors,
    aggregate_by_sector, best_month, filter_min_years, find_correlations, month_win_rate_means,
    monthly_breakdown, rank_month, sector_month_ranking, worst_month, year_month_matrix,
};

use crate::router::snapshot::Snapshot;

impl Snapshot {
    /// Instruments that tended to rise when `reference` fell in `month`.
    ///
    /// See [`find_correlations`] for the exact semantics. An unknown
    /// reference, or one that never fell in `month`, yields an empty result.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "seasonal::query::correlations",
            skip(self),
            fields(reference = %reference),
        )
    )]
    #[must_use]
    pub fn correlations(
        &self,
        reference: &Symbol,
        month: Month,
        min_overlap_years: usize,
    ) -> Vec<CorrelationRecord> {
        find_correlations(&self.returns, reference, month, min_overlap_years)
    }

    /// Like [`Snapshot::correlations`] but rejects a reference that is not loaded.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `reference` is not part of this snapshot.
    pub fn correlations_checked(
        &self,
        reference: &Symbol,
        month: Month,
        min_overlap_years: usize,
    ) -> Result<Vec<CorrelationRecord>, SeasonalError> {
        if !self.prices.has_column(reference) {
            return Err(SeasonalError::InvalidArg(format!(
                "reference symbol '{reference}' is not loaded"
            )));
        }
        Ok(self.correlations(reference, month, min_overlap_years))
    }

    /// Seasonality records observed over at least `min_years` years.
    #[must_use]
    pub fn stats_min_years(&self, min_years: usize) -> Vec<SeasonalityRecord> {
        filter_min_years(&self.stats, min_years)
    }

    /// All records of one instrument, January first.
    #[must_use]
    pub fn stats_for(&self, symbol: &Symbol) -> Vec<SeasonalityRecord> {
        self.stats
            .iter()
            .filter(|r| &r.symbol == symbol)
            .cloned()
            .collect()
    }

    /// Top `top_n` instruments for `month`, after the `min_years` filter.
    #[must_use]
    pub fn rank_month(
        &self,
        month: Month,
        direction: Direction,
        top_n: usize,
        min_years: usize,
    ) -> Vec<SeasonalityRecord> {
        rank_month(&self.stats_min_years(min_years), month, direction, top_n)
    }

    /// Mean win rate per calendar month across the universe.
    #[must_use]
    pub fn month_win_rate_means(&self, min_years: usize) -> Vec<(Month, f64)> {
        month_win_rate_means(&self.stats_min_years(min_years))
    }

    /// Calendar month with the highest mean win rate.
    #[must_use]
    pub fn best_month(&self, min_years: usize) -> Option<Month> {
        best_month(&self.stats_min_years(min_years))
    }

    /// Calendar month with the lowest mean win rate.
    #[must_use]
    pub fn worst_month(&self, min_years: usize) -> Option<Month> {
        worst_month(&self.stats_min_years(min_years))
    }

    /// Every return of `symbol`, grouped by calendar month.
    #[must_use]
    pub fn monthly_breakdown(&self, symbol: &Symbol) -> Vec<MonthBreakdown> {
        monthly_breakdown(&self.returns, symbol)
    }

    /// Year × month grid of `symbol`'s returns.
    #[must_use]
    pub fn year_month_matrix(&self, symbol: &Symbol) -> Vec<YearRow> {
        year_month_matrix(&self.returns, symbol)
    }

    /// Loaded instruments grouped by sector, largest sector first.
    #[must_use]
    pub fn available_sectors(&self) -> Vec<(String, Vec<Symbol>)> {
        available_sectors(self.prices.columns(), &self.sectors)
    }

    /// Per-sector, per-month means for the requested sectors.
    #[must_use]
    pub fn sector_summaries<S: AsRef<str>>(
        &self,
        sectors: &[S],
        min_years: usize,
    ) -> Vec<SectorSummaryRecord> {
        aggregate_by_sector(&self.stats_min_years(min_years), &self.sectors, sectors)
    }

    /// Requested sectors compared in one month, strongest first.
    #[must_use]
    pub fn sector_month_ranking<S: AsRef<str>>(
        &self,
        sectors: &[S],
        month: Month,
        min_years: usize,
    ) -> Vec<SectorMonthRank> {
        sector_month_ranking(&self.stats_min_years(min_years), &self.sectors, sectors, month)
    }
}
