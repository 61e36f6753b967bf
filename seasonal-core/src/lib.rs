//! seasonal-core
//!
//! The analytical engine behind the seasonal workspace: it turns raw price
//! history into monthly returns and derives month-of-year statistics and
//! cross-asset co-movement frequencies from them.
//!
//! - `raw`: provider-shaped price tables before normalization.
//! - `series`: strictly ordered closing-price series.
//! - `table`: the sparse month-end × instrument table used for prices and returns.
//! - `timeseries`: normalize, resample to months, align, compute returns.
//! - `analysis`: seasonality, correlation, sector aggregation and derived views.
//! - `sector_map`: the static instrument → sector lookup.
//! - `persist`: lossless JSON persistence for monthly tables.
//! - `source`: the `PriceSource` trait implemented by data-acquisition collaborators.
//!
//! Everything except `PriceSource` is synchronous and pure: inputs are never
//! mutated and repeated calls with the same inputs return the same outputs.
#![warn(missing_docs)]

/// Seasonality, correlation and sector aggregation over monthly returns.
pub mod analysis;
/// Lossless persistence of monthly tables.
pub mod persist;
/// Raw provider output prior to normalization.
pub mod raw;
/// Static instrument → sector lookup.
pub mod sector_map;
/// Strictly ordered closing-price series.
pub mod series;
/// Data-acquisition collaborator trait.
pub mod source;
/// Sparse month-end × instrument tables.
pub mod table;
/// Time-series transformations from raw history to monthly returns.
pub mod timeseries;
pub mod types;

pub use analysis::correlation::{CorrelationRecord, Period, find_correlations, split_by_period};
pub use analysis::sector::{
    SectorMonthRank, SectorSummaryRecord, aggregate_by_sector, available_sectors,
    sector_month_ranking,
};
pub use analysis::seasonality::{SeasonalityRecord, compute_stats};
pub use analysis::views::{
    MonthBreakdown, YearRow, best_month, filter_min_years, month_win_rate_means,
    monthly_breakdown, rank_month, worst_month, year_month_matrix,
};
pub use persist::{read_table, table_from_json, table_to_json, write_table};
pub use raw::{FlatColumn, NestedColumn, RawColumns, RawPriceTable, RawValue};
pub use sector_map::{SectorMap, UNCLASSIFIED};
pub use series::{PricePoint, PriceSeries};
pub use source::{HistoryWindow, PriceSource};
pub use table::{MonthlyPriceTable, MonthlyReturnTable, MonthlyTable};
pub use timeseries::align::align;
pub use timeseries::calendar::{ALL_MONTHS, month_end, month_from_number, short_name};
pub use timeseries::normalize::{CloseLayout, detect_layout, normalize};
pub use timeseries::resample::resample_to_monthly;
pub use timeseries::returns::compute_returns;
pub use types::*;
