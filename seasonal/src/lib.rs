//! Seasonal loads monthly closing prices from pluggable sources and answers
//! month-of-year questions about them.
//!
//! Overview
//! - Fetches daily history per symbol from sources implementing
//!   `seasonal_core::PriceSource`, trying them in registration order.
//! - Normalizes every provider column layout to a closing-price series,
//!   resamples to month ends and drops instruments with too little history.
//! - Aligns the survivors on a shared month-end index, derives monthly
//!   returns and the per-instrument, per-month seasonality records.
//! - Serves correlation, ranking and sector queries from an immutable,
//!   cached [`Snapshot`].
//!
//! Key behaviors and trade-offs
//! - Partial failure: a symbol that cannot be fetched or lacks history is
//!   listed in the load report with a warning; the batch only fails when no
//!   symbol survives.
//! - Timeouts: each source call is bounded by `provider_timeout`; a shared
//!   `request_timeout` deadline fails only the symbols still pending.
//! - Caching: snapshots are keyed by the symbol set and window length; a
//!   forced reload replaces the entry wholesale.
//! - Rounding: percentages are rounded half-to-even when records are built,
//!   never earlier in the pipeline.
//!
//! Examples
//! Loading a universe and asking which instruments tended to rise when the
//! reference fell:
//! ```rust,ignore
//! use std::sync::Arc;
//! use chrono::Month;
//! use seasonal::{Seasonal, Symbol};
//!
//! let seasonal = Seasonal::builder()
//!     .with_source(Arc::new(seasonal_mock::MockSource::new()))
//!     .history_years(10)
//!     .build()?;
//!
//! let spy = Symbol::new("SPY")?;
//! let snapshot = seasonal
//!     .load()
//!     .symbols(&[spy.clone(), Symbol::new("GLD")?, Symbol::new("TLT")?])?
//!     .run()
//!     .await?;
//!
//! for rec in snapshot.correlations(&spy, Month::September, 3) {
//!     println!("{} {} {:.1}%", rec.symbol, rec.period.label(), rec.pct_rose);
//! }
//! ```
//!
//! Sector comparison:
//! ```rust,ignore
//! let rows = snapshot.sector_summaries(&["Technology", "Energy"], 5);
//! ```
//!
//! See `seasonal/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Seasonal, SeasonalBuilder, tag_err};
pub use router::load::LoadBuilder;
pub use router::snapshot::{Snapshot, SnapshotKey};
pub use router::symbols::load_symbols_file;
pub use router::util::{collapse_errors, join_with_deadline};

// Re-export core types for convenience
pub use seasonal_core::{
    CacheConfig, Capability, CorrelationRecord, Direction, HistoryWindow, LoadReport,
    Month, MonthBreakdown, MonthlyPriceTable, MonthlyReturnTable, MonthlyTable, Period, PriceSource,
    RawPriceTable, ResampleThresholds, SeasonalConfig, SeasonalError, SeasonalityRecord,
    SectorMap, SectorMetric, SectorMonthRank, SectorSummaryRecord, Symbol, UNCLASSIFIED, YearRow,
    NaiveDate, parse_symbol_list, short_name, split_by_period,
};
