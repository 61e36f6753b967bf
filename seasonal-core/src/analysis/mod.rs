//! Descriptive statistics over monthly return tables.
//!
//! Every function here is a pure view: it reads a table or record slice and
//! returns freshly built records. Rounding happens once, when a record is
//! finalized; all intermediate arithmetic runs on unrounded values.

/// Opposite-direction co-movement search.
pub mod correlation;
/// Sector-level re-aggregation of seasonality records.
pub mod sector;
/// Per-(instrument, month) win/loss counts and return distribution.
pub mod seasonality;
/// Filters, rankings and per-instrument breakdowns.
pub mod views;

mod stats;
