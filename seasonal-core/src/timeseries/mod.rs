//! Time-series transformations from raw provider history to monthly returns.
//!
//! Modules include:
//! - `normalize`: locate the closing-price column in a raw table
//! - `resample`: keep the last observation of each calendar month
//! - `align`: merge per-instrument monthly series into one table
//! - `returns`: month-over-month percentage changes
//! - `calendar`: month-end and month-number helpers
/// Merge utilities for joining per-instrument monthly series.
pub mod align;
/// Calendar helpers: month ends and month labels.
pub mod calendar;
/// Closing-price extraction from provider-shaped tables.
pub mod normalize;
/// Resampling of daily/irregular series to one point per month.
pub mod resample;
/// Percentage returns over monthly price tables.
pub mod returns;
