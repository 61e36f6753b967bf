//! Re-export of foundational types from `seasonal-types` and `chrono`.
// Consolidated re-exports so downstream crates can depend on `seasonal-core` only

pub use seasonal_types::{
    CacheConfig, Capability, Direction, LoadReport, ResampleThresholds, SeasonalConfig,
    SeasonalError, SectorMetric, Symbol, parse_symbol_list,
};

pub use chrono::{Month, NaiveDate};
