//! Seasonal-specific value types, configuration primitives and errors shared by
//! the analytics engine and the orchestrator.
#![warn(missing_docs)]

mod capability;
mod config;
mod error;
mod reports;
mod symbol;

pub use capability::Capability;
pub use config::{CacheConfig, Direction, ResampleThresholds, SeasonalConfig, SectorMetric};
pub use error::SeasonalError;
pub use reports::LoadReport;
pub use symbol::{Symbol, parse_symbol_list};
