//! Configuration types shared across the analytics engine and orchestrator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Minimum-history policy applied when resampling a raw series to months.
///
/// An instrument is kept only if its raw series has at least
/// `min_raw_observations` points AND the monthly series has at least
/// `min_months` months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResampleThresholds {
    /// Lower bound on raw (daily/weekly) observations.
    pub min_raw_observations: usize,
    /// Lower bound on resulting calendar months.
    pub min_months: usize,
}

impl ResampleThresholds {
    /// Thresholds that accept any non-empty series.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            min_raw_observations: 1,
            min_months: 1,
        }
    }
}

impl Default for ResampleThresholds {
    fn default() -> Self {
        Self {
            min_raw_observations: 50,
            min_months: 11,
        }
    }
}

/// Metric averaged across instruments when summarizing a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SectorMetric {
    /// Mean of per-instrument win rates.
    #[default]
    WinRate,
    /// Mean of per-instrument mean returns.
    MeanReturn,
}

/// Ranking direction for month leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Highest win rate first.
    #[default]
    Rising,
    /// Lowest win rate first.
    Falling,
}

/// Configuration for the snapshot cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of snapshots retained.
    pub capacity: u64,
    /// Time-to-live for a cached snapshot.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 16,
            ttl: Duration::from_secs(3600),
        }
    }
}

/// Global configuration for the `Seasonal` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalConfig {
    /// Trailing window of history requested from the price source, in years.
    pub history_years: u32,
    /// Minimum-history policy for resampling.
    pub thresholds: ResampleThresholds,
    /// Timeout for a single symbol's history request.
    pub provider_timeout: Duration,
    /// Optional overall deadline for a batch load.
    pub request_timeout: Option<Duration>,
    /// Snapshot cache sizing.
    pub cache: CacheConfig,
}

impl Default for SeasonalConfig {
    fn default() -> Self {
        Self {
            history_years: 18,
            thresholds: ResampleThresholds::default(),
            provider_timeout: Duration::from_secs(30),
            request_timeout: None,
            cache: CacheConfig::default(),
        }
    }
}
