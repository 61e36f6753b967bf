use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache;
use seasonal_core::{PriceSeries, PriceSource, SectorMap, SeasonalError, Symbol, normalize};
use seasonal_types::{CacheConfig, ResampleThresholds, SeasonalConfig};

use crate::router::snapshot::{Snapshot, SnapshotKey};
use crate::router::util::collapse_errors;

/// Orchestrator that loads price history from registered sources and serves
/// seasonality snapshots.
pub struct Seasonal {
    pub(crate) sources: Vec<Arc<dyn PriceSource>>,
    pub(crate) cfg: SeasonalConfig,
    pub(crate) sectors: Arc<SectorMap>,
    pub(crate) as_of: Option<NaiveDate>,
    pub(crate) cache: Cache<SnapshotKey, Arc<Snapshot>>,
}

/// Builder for constructing a `Seasonal` orchestrator with custom configuration.
pub struct SeasonalBuilder {
    sources: Vec<Arc<dyn PriceSource>>,
    cfg: SeasonalConfig,
    sectors: SectorMap,
    as_of: Option<NaiveDate>,
}

impl Default for SeasonalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SeasonalBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no sources; you must register at least one via [`with_source`].
    /// - Defaults: 18 years of history, 50 raw observations and 11 months
    ///   minimum per instrument, 30s per-source timeout, no batch deadline,
    ///   the built-in sector map, and a 16-entry snapshot cache with a one
    ///   hour lifetime.
    ///
    /// [`with_source`]: SeasonalBuilder::with_source
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: SeasonalConfig::default(),
            sectors: SectorMap::builtin(),
            as_of: None,
        }
    }

    /// Register a price source.
    ///
    /// Sources are tried in registration order for each symbol; the first
    /// one that yields a usable closing-price series wins.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn PriceSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: SeasonalConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Default trailing window, in years, for loads that do not set one.
    #[must_use]
    pub const fn history_years(mut self, years: u32) -> Self {
        self.cfg.history_years = years;
        self
    }

    /// Minimum history an instrument needs to be kept.
    #[must_use]
    pub const fn thresholds(mut self, thresholds: ResampleThresholds) -> Self {
        self.cfg.thresholds = thresholds;
        self
    }

    /// Set the per-source request timeout.
    ///
    /// A source that does not answer in time is recorded as a timeout for
    /// that symbol and the next source, if any, is tried.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set a deadline shared by the concurrent fetches of a batch.
    ///
    /// Symbols still pending when it passes fail with `RequestTimeout`; the
    /// rest of the batch is kept.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Configure the snapshot cache.
    #[must_use]
    pub const fn cache(mut self, cache: CacheConfig) -> Self {
        self.cfg.cache = cache;
        self
    }

    /// Replace the sector lookup.
    #[must_use]
    pub fn sector_map(mut self, sectors: SectorMap) -> Self {
        self.sectors = sectors;
        self
    }

    /// Pin the last date of every history window instead of using today.
    #[must_use]
    pub const fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Build the `Seasonal` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source has been registered via [`with_source`]
    /// or if the default history window is zero years.
    ///
    /// [`with_source`]: SeasonalBuilder::with_source
    pub fn build(self) -> Result<Seasonal, SeasonalError> {
        if self.sources.is_empty() {
            return Err(SeasonalError::InvalidArg(
                "no sources registered; add at least one via with_source(...)".to_string(),
            ));
        }
        if self.cfg.history_years == 0 {
            return Err(SeasonalError::InvalidArg(
                "history_years must be greater than zero".to_string(),
            ));
        }
        let cache = Cache::builder()
            .max_capacity(self.cfg.cache.capacity)
            .time_to_live(self.cfg.cache.ttl)
            .build();
        Ok(Seasonal {
            sources: self.sources,
            cfg: self.cfg,
            sectors: Arc::new(self.sectors),
            as_of: self.as_of,
            cache,
        })
    }
}

impl Seasonal {
    /// Start building a new `Seasonal` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let seasonal = seasonal::Seasonal::builder()
    ///     .with_source(Arc::new(seasonal_mock::MockSource::new()))
    ///     .history_years(10)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> SeasonalBuilder {
        SeasonalBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SeasonalConfig {
        &self.cfg
    }

    /// Sector lookup shared by every snapshot built by this instance.
    #[must_use]
    pub fn sectors(&self) -> &SectorMap {
        &self.sectors
    }

    /// Drop every cached snapshot.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    pub(crate) fn window_end(&self) -> NaiveDate {
        self.as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Wrap a source future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "seasonal::core::source_call_with_timeout",
            skip(fut),
            fields(
                source = source_name,
                symbol = %symbol,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source_name: &'static str,
        symbol: &Symbol,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, SeasonalError>
    where
        Fut: core::future::Future<Output = Result<T, SeasonalError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(SeasonalError::source_timeout(source_name, symbol.as_str())))
    }

    /// Fetch and normalize one symbol, trying sources in registration order.
    ///
    /// An empty table or a table without a recognizable closing-price column
    /// counts as "not found" for that source. Returns `NotFound` only when
    /// every source came up empty; otherwise the first real failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "seasonal::core::fetch_series",
            skip(self, window),
            fields(symbol = %symbol),
        )
    )]
    pub(crate) async fn fetch_series(
        &self,
        symbol: &Symbol,
        window: seasonal_core::HistoryWindow,
    ) -> Result<PriceSeries, SeasonalError> {
        let mut errors: Vec<SeasonalError> = Vec::new();
        for src in &self.sources {
            let res = Self::source_call_with_timeout(
                src.name(),
                symbol,
                self.cfg.provider_timeout,
                src.history(symbol, window),
            )
            .await;
            match res {
                Ok(raw) => match normalize(&raw, symbol) {
                    Some(series) => return Ok(series),
                    None => errors.push(SeasonalError::not_found(format!(
                        "closing prices for {symbol} from {}",
                        src.name()
                    ))),
                },
                Err(e @ (SeasonalError::NotFound { .. } | SeasonalError::SourceTimeout { .. })) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(src.name(), e)),
            }
        }
        Err(collapse_errors(symbol, errors))
    }
}

/// Attribute an untagged error to the source that produced it.
pub fn tag_err(source: &str, e: SeasonalError) -> SeasonalError {
    match e {
        e @ (SeasonalError::NotFound { .. }
        | SeasonalError::SourceTimeout { .. }
        | SeasonalError::Source { .. }
        | SeasonalError::RequestTimeout { .. }) => e,
        other => SeasonalError::provider(source, other.to_string()),
    }
}

pub(crate) async fn with_request_deadline<F, T>(
    deadline: Option<Duration>,
    fut: F,
) -> Result<T, SeasonalError>
where
    F: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| SeasonalError::request_timeout("request")),
        None => Ok(fut.await),
    }
}
