use std::collections::HashSet;
use std::sync::Arc;

use seasonal_core::{
    Capability, HistoryWindow, LoadReport, PriceSeries, SeasonalError, Symbol,
    resample_to_monthly,
};

use crate::Seasonal;
use crate::router::snapshot::{Snapshot, SnapshotKey};

/// Builder to orchestrate a batch load of monthly history for many symbols.
pub struct LoadBuilder<'a> {
    pub(crate) seasonal: &'a Seasonal,
    pub(crate) symbols: Vec<Symbol>,
    pub(crate) history_years: Option<u32>,
    pub(crate) force_reload: bool,
    pub(crate) list_warnings: Vec<SeasonalError>,
}

impl<'a> LoadBuilder<'a> {
    /// Create a new builder bound to a `Seasonal` instance.
    ///
    /// Behavior:
    /// - Starts with an empty symbol list.
    /// - Uses the orchestrator's `history_years` unless overridden.
    /// - Serves a cached snapshot when one exists for the same symbol set
    ///   and window.
    #[must_use]
    pub const fn new(seasonal: &'a Seasonal) -> Self {
        Self {
            seasonal,
            symbols: Vec::new(),
            history_years: None,
            force_reload: false,
            list_warnings: Vec::new(),
        }
    }

    /// Replace the symbol list.
    ///
    /// # Errors
    /// Returns an error if duplicate symbols are detected in the provided list.
    pub fn symbols(mut self, symbols: &[Symbol]) -> Result<Self, SeasonalError> {
        let mut seen = HashSet::new();
        for s in symbols {
            if !seen.insert(s) {
                return Err(SeasonalError::InvalidArg(format!(
                    "duplicate symbol '{s}' in symbols list"
                )));
            }
        }

        self.symbols = symbols.to_vec();
        Ok(self)
    }

    /// Add a single symbol to the list.
    ///
    /// # Errors
    /// Returns an error if the symbol already exists in the list.
    pub fn add_symbol(mut self, symbol: Symbol) -> Result<Self, SeasonalError> {
        if self.symbols.contains(&symbol) {
            return Err(SeasonalError::InvalidArg(format!(
                "duplicate symbol '{symbol}' already exists in symbols list"
            )));
        }

        self.symbols.push(symbol);
        Ok(self)
    }

    /// Override the trailing window, in years.
    #[must_use]
    pub const fn history_years(mut self, years: u32) -> Self {
        self.history_years = Some(years);
        self
    }

    /// Discard any cached snapshot for this request and fetch again.
    #[must_use]
    pub const fn force_reload(mut self, yes: bool) -> Self {
        self.force_reload = yes;
        self
    }

    /// Execute the load and return the resulting snapshot.
    ///
    /// Behavior and trade-offs:
    /// - Fetches every symbol concurrently, each bounded by the per-source
    ///   timeout and tried against the sources in registration order.
    /// - Normalizes, resamples to month ends and applies the history
    ///   thresholds per symbol; a symbol that fails any step is listed in
    ///   `report.failed` with a warning and does not abort the batch.
    /// - The request deadline, when set, is shared by every symbol; a symbol
    ///   still pending when it passes fails with `RequestTimeout` while the
    ///   symbols already fetched are kept.
    /// - Aligns the surviving series, computes returns and seasonality once,
    ///   and caches the immutable snapshot under the symbol set and window.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty or duplicated symbol list or a zero
    /// window, and `NoUsableData` if not a single symbol survives.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "seasonal::load::run",
            skip(self),
            fields(symbols = self.symbols.len(), force_reload = self.force_reload),
        )
    )]
    pub async fn run(self) -> Result<Arc<Snapshot>, SeasonalError> {
        if self.symbols.is_empty() {
            return Err(SeasonalError::InvalidArg(
                "no symbols specified for load".into(),
            ));
        }

        // Defensive check for duplicates (should not happen if using the builder correctly)
        let mut seen = HashSet::new();
        for s in &self.symbols {
            if !seen.insert(s) {
                return Err(SeasonalError::InvalidArg(format!(
                    "duplicate symbol '{s}' detected in symbols list"
                )));
            }
        }

        let seasonal = self.seasonal;
        let years = self.history_years.unwrap_or(seasonal.cfg.history_years);
        let window = HistoryWindow::trailing_years(seasonal.window_end(), years)?;
        let key = SnapshotKey::new(&self.symbols, years);

        if self.force_reload {
            seasonal.cache.invalidate(&key).await;
        } else if let Some(hit) = seasonal.cache.get(&key).await {
            #[cfg(feature = "tracing")]
            tracing::debug!(years, "snapshot cache hit");
            return Ok(hit);
        }

        let thresholds = seasonal.cfg.thresholds;
        // One shared deadline; symbols still pending when it passes fail alone.
        let deadline = seasonal
            .cfg
            .request_timeout
            .map(|d| tokio::time::Instant::now() + d);
        let tasks = self.symbols.iter().map(|symbol| async move {
            let fetch = async {
                match seasonal.fetch_series(symbol, window).await {
                    Ok(daily) => resample_to_monthly(&daily, &thresholds).ok_or_else(|| {
                        SeasonalError::not_found(format!(
                            "enough history for {symbol} ({} observations)",
                            daily.len()
                        ))
                    }),
                    Err(e) => Err(e),
                }
            };
            let outcome = match deadline {
                Some(at) => tokio::time::timeout_at(at, fetch)
                    .await
                    .unwrap_or_else(|_| {
                        Err(SeasonalError::request_timeout(format!(
                            "{}:{}",
                            Capability::Load,
                            Capability::History
                        )))
                    }),
                None => fetch.await,
            };
            (symbol.clone(), outcome)
        });

        let joined: Vec<(Symbol, Result<PriceSeries, SeasonalError>)> =
            futures::future::join_all(tasks).await;
        let mut report = LoadReport {
            requested: self.symbols.clone(),
            warnings: self.list_warnings,
            ..LoadReport::default()
        };
        let mut series: Vec<(Symbol, PriceSeries)> = Vec::new();
        for (symbol, outcome) in joined {
            match outcome {
                Ok(monthly) => {
                    report.loaded.push(symbol.clone());
                    series.push((symbol, monthly));
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(symbol = %symbol, error = %e, "symbol skipped");
                    report.failed.push(symbol);
                    report.warnings.push(e);
                }
            }
        }

        if series.is_empty() {
            return Err(SeasonalError::NoUsableData {
                requested: self.symbols.len(),
            });
        }

        let snapshot = Arc::new(Snapshot::from_series(
            series,
            report,
            Arc::clone(&seasonal.sectors),
        ));
        #[cfg(feature = "tracing")]
        tracing::debug!(
            loaded = snapshot.report.loaded.len(),
            failed = snapshot.report.failed.len(),
            months = snapshot.prices.len(),
            records = snapshot.stats.len(),
            "snapshot built"
        );
        seasonal.cache.insert(key, Arc::clone(&snapshot)).await;
        Ok(snapshot)
    }
}

impl Seasonal {
    /// Begin building a batch load.
    ///
    /// Typical usage: chain `symbols`/`history_years` then call `run()`.
    #[must_use]
    pub const fn load(&'_ self) -> LoadBuilder<'_> {
        LoadBuilder::new(self)
    }

    /// Build a snapshot from a previously persisted price table, bypassing
    /// the sources and the cache.
    ///
    /// # Errors
    /// Returns `Data` for a structurally invalid table and `NoUsableData` for
    /// a table without columns.
    pub fn snapshot_from_prices(
        &self,
        prices: seasonal_core::MonthlyPriceTable,
    ) -> Result<Arc<Snapshot>, SeasonalError> {
        Snapshot::from_prices(prices, Arc::clone(&self.sectors)).map(Arc::new)
    }
}
