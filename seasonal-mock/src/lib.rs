//! Deterministic price sources for tests and examples.
//!
//! [`MockSource`] serves synthetic daily histories with a built-in seasonal
//! pattern in every raw column layout the normalizer understands, and
//! reserves a few symbols for failure paths:
//!
//! - `FAIL`: the source errors.
//! - `TIMEOUT`: the source answers after a short delay.
//! - `EMPTY`: an empty table.
//! - `SHORT`: a few weeks of data, too little to resample.
//! - `JUNK`: a table without any closing-price column.
//!
//! Any other symbol without a fixture is reported as not found.
//! [`DynamicMockSource`] instead defers every answer to a controller.
use std::time::Duration;

use async_trait::async_trait;
use seasonal_core::{
    Capability, HistoryWindow, PriceSource, RawPriceTable, SeasonalError, Symbol,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// Symbols served by [`MockSource`] with a full synthetic history.
pub const FIXTURE_SYMBOLS: &[&str] = &[
    "AAPL", "MSFT", "NVDA", "XOM", "SPY", "GLD", "TLT", "JPM", "KO", "AAL", "DAL",
];

const SHORT_DAYS: usize = 20;

/// Mock price source for CI-safe examples. Provides deterministic data from synthetic fixtures.
pub struct MockSource {
    latency: Duration,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Source whose `TIMEOUT` symbol answers after 200ms.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency: Duration::from_millis(200),
        }
    }

    /// Override the delay applied to the `TIMEOUT` symbol.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn maybe_fail_or_delay(&self, symbol: &str) -> Result<(), SeasonalError> {
        match symbol {
            "FAIL" => Err(SeasonalError::provider(
                "seasonal-mock",
                format!("forced failure: {}", Capability::History),
            )),
            "TIMEOUT" => {
                tokio::time::sleep(self.latency).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl PriceSource for MockSource {
    fn name(&self) -> &'static str {
        "seasonal-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn history(
        &self,
        symbol: &Symbol,
        window: HistoryWindow,
    ) -> Result<RawPriceTable, SeasonalError> {
        let s = symbol.as_str();
        self.maybe_fail_or_delay(s).await?;
        match s {
            "EMPTY" => return Ok(RawPriceTable::empty()),
            "JUNK" => {
                let p = fixtures::history::profile("SHORT")
                    .ok_or_else(|| SeasonalError::not_found("fixture profile"))?;
                let closes = fixtures::history::closes(s, &p, window);
                return Ok(fixtures::layouts::without_close(&closes));
            }
            _ => {}
        }
        let profile = fixtures::history::profile(s)
            .ok_or_else(|| SeasonalError::not_found(format!("history for {s}")))?;
        let mut closes = fixtures::history::closes(s, &profile, window);
        if s == "SHORT" {
            let keep = closes.len().saturating_sub(SHORT_DAYS);
            closes.drain(..keep);
        }
        Ok(fixtures::layouts::to_raw(s, profile.layout, &closes))
    }
}
