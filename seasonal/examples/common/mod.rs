#![allow(dead_code)]

use std::sync::Arc;

use seasonal::{PriceSource, Seasonal, Symbol};

/// Fixture universe served by the mock source.
pub const UNIVERSE: &[&str] = &["AAPL", "MSFT", "NVDA", "XOM", "SPY", "GLD", "TLT", "JPM", "KO", "AAL", "DAL"];

#[must_use]
pub fn get_source() -> Arc<dyn PriceSource> {
    println!("--- (Using deterministic mock source) ---");
    Arc::new(seasonal_mock::MockSource::new())
}

pub fn build() -> Result<Seasonal, seasonal::SeasonalError> {
    Seasonal::builder()
        .with_source(get_source())
        .history_years(10)
        .build()
}

pub fn universe() -> Result<Vec<Symbol>, seasonal::SeasonalError> {
    UNIVERSE.iter().map(|s| Symbol::new(s)).collect()
}
