// Re-export helpers so tests can `use helpers::*;`
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Months, NaiveDate};
use seasonal::{PriceSource, RawPriceTable, Seasonal, SeasonalBuilder, Symbol};
use seasonal_core::{RawValue, month_end};

// ---------- Lightweight fixtures and helpers for tests ----------

/// Fixed end of every history window so tests do not depend on today's date.
pub const AS_OF: (i32, u32, u32) = (2024, 6, 28);

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid test date")
}

pub fn sym(s: &str) -> Symbol {
    Symbol::new(s).expect("valid test symbol")
}

pub fn syms(list: &[&str]) -> Vec<Symbol> {
    list.iter().map(|s| sym(s)).collect()
}

/// Builder pinned to [`AS_OF`] with a single source registered.
pub fn builder_with(source: Arc<dyn PriceSource>) -> SeasonalBuilder {
    let (y, m, day) = AS_OF;
    Seasonal::builder()
        .with_source(source)
        .as_of(d(y, m, day))
        .provider_timeout(Duration::from_secs(5))
}

/// Month-end closing prices from December 2018 through December 2023,
/// starting at 100 and compounding `pct(date)` percent each month.
pub fn monthly_closes(pct: impl Fn(NaiveDate) -> f64) -> RawPriceTable {
    let mut index = Vec::new();
    let mut values = Vec::new();
    let mut first = d(2018, 12, 1);
    let mut price = 100.0;
    index.push(month_end(first).expect("month end"));
    values.push(RawValue::Number(price));
    while first < d(2023, 12, 1) {
        first = first + Months::new(1);
        let end = month_end(first).expect("month end");
        price *= 1.0 + pct(end) / 100.0;
        index.push(end);
        values.push(RawValue::Number(price));
    }
    RawPriceTable::flat(index, [("Close", values)])
}

/// Rises 1% every month except in September of the given years, where it
/// falls 2%.
pub fn falls_in_september(years: &'static [i32]) -> RawPriceTable {
    monthly_closes(move |date| {
        if date.month() == 9 && years.contains(&date.year()) {
            -2.0
        } else {
            1.0
        }
    })
}

/// Falls 1% every month except September, where it rises 3%.
pub fn rises_only_in_september() -> RawPriceTable {
    monthly_closes(|date| if date.month() == 9 { 3.0 } else { -1.0 })
}
