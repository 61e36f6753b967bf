use chrono::NaiveDate;
use seasonal_core::{RawPriceTable, RawValue};

use super::history::Layout;

/// Every 61st row is served as a gap, the way providers report halted days.
const GAP_EVERY: usize = 61;

fn close_cells(closes: &[(NaiveDate, f64)]) -> Vec<RawValue> {
    closes
        .iter()
        .enumerate()
        .map(|(i, (_, c))| {
            if i % GAP_EVERY == GAP_EVERY - 1 {
                RawValue::Missing
            } else {
                RawValue::Number(*c)
            }
        })
        .collect()
}

fn scaled(closes: &[(NaiveDate, f64)], factor: f64) -> Vec<RawValue> {
    closes.iter().map(|(_, c)| RawValue::Number(c * factor)).collect()
}

fn volume(closes: &[(NaiveDate, f64)]) -> Vec<RawValue> {
    closes.iter().map(|_| RawValue::Number(1_000_000.0)).collect()
}

/// Wrap daily closes in the provider column arrangement `layout`.
pub fn to_raw(symbol: &str, layout: Layout, closes: &[(NaiveDate, f64)]) -> RawPriceTable {
    let index: Vec<NaiveDate> = closes.iter().map(|(d, _)| *d).collect();
    let close = close_cells(closes);
    match layout {
        Layout::FlatOhlc => RawPriceTable::flat(
            index,
            [
                ("Open", scaled(closes, 0.995)),
                ("High", scaled(closes, 1.01)),
                ("Low", scaled(closes, 0.99)),
                ("Close", close),
                ("Volume", volume(closes)),
            ],
        ),
        Layout::FieldThenSymbol => RawPriceTable::nested(
            index,
            [
                (("Open", symbol), scaled(closes, 0.995)),
                (("Close", symbol), close),
                (("Volume", symbol), volume(closes)),
            ],
        ),
        Layout::SymbolThenField => RawPriceTable::nested(
            index,
            [
                ((symbol, "Open"), scaled(closes, 0.995)),
                ((symbol, "Close"), close),
            ],
        ),
        Layout::InnerClose => RawPriceTable::nested(
            index,
            [(("Price", "Open"), scaled(closes, 0.995)), (("Price", "Close"), close)],
        ),
        Layout::FlatBySymbol => RawPriceTable::flat(index, [(symbol, close)]),
    }
}

/// A table with no closing-price column under any known arrangement.
pub fn without_close(closes: &[(NaiveDate, f64)]) -> RawPriceTable {
    let index: Vec<NaiveDate> = closes.iter().map(|(d, _)| *d).collect();
    RawPriceTable::flat(index, [("Volume", volume(closes))])
}
