use chrono::{Datelike, NaiveDate, Weekday};
use seasonal_core::{HistoryWindow, month_end};

/// Column arrangement a fixture is served in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    FlatOhlc,
    FieldThenSymbol,
    SymbolThenField,
    InnerClose,
    FlatBySymbol,
}

/// Shape of one synthetic instrument.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub base: f64,
    /// Average monthly return in percent, January first.
    pub seasonal: [f64; 12],
    /// Amplitude of the month-level shock in percent.
    pub volatility: f64,
    /// Shocks are taken from this name instead of the symbol; negative
    /// volatility mirrors them.
    pub shock_source: Option<&'static str>,
    pub layout: Layout,
}

const FLAT: [f64; 12] = [0.0; 12];

pub fn profile(symbol: &str) -> Option<Profile> {
    let p = match symbol {
        "AAPL" => Profile {
            base: 25.0,
            seasonal: [1.5, -0.5, 2.0, 3.0, 0.5, -1.0, 2.5, -2.0, -3.5, 1.0, 2.0, 3.0],
            volatility: 5.0,
            shock_source: None,
            layout: Layout::FlatOhlc,
        },
        "MSFT" => Profile {
            base: 30.0,
            seasonal: [1.0, 0.5, 1.5, 2.5, 0.0, 1.0, 2.0, -1.0, -2.0, 3.0, 2.0, 1.0],
            volatility: 4.0,
            shock_source: None,
            layout: Layout::FieldThenSymbol,
        },
        "NVDA" => Profile {
            base: 5.0,
            seasonal: [3.0, 2.0, -1.0, 4.0, 5.0, 1.0, 2.0, -2.0, -4.0, 3.0, 6.0, -1.0],
            volatility: 9.0,
            shock_source: None,
            layout: Layout::SymbolThenField,
        },
        "XOM" => Profile {
            base: 60.0,
            seasonal: [-1.0, 1.5, 2.0, 0.5, -0.5, -1.0, 0.0, 0.5, -1.5, 2.0, 1.0, 0.5],
            volatility: 4.5,
            shock_source: None,
            layout: Layout::InnerClose,
        },
        "SPY" => Profile {
            base: 120.0,
            seasonal: [0.5, -0.5, 1.0, 1.5, 0.3, 0.2, 1.2, -0.4, -1.2, 0.8, 1.8, 1.0],
            volatility: 3.0,
            shock_source: None,
            layout: Layout::FlatBySymbol,
        },
        "GLD" => Profile {
            base: 90.0,
            seasonal: [2.0, 0.5, -0.5, 0.0, 0.5, -1.0, 1.0, 1.5, -0.5, 0.0, -0.5, 0.5],
            volatility: -3.5,
            shock_source: Some("SPY"),
            layout: Layout::FlatOhlc,
        },
        "TLT" => Profile {
            base: 95.0,
            seasonal: FLAT,
            volatility: -2.5,
            shock_source: Some("SPY"),
            layout: Layout::FieldThenSymbol,
        },
        "JPM" => Profile {
            base: 40.0,
            seasonal: [1.0, 0.0, -1.0, 1.5, -0.5, 0.5, 1.0, -1.5, -0.5, 1.5, 2.5, 1.0],
            volatility: 5.5,
            shock_source: Some("SPY"),
            layout: Layout::FlatOhlc,
        },
        "KO" => Profile {
            base: 35.0,
            seasonal: [-0.5, 0.5, 1.0, 1.0, 0.5, -0.5, 1.0, -0.5, -1.0, 0.5, 1.0, 1.5],
            volatility: 2.0,
            shock_source: None,
            layout: Layout::SymbolThenField,
        },
        "AAL" | "DAL" => Profile {
            base: 20.0,
            seasonal: [-2.0, -1.0, 1.0, 2.0, 3.0, 1.0, -2.0, -3.0, -2.0, 1.0, 2.0, 0.5],
            volatility: 8.0,
            shock_source: Some("AAL"),
            layout: Layout::FlatOhlc,
        },
        "TIMEOUT" | "SHORT" => Profile {
            base: 10.0,
            seasonal: FLAT,
            volatility: 2.0,
            shock_source: None,
            layout: Layout::FlatOhlc,
        },
        _ => return None,
    };
    Some(p)
}

/// Deterministic value in `[-1, 1)` for a (name, year, month) triple.
fn shock(name: &str, year: i32, month: u32) -> f64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for b in name
        .bytes()
        .chain(year.to_le_bytes())
        .chain(month.to_le_bytes())
    {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0100_0000_01b3);
    }
    #[allow(clippy::cast_precision_loss)]
    let unit = (h >> 11) as f64 / (1u64 << 53) as f64;
    unit.mul_add(2.0, -1.0)
}

fn monthly_return(symbol: &str, p: &Profile, date: NaiveDate) -> f64 {
    let source = p.shock_source.unwrap_or(symbol);
    let seasonal = p.seasonal[date.month0() as usize];
    p.volatility.mul_add(shock(source, date.year(), date.month()), seasonal)
}

/// Weekday closes for `symbol` across `window`.
///
/// Each calendar month moves the price by the profile's seasonal drift plus
/// a deterministic shock, spread linearly over the days of the month.
pub fn closes(symbol: &str, p: &Profile, window: HistoryWindow) -> Vec<(NaiveDate, f64)> {
    let mut out = Vec::new();
    let mut level = p.base;
    let mut current_month: Option<NaiveDate> = None;
    let mut day = window.start;
    while day <= window.end {
        let Some(key) = month_end(day) else {
            break;
        };
        if let Some(prev) = current_month
            && prev != key
        {
            level *= 1.0 + monthly_return(symbol, p, prev) / 100.0;
        }
        current_month = Some(key);

        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            let r = monthly_return(symbol, p, day);
            let progress = f64::from(day.day()) / f64::from(key.day());
            out.push((day, level * (r / 100.0).mul_add(progress, 1.0)));
        }
        let Some(next) = day.succ_opt() else {
            break;
        };
        day = next;
    }
    out
}
