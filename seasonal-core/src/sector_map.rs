use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sector assigned to every identifier the map does not know.
pub const UNCLASSIFIED: &str = "Unclassified";

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "Airlines",
        &[
            "AAL", "DAL", "UAL", "LUV", "JBLU", "ALK", "SAVE", "HA", "SKYW", "MESA", "RYAAY",
            "VLRS",
        ],
    ),
    (
        "Technology",
        &[
            "AAPL", "MSFT", "GOOG", "GOOGL", "META", "AMZN", "NFLX", "CRM", "ADBE", "ORCL", "NOW",
            "INTU", "SHOP", "SQ", "UBER", "ABNB", "SNAP", "PINS", "SPOT", "PLTR", "AI", "ACN",
        ],
    ),
    (
        "Semiconductors",
        &[
            "NVDA", "AMD", "INTC", "AVGO", "QCOM", "TXN", "AMAT", "LRCX", "KLAC", "MU", "MRVL",
            "ON", "ASML", "TSM", "ARM", "ALAB",
        ],
    ),
    (
        "Banks",
        &[
            "JPM", "BAC", "WFC", "GS", "MS", "C", "USB", "PNC", "SCHW", "BK", "STT", "CFG", "FITB",
            "KEY", "RF", "HBAN", "V", "MA", "AXP", "COF", "BRK-B", "BBAR", "BMA", "GGAL", "SUPV",
        ],
    ),
    (
        "Healthcare",
        &[
            "JNJ", "PFE", "UNH", "ABBV", "MRK", "LLY", "TMO", "ABT", "AMGN", "BMY", "GILD", "ISRG",
            "VRTX", "REGN", "ZTS", "SYK", "MDT", "DHR", "ELV", "CI", "HCA", "IQV", "BIIB",
        ],
    ),
    (
        "Mining",
        &[
            "AEM", "NEM", "GOLD", "FNV", "WPM", "AUY", "KGC", "AG", "PAAS", "HL", "CDE", "FSM",
            "BHP", "RIO", "VALE", "FCX", "SCCO", "TECK", "CLF", "X", "NUE", "STLD", "AA",
        ],
    ),
    (
        "Energy",
        &[
            "XOM", "CVX", "COP", "SLB", "EOG", "MPC", "PSX", "VLO", "PXD", "DVN", "OXY", "HAL",
            "BKR", "FANG", "HES", "YPF", "VIST", "PAM",
        ],
    ),
    (
        "Consumer",
        &[
            "KO", "PEP", "PG", "COST", "WMT", "HD", "MCD", "NKE", "SBUX", "TGT", "LOW", "DG",
            "DLTR", "ROST", "TJX", "ANF", "ABEV",
        ],
    ),
    (
        "ETFs",
        &[
            "SPY", "QQQ", "IWM", "DIA", "ACWI", "ARKK", "XLF", "XLE", "XLV", "XLK", "XLI", "XLP",
            "GDX", "GDXJ", "SLV", "GLD", "EEM", "VWO", "EWZ", "EFA",
        ],
    ),
    (
        "Telecom",
        &["T", "VZ", "TMUS", "CMCSA", "CHTR", "DIS", "WBD"],
    ),
    (
        "Industrials",
        &[
            "CAT", "DE", "BA", "HON", "UNP", "GE", "RTX", "LMT", "NOC", "GD", "MMM", "FDX", "UPS",
        ],
    ),
    (
        "Real Estate",
        &[
            "AMT", "PLD", "CCI", "EQIX", "SPG", "O", "DLR", "PSA", "WELL", "AVB", "EQR",
        ],
    ),
    (
        "LATAM",
        &[
            "MELI", "NU", "AMX", "ARCO", "GLOB", "DLO", "STNE", "CAAP", "CRESY", "CEPU", "EDN",
            "LOMA", "TEO", "TGS", "TX", "IRS",
        ],
    ),
];

/// Static identifier → sector lookup.
///
/// Lookup is an exact, case-sensitive match on the identifier and is total:
/// unknown identifiers resolve to [`UNCLASSIFIED`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorMap {
    entries: BTreeMap<String, String>,
}

impl SectorMap {
    /// An empty map; every identifier is unclassified.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(identifier, sector)` pairs. Later pairs override earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Return a copy with one more assignment.
    #[must_use]
    pub fn with(mut self, identifier: impl Into<String>, sector: impl Into<String>) -> Self {
        self.entries.insert(identifier.into(), sector.into());
        self
    }

    /// The bundled assignment of common US and LATAM listings.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_pairs(
            BUILTIN
                .iter()
                .flat_map(|(sector, ids)| ids.iter().map(move |id| (*id, *sector))),
        )
    }

    /// Sector of an identifier.
    #[must_use]
    pub fn sector_of(&self, identifier: impl AsRef<str>) -> &str {
        self.entries
            .get(identifier.as_ref())
            .map_or(UNCLASSIFIED, String::as_str)
    }

    /// Number of explicit assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no identifier is explicitly assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
