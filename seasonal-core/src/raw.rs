//! Provider-shaped price tables.
//!
//! Market-data providers return one instrument's history in several column
//! arrangements depending on provider version and on whether the request
//! bundled many instruments. These types model that output faithfully,
//! including non-numeric cells, so that normalization can be defensive.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single cell of provider output before numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A numeric cell.
    Number(f64),
    /// A textual cell, possibly holding a number.
    Text(String),
    /// An explicitly missing cell.
    Missing,
}

impl RawValue {
    /// Coerce the cell to a finite number, if possible.
    ///
    /// Text is trimmed and parsed; anything that does not yield a finite
    /// value is treated as missing.
    #[must_use]
    pub fn coerce(&self) -> Option<f64> {
        let v = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Missing => return None,
        };
        v.is_finite().then_some(v)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Option<f64>> for RawValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Missing, Self::Number)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A column addressed by a single header, e.g. `Close`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatColumn {
    /// Column header.
    pub name: String,
    /// Cells aligned with the table index.
    pub values: Vec<RawValue>,
}

/// A column addressed by a two-level header, e.g. `("Close", "AAPL")` or
/// `("AAPL", "Close")` depending on the provider's grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedColumn {
    /// First header level.
    pub outer: String,
    /// Second header level.
    pub inner: String,
    /// Cells aligned with the table index.
    pub values: Vec<RawValue>,
}

/// Header arrangement of a raw table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawColumns {
    /// Single-level headers.
    Flat(Vec<FlatColumn>),
    /// Two-level headers.
    Nested(Vec<NestedColumn>),
}

/// One instrument's raw history as returned by a price source.
///
/// `index` holds the observation dates; each column's `values` are aligned
/// with it positionally. Index order is not trusted and may contain
/// duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPriceTable {
    /// Observation dates.
    pub index: Vec<NaiveDate>,
    /// Column data.
    pub columns: RawColumns,
}

impl RawPriceTable {
    /// An empty table, used by sources to signal "no data".
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            index: Vec::new(),
            columns: RawColumns::Flat(Vec::new()),
        }
    }

    /// Build a single-level table from `(header, cells)` pairs.
    #[must_use]
    pub fn flat<I, S>(index: Vec<NaiveDate>, columns: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<RawValue>)>,
        S: Into<String>,
    {
        Self {
            index,
            columns: RawColumns::Flat(
                columns
                    .into_iter()
                    .map(|(name, values)| FlatColumn {
                        name: name.into(),
                        values,
                    })
                    .collect(),
            ),
        }
    }

    /// Build a two-level table from `((outer, inner), cells)` pairs.
    #[must_use]
    pub fn nested<I, S, T>(index: Vec<NaiveDate>, columns: I) -> Self
    where
        I: IntoIterator<Item = ((S, T), Vec<RawValue>)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            index,
            columns: RawColumns::Nested(
                columns
                    .into_iter()
                    .map(|((outer, inner), values)| NestedColumn {
                        outer: outer.into(),
                        inner: inner.into(),
                        values,
                    })
                    .collect(),
            ),
        }
    }

    /// True when the table has no rows or no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let no_columns = match &self.columns {
            RawColumns::Flat(c) => c.is_empty(),
            RawColumns::Nested(c) => c.is_empty(),
        };
        self.index.is_empty() || no_columns
    }
}
