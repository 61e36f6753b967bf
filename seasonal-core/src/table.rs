use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timeseries::calendar::month_end;
use crate::{SeasonalError, Symbol};

/// Sparse table indexed by month-end date with one column per instrument.
///
/// A cell is either present with a finite value or absent; absence is never
/// encoded as zero. Rows are kept in ascending date order and a row exists
/// only if at least one of its cells is present. Column order is the order in
/// which instruments were first inserted and is the iteration order used by
/// every per-instrument computation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyTable {
    columns: Vec<Symbol>,
    rows: BTreeMap<NaiveDate, BTreeMap<Symbol, f64>>,
}

/// Month-end closing prices.
pub type MonthlyPriceTable = MonthlyTable;

/// Month-over-month percentage returns.
pub type MonthlyReturnTable = MonthlyTable;

impl MonthlyTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Instruments in insertion order.
    #[must_use]
    pub fn columns(&self) -> &[Symbol] {
        &self.columns
    }

    /// True if the instrument has at least one present cell.
    #[must_use]
    pub fn has_column(&self, symbol: &Symbol) -> bool {
        self.columns.contains(symbol)
    }

    /// Row dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.rows.keys().copied()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of present cells across all rows.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Earliest row date.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.keys().next().copied()
    }

    /// Latest row date.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.keys().next_back().copied()
    }

    /// Value of one cell, if present.
    #[must_use]
    pub fn get(&self, date: NaiveDate, symbol: &Symbol) -> Option<f64> {
        self.rows.get(&date)?.get(symbol).copied()
    }

    /// All present cells of one row.
    #[must_use]
    pub fn row(&self, date: NaiveDate) -> Option<&BTreeMap<Symbol, f64>> {
        self.rows.get(&date)
    }

    /// Present cells of one instrument in ascending date order.
    pub fn column<'a>(&'a self, symbol: &'a Symbol) -> impl Iterator<Item = (NaiveDate, f64)> + 'a {
        self.rows
            .iter()
            .filter_map(move |(date, row)| row.get(symbol).map(|v| (*date, *v)))
    }

    /// Build a table from `(date, symbol, value)` cells.
    ///
    /// Columns are ordered by first appearance. A repeated cell keeps the
    /// last value.
    ///
    /// # Errors
    /// Returns `Data` if a date is not a month end or a value is not finite.
    pub fn from_cells<I>(cells: I) -> Result<Self, SeasonalError>
    where
        I: IntoIterator<Item = (NaiveDate, Symbol, f64)>,
    {
        let mut table = Self::new();
        for (date, symbol, value) in cells {
            if month_end(date) != Some(date) {
                return Err(SeasonalError::Data(format!("{date} is not a month end")));
            }
            if !value.is_finite() {
                return Err(SeasonalError::Data(format!(
                    "non-finite value for {symbol} at {date}"
                )));
            }
            table.insert(date, &symbol, value);
        }
        Ok(table)
    }

    pub(crate) fn insert(&mut self, date: NaiveDate, symbol: &Symbol, value: f64) {
        if !self.columns.contains(symbol) {
            self.columns.push(symbol.clone());
        }
        self.rows
            .entry(date)
            .or_default()
            .insert(symbol.clone(), value);
    }

    pub(crate) fn insert_if_absent(&mut self, date: NaiveDate, symbol: &Symbol, value: f64) {
        if self.get(date, symbol).is_none() {
            self.insert(date, symbol, value);
        }
    }

    /// Check the structural invariants of a table built outside this crate,
    /// e.g. one read back from persistence.
    ///
    /// # Errors
    /// Returns `Err(SeasonalError::Data)` if a column is listed twice, a row
    /// date is not a month end, a row is empty, a cell references an unlisted
    /// column, a listed column has no cells, or a value is not finite.
    pub fn validate(&self) -> Result<(), SeasonalError> {
        let listed: HashSet<&Symbol> = self.columns.iter().collect();
        if listed.len() != self.columns.len() {
            return Err(SeasonalError::Data("duplicate column in table".into()));
        }
        let mut populated: HashSet<&Symbol> = HashSet::new();
        for (date, row) in &self.rows {
            if month_end(*date) != Some(*date) {
                return Err(SeasonalError::Data(format!("row date {date} is not a month end")));
            }
            if row.is_empty() {
                return Err(SeasonalError::Data(format!("empty row at {date}")));
            }
            for (symbol, value) in row {
                if !listed.contains(symbol) {
                    return Err(SeasonalError::Data(format!(
                        "cell at {date} references unlisted column {symbol}"
                    )));
                }
                if !value.is_finite() {
                    return Err(SeasonalError::Data(format!(
                        "non-finite value for {symbol} at {date}"
                    )));
                }
                populated.insert(symbol);
            }
        }
        if let Some(empty) = self.columns.iter().find(|c| !populated.contains(c)) {
            return Err(SeasonalError::Data(format!("column {empty} has no cells")));
        }
        Ok(())
    }
}
