use crate::Symbol;
use crate::raw::{FlatColumn, NestedColumn, RawColumns, RawPriceTable, RawValue};
use crate::series::{PricePoint, PriceSeries};

const CLOSE_FIELD: &str = "Close";

/// Known arrangements of the closing-price column in provider output.
///
/// Layouts are tried in [`CloseLayout::SEARCH_ORDER`]; the first one whose
/// cells can be located wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseLayout {
    /// Two-level headers, price field first: `("Close", "AAPL")`.
    /// Prefers the column for the requested symbol, else the first `Close` column.
    FieldThenSymbol,
    /// Two-level headers, symbol first: `("AAPL", "Close")`.
    /// Prefers the `Close` column under the symbol, else its first column.
    SymbolThenField,
    /// Two-level headers with `Close` on the inner level under any outer key.
    FieldOnInnerLevel,
    /// Single-level headers with a `Close` column.
    FlatField,
    /// Single-level headers with one column per symbol.
    FlatSymbol,
}

impl CloseLayout {
    /// Search order, most specific first.
    pub const SEARCH_ORDER: [Self; 5] = [
        Self::FieldThenSymbol,
        Self::SymbolThenField,
        Self::FieldOnInnerLevel,
        Self::FlatField,
        Self::FlatSymbol,
    ];

    /// Locate the closing-price cells under this layout, if it applies.
    #[must_use]
    pub fn locate<'a>(self, table: &'a RawPriceTable, symbol: &Symbol) -> Option<&'a [RawValue]> {
        match (self, &table.columns) {
            (Self::FieldThenSymbol, RawColumns::Nested(cols)) => {
                let mut under_close = cols.iter().filter(|c| c.outer == CLOSE_FIELD);
                let first = under_close.clone().next()?;
                let chosen = under_close
                    .find(|c| c.inner == symbol.as_str())
                    .unwrap_or(first);
                Some(chosen.values.as_slice())
            }
            (Self::SymbolThenField, RawColumns::Nested(cols)) => {
                let mut under_symbol = cols.iter().filter(|c| c.outer == symbol.as_str());
                let first = under_symbol.clone().next()?;
                let chosen = under_symbol
                    .find(|c| c.inner == CLOSE_FIELD)
                    .unwrap_or(first);
                Some(chosen.values.as_slice())
            }
            (Self::FieldOnInnerLevel, RawColumns::Nested(cols)) => cols
                .iter()
                .find(|c: &&NestedColumn| c.inner == CLOSE_FIELD)
                .map(|c| c.values.as_slice()),
            (Self::FlatField, RawColumns::Flat(cols)) => find_flat(cols, CLOSE_FIELD),
            (Self::FlatSymbol, RawColumns::Flat(cols)) => find_flat(cols, symbol.as_str()),
            _ => None,
        }
    }
}

fn find_flat<'a>(cols: &'a [FlatColumn], name: &str) -> Option<&'a [RawValue]> {
    cols.iter()
        .find(|c| c.name == name)
        .map(|c| c.values.as_slice())
}

/// First layout that locates a close column in the table, if any.
#[must_use]
pub fn detect_layout(table: &RawPriceTable, symbol: &Symbol) -> Option<CloseLayout> {
    CloseLayout::SEARCH_ORDER
        .into_iter()
        .find(|layout| layout.locate(table, symbol).is_some())
}

/// Extract a clean closing-price series from one instrument's raw history.
///
/// Returns `None` (never an error) when the table is empty, when no known
/// layout exposes a closing-price column, or when no cell survives numeric
/// coercion. Cells that are non-numeric, non-finite or non-positive are
/// dropped individually. Index and cells are paired positionally; surplus
/// entries on either side are ignored.
#[must_use]
pub fn normalize(table: &RawPriceTable, symbol: &Symbol) -> Option<PriceSeries> {
    if table.is_empty() {
        return None;
    }
    let layout = detect_layout(table, symbol)?;
    let cells = layout.locate(table, symbol)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(symbol = %symbol, layout = ?layout, cells = cells.len(), "close column located");

    let points: Vec<PricePoint> = table
        .index
        .iter()
        .zip(cells)
        .filter_map(|(date, cell)| cell.coerce().map(|price| PricePoint::new(*date, price)))
        .collect();
    PriceSeries::from_points(points)
}
