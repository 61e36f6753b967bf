use std::path::Path;

use seasonal_core::{SeasonalError, Symbol, parse_symbol_list, read_table, write_table};

use crate::Seasonal;
use crate::router::load::LoadBuilder;
use crate::router::snapshot::Snapshot;

/// Read a newline-delimited symbol list from disk.
///
/// Blank lines and `#` comments are skipped, tickers are uppercased and
/// duplicates dropped. Malformed lines are returned as `InvalidArg` warnings
/// rather than failing the whole file.
///
/// # Errors
/// Returns `Persistence` if the file cannot be read.
pub fn load_symbols_file(
    path: impl AsRef<Path>,
) -> Result<(Vec<Symbol>, Vec<SeasonalError>), SeasonalError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| SeasonalError::Persistence(format!("{}: {e}", path.display())))?;
    Ok(parse_symbol_list(&text))
}

impl LoadBuilder<'_> {
    /// Replace the symbol list with the parsed contents of a symbol list text.
    ///
    /// Malformed lines are skipped and carried into the load report's
    /// warnings.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no valid symbol remains.
    pub fn symbols_from_list(self, text: &str) -> Result<Self, SeasonalError> {
        let (symbols, warnings) = parse_symbol_list(text);
        #[cfg(feature = "tracing")]
        for w in &warnings {
            tracing::warn!(error = %w, "symbol list line skipped");
        }
        if symbols.is_empty() {
            return Err(SeasonalError::InvalidArg(
                "symbol list contains no valid symbols".into(),
            ));
        }
        let mut builder = self.symbols(&symbols)?;
        builder.list_warnings = warnings;
        Ok(builder)
    }
}

impl Snapshot {
    /// Persist the month-end price table as JSON.
    ///
    /// # Errors
    /// Returns `Persistence` if encoding or writing fails.
    pub fn save_prices(&self, path: impl AsRef<Path>) -> Result<(), SeasonalError> {
        write_table(path, &self.prices)
    }
}

impl Seasonal {
    /// Rebuild a snapshot from a price table written by [`Snapshot::save_prices`].
    ///
    /// # Errors
    /// Returns `Persistence` if the file cannot be read or decoded, `Data` if
    /// the table is inconsistent, `NoUsableData` if it has no columns.
    pub fn snapshot_from_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<std::sync::Arc<Snapshot>, SeasonalError> {
        let prices = read_table(path)?;
        self.snapshot_from_prices(prices)
    }
}
