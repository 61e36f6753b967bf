//! JSON persistence for monthly tables.
//!
//! The encoding keeps absent cells absent and writes every `f64` with enough
//! digits to read back the identical value, so a write/read pair reproduces
//! the table exactly.

use std::fs;
use std::path::Path;

use crate::SeasonalError;
use crate::table::MonthlyTable;

/// Encode a table as JSON.
///
/// # Errors
/// Returns `Persistence` if serialization fails.
pub fn table_to_json(table: &MonthlyTable) -> Result<String, SeasonalError> {
    serde_json::to_string(table).map_err(|e| SeasonalError::Persistence(e.to_string()))
}

/// Decode and validate a table from JSON.
///
/// # Errors
/// Returns `Persistence` if the text is not a table, or `Data` if the decoded
/// table violates the table invariants.
pub fn table_from_json(json: &str) -> Result<MonthlyTable, SeasonalError> {
    let table: MonthlyTable =
        serde_json::from_str(json).map_err(|e| SeasonalError::Persistence(e.to_string()))?;
    table.validate()?;
    Ok(table)
}

/// Write a table to `path`, replacing any existing file.
///
/// # Errors
/// Returns `Persistence` on encoding or I/O failure.
pub fn write_table(path: impl AsRef<Path>, table: &MonthlyTable) -> Result<(), SeasonalError> {
    let path = path.as_ref();
    let json = table_to_json(table)?;
    fs::write(path, json)
        .map_err(|e| SeasonalError::Persistence(format!("{}: {e}", path.display())))
}

/// Read a table previously written by [`write_table`].
///
/// # Errors
/// Returns `Persistence` on I/O or decoding failure and `Data` if the stored
/// table is structurally invalid.
pub fn read_table(path: impl AsRef<Path>) -> Result<MonthlyTable, SeasonalError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .map_err(|e| SeasonalError::Persistence(format!("{}: {e}", path.display())))?;
    table_from_json(&json)
}
