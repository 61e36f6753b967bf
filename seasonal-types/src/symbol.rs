//! Instrument identifiers.

use core::fmt;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::SeasonalError;

const MAX_SYMBOL_LEN: usize = 16;

/// Exchange ticker identifying an instrument, e.g. `AAPL` or `BRK-B`.
///
/// Symbols are short uppercase ASCII alphanumeric strings that may contain a
/// `-` or `.` separator (never leading or trailing). Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Validate and wrap a ticker.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the input is empty, too long, contains characters
    /// other than `A-Z`, `0-9`, `-`, `.`, or starts/ends with a separator.
    pub fn new(raw: &str) -> Result<Self, SeasonalError> {
        if raw.is_empty() || raw.len() > MAX_SYMBOL_LEN {
            return Err(SeasonalError::InvalidArg(format!(
                "symbol must be 1..={MAX_SYMBOL_LEN} characters: '{raw}'"
            )));
        }
        let is_sep = |c: char| c == '-' || c == '.';
        if raw.starts_with(is_sep) || raw.ends_with(is_sep) {
            return Err(SeasonalError::InvalidArg(format!(
                "symbol cannot start or end with a separator: '{raw}'"
            )));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit() || is_sep(*c)))
        {
            return Err(SeasonalError::InvalidArg(format!(
                "invalid character '{bad}' in symbol '{raw}'"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    /// Borrow the ticker text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = SeasonalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = SeasonalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(s: Symbol) -> Self {
        s.0
    }
}

impl core::str::FromStr for Symbol {
    type Err = SeasonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Parse a newline-delimited symbol list.
///
/// Each line is trimmed and uppercased; blank lines and lines starting with
/// `#` are skipped. Duplicates keep their first occurrence. Malformed lines do
/// not abort parsing: they are returned as `InvalidArg` warnings alongside the
/// symbols that did parse.
#[must_use]
pub fn parse_symbol_list(text: &str) -> (Vec<Symbol>, Vec<SeasonalError>) {
    let mut out: Vec<Symbol> = Vec::new();
    let mut warnings: Vec<SeasonalError> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for (lineno, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let upper = trimmed.to_ascii_uppercase();
        match Symbol::new(&upper) {
            Ok(sym) => {
                if seen.insert(upper) {
                    out.push(sym);
                }
            }
            Err(e) => warnings.push(SeasonalError::InvalidArg(format!(
                "line {}: {e}",
                lineno + 1
            ))),
        }
    }
    (out, warnings)
}
