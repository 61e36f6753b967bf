//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::{SeasonalError, Symbol};

/// Summary of a batch load.
///
/// Lists which requested symbols made it into the snapshot and which did not,
/// plus the non-fatal issues encountered along the way. A report with failed
/// symbols is still a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoadReport {
    /// Symbols requested, in request order.
    pub requested: Vec<Symbol>,
    /// Symbols with a usable monthly series, in request order.
    pub loaded: Vec<Symbol>,
    /// Symbols that produced no usable series, in request order.
    pub failed: Vec<Symbol>,
    /// Non-fatal issues encountered while building the snapshot.
    pub warnings: Vec<SeasonalError>,
}

impl LoadReport {
    /// True when at least one requested symbol failed.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.failed.is_empty()
    }
}
