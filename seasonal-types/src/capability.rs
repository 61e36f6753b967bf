use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level operation labels used in errors and telemetry.
///
/// These map one-to-one with orchestrator entry points and allow consistent
/// Display formatting when tagging timeouts and failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Raw price history for a single instrument.
    History,
    /// Batch load of a symbol universe into a snapshot.
    Load,
}

impl Capability {
    /// Stable string label for this capability.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Load => "load",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
