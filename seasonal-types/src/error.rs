use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the seasonal workspace.
///
/// Expected absence (an instrument without usable history, a month without
/// observations, a correlation query without enough overlap) is never an
/// error; it surfaces as `None` or an empty collection. This type covers
/// caller mistakes, collaborator failures and the "no usable data" outcome of
/// a batch load.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeasonalError {
    /// Issues with returned or expected data (malformed fields, inconsistent tables).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A price source failed for one symbol.
    #[error("{provider} failed: {msg}")]
    Source {
        /// Price source name that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "history for AAPL".
        what: String,
    },

    /// A single price source call exceeded the configured timeout.
    #[error("source timed out: {symbol} via {provider}")]
    SourceTimeout {
        /// Price source name that timed out.
        provider: String,
        /// Symbol being fetched.
        symbol: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// Every requested instrument failed; there is nothing to analyze.
    #[error("no usable data for any of {requested} requested symbols")]
    NoUsableData {
        /// Number of symbols that were requested.
        requested: usize,
    },

    /// Reading or writing a persisted table failed.
    #[error("persistence: {0}")]
    Persistence(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl SeasonalError {
    /// Helper: build a `Source` error with the source name and message.
    pub fn provider(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(provider: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::SourceTimeout {
            provider: provider.into(),
            symbol: symbol.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// A symbol that simply has no data is benign; source failures, timeouts
    /// and invalid input are not.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}
