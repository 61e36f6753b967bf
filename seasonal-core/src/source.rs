use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::raw::RawPriceTable;
use crate::{SeasonalError, Symbol};

/// Inclusive date range of history requested from a [`PriceSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryWindow {
    /// First date requested.
    pub start: NaiveDate,
    /// Last date requested.
    pub end: NaiveDate,
}

impl HistoryWindow {
    /// Window covering `years` years back from `end`, plus a month of slack so
    /// the first requested month is complete.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `years` is zero or the start date underflows
    /// the calendar.
    pub fn trailing_years(end: NaiveDate, years: u32) -> Result<Self, SeasonalError> {
        if years == 0 {
            return Err(SeasonalError::InvalidArg(
                "history_years must be greater than zero".into(),
            ));
        }
        let span = u64::from(years) * 365 + 30;
        let start = end.checked_sub_days(Days::new(span)).ok_or_else(|| {
            SeasonalError::InvalidArg(format!("{years} years before {end} is out of range"))
        })?;
        Ok(Self { start, end })
    }

    /// True if `date` falls within the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Data-acquisition collaborator: supplies raw daily history per instrument.
///
/// Implementations may return any of the layouts understood by
/// [`normalize`](crate::normalize). An identifier without data should yield
/// either an empty table or `SeasonalError::NotFound`; both are treated as
/// expected absence by the loader.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// A stable identifier used in logs and error messages, e.g. "seasonal-mock".
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch raw history for one instrument over `window`.
    async fn history(
        &self,
        symbol: &Symbol,
        window: HistoryWindow,
    ) -> Result<RawPriceTable, SeasonalError>;
}
