//! Calendar helpers shared by resampling and the analysis views.

use chrono::{Datelike, Month, NaiveDate};

use crate::SeasonalError;

/// The twelve calendar months in order.
pub const ALL_MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Last calendar day of the month containing `date`.
///
/// Returns `None` only at the edge of chrono's representable range.
#[must_use]
pub fn month_end(date: NaiveDate) -> Option<NaiveDate> {
    let first_of_next = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year().checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)?
    };
    first_of_next.pred_opt()
}

/// Calendar month of a date.
#[must_use]
pub fn month_of(date: NaiveDate) -> Month {
    ALL_MONTHS[date.month0() as usize]
}

/// Parse a 1-based month number.
///
/// # Errors
/// Returns `InvalidArg` if `n` is outside `1..=12`.
pub fn month_from_number(n: u32) -> Result<Month, SeasonalError> {
    n.checked_sub(1)
        .and_then(|i| ALL_MONTHS.get(i as usize).copied())
        .ok_or_else(|| SeasonalError::InvalidArg(format!("month must be 1..=12, got {n}")))
}

/// Three-letter English label, e.g. `Mar`.
#[must_use]
pub fn short_name(month: Month) -> &'static str {
    let name = month.name();
    &name[..3]
}
