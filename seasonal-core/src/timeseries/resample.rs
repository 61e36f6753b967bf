use chrono::NaiveDate;

use crate::ResampleThresholds;
use crate::series::{PricePoint, PriceSeries};
use crate::timeseries::calendar::month_end;

/// Generic resampler that groups date-sorted points by a bucket function and
/// keeps the latest observation of each bucket, stamped with the bucket key.
///
/// Points for which `bucket_of` yields `None` are skipped.
fn resample_by<F>(points: &[PricePoint], bucket_of: F) -> Vec<PricePoint>
where
    F: Fn(NaiveDate) -> Option<NaiveDate>,
{
    let mut out: Vec<PricePoint> = Vec::new();
    for p in points {
        let Some(bucket) = bucket_of(p.date) else {
            continue;
        };
        match out.last_mut() {
            Some(last) if last.date == bucket => last.price = p.price,
            _ => out.push(PricePoint::new(bucket, p.price)),
        }
    }
    out
}

/// Resample a daily/irregular closing-price series to one price per calendar
/// month.
///
/// - Groups by calendar month; the retained price is the latest-dated
///   observation of the month.
/// - Output points are stamped with the month-end date.
/// - Months without observations are simply absent.
///
/// Returns `None` when the input has fewer than
/// `thresholds.min_raw_observations` points or the result has fewer than
/// `thresholds.min_months` months; both indicate too little history to be
/// statistically meaningful.
#[must_use]
pub fn resample_to_monthly(
    series: &PriceSeries,
    thresholds: &ResampleThresholds,
) -> Option<PriceSeries> {
    if series.len() < thresholds.min_raw_observations {
        return None;
    }
    let monthly = resample_by(series.points(), month_end);
    if monthly.len() < thresholds.min_months {
        return None;
    }
    PriceSeries::from_points(monthly)
}
