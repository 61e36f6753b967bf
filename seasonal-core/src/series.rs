use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Closing price; always finite and strictly positive inside a `PriceSeries`.
    pub price: f64,
}

impl PricePoint {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// Closing prices for one instrument with strictly increasing dates.
///
/// A `PriceSeries` is never empty and is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from unordered points.
    ///
    /// - Points with a non-finite or non-positive price are dropped.
    /// - Points are sorted by date; on duplicate dates the point that came
    ///   later in the input wins.
    /// - Returns `None` if nothing remains.
    #[must_use]
    pub fn from_points(mut points: Vec<PricePoint>) -> Option<Self> {
        points.retain(|p| p.price.is_finite() && p.price > 0.0);
        // Stable: equal dates keep input order, so the last one is the latest.
        points.sort_by_key(|p| p.date);

        let mut out: Vec<PricePoint> = Vec::with_capacity(points.len());
        for p in points {
            match out.last_mut() {
                Some(last) if last.date == p.date => *last = p,
                _ => out.push(p),
            }
        }
        if out.is_empty() {
            return None;
        }
        Some(Self { points: out })
    }

    /// Points in ascending date order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of observations (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest observation.
    #[must_use]
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Latest observation.
    #[must_use]
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Iterate over the points in date order.
    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.points.iter()
    }
}
