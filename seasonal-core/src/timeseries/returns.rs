use crate::table::{MonthlyPriceTable, MonthlyReturnTable};

/// Compute month-over-month percentage returns per instrument.
///
/// For each instrument independently, every present price that has an earlier
/// present price in the same column yields
/// `100 * (price - previous) / previous`, where `previous` is the most recent
/// earlier present price regardless of absent months in between. The first
/// present price of each column has no return. Instruments never influence
/// each other, and rows with no return for any instrument do not appear in
/// the result.
#[must_use]
pub fn compute_returns(prices: &MonthlyPriceTable) -> MonthlyReturnTable {
    let mut out = MonthlyReturnTable::new();
    for symbol in prices.columns() {
        let mut previous: Option<f64> = None;
        for (date, price) in prices.column(symbol) {
            if let Some(prev) = previous
                && prev != 0.0
            {
                let r = 100.0 * (price - prev) / prev;
                if r.is_finite() {
                    out.insert(date, symbol, r);
                }
            }
            previous = Some(price);
        }
    }
    out
}
