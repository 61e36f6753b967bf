use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::Symbol;
use crate::series::PriceSeries;
use crate::table::MonthlyPriceTable;
use crate::timeseries::calendar::month_end;

/// Merge one monthly series per instrument into a shared month-end table.
///
/// - Rows are the union of every month-end date contributed by any series.
/// - An instrument/month with no contributing observation is absent, never zero.
/// - Points are keyed by the month end of their date; if a series carries
///   more than one point in a month, the latest one wins.
/// - If a symbol appears more than once, earlier series win on colliding
///   months and later ones only backfill gaps.
/// - Column order follows first appearance; instruments with no points never
///   produce a column.
pub fn align<I>(series: I) -> MonthlyPriceTable
where
    I: IntoIterator<Item = (Symbol, PriceSeries)>,
{
    let mut table = MonthlyPriceTable::new();
    let mut seen: HashSet<Symbol> = HashSet::new();
    for (symbol, s) in series {
        let by_month: BTreeMap<NaiveDate, f64> = s
            .iter()
            .filter_map(|p| month_end(p.date).map(|key| (key, p.price)))
            .collect();
        if seen.insert(symbol.clone()) {
            for (key, price) in by_month {
                table.insert(key, &symbol, price);
            }
        } else {
            for (key, price) in by_month {
                table.insert_if_absent(key, &symbol, price);
            }
        }
    }
    table
}
