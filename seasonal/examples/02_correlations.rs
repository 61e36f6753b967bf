mod common;

use seasonal::{Month, Symbol, split_by_period};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seasonal = common::build()?;
    let snapshot = seasonal.load().symbols(&common::universe()?)?.run().await?;

    let reference = Symbol::new("SPY")?;
    let records = snapshot.correlations_checked(&reference, Month::September, 3)?;
    if records.is_empty() {
        println!("{reference} never fell in September with enough overlap");
        return Ok(());
    }

    let (same, next) = split_by_period(&records);
    for (label, group) in [("same month", same), ("next month", next)] {
        println!("when {reference} fell in September ({label}):");
        for r in group {
            println!(
                "  {:<5} rose {}/{} ({:>5.1}%)  mean {:>6.2}%  in {}",
                r.symbol,
                r.rose,
                r.common_years,
                r.pct_rose,
                r.mean_return,
                r.month.name()
            );
        }
    }
    Ok(())
}
