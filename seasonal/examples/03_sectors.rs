mod common;

use seasonal::{Month, SectorMetric};
use seasonal::short_name;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seasonal = common::build()?;
    let snapshot = seasonal.load().symbols(&common::universe()?)?.run().await?;

    let sectors = snapshot.available_sectors();
    for (sector, members) in &sectors {
        let names: Vec<&str> = members.iter().map(|s| s.as_str()).collect();
        println!("{sector:<14} {}", names.join(", "));
    }

    let names: Vec<&str> = sectors.iter().map(|(s, _)| s.as_str()).collect();
    println!();
    for row in snapshot.sector_summaries(&names, 5) {
        println!(
            "{:<14} {:>3}  win {:>6.2}%  mean {:>6.2}%  n={}",
            row.sector,
            short_name(row.month),
            row.value(SectorMetric::WinRate),
            row.value(SectorMetric::MeanReturn),
            row.instruments
        );
    }

    println!("\nDecember leaders:");
    for rank in snapshot.sector_month_ranking(&names, Month::December, 5) {
        println!(
            "  {:<14} {:>6.2}%  best {} ({:.1}%)",
            rank.sector, rank.mean_win_rate, rank.best_symbol, rank.best_win_rate
        );
    }
    Ok(())
}
