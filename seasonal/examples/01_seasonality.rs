mod common;

use seasonal::{Direction, Month};
use seasonal::short_name;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seasonal = common::build()?;
    let snapshot = seasonal.load().symbols(&common::universe()?)?.run().await?;

    for (month, rate) in snapshot.month_win_rate_means(5) {
        println!("{:>3}: {rate:>6.2}%", short_name(month));
    }
    if let (Some(best), Some(worst)) = (snapshot.best_month(5), snapshot.worst_month(5)) {
        println!("best month: {}, worst month: {}", best.name(), worst.name());
    }

    println!("\nstrongest in September:");
    for r in snapshot.rank_month(Month::September, Direction::Rising, 3, 5) {
        println!(
            "  {:<5} win {:>5.1}%  mean {:>6.2}%  ({} years)",
            r.symbol, r.win_rate, r.mean_return, r.total_years
        );
    }

    println!("\nweakest in September:");
    for r in snapshot.rank_month(Month::September, Direction::Falling, 3, 5) {
        println!(
            "  {:<5} win {:>5.1}%  mean {:>6.2}%  ({} years)",
            r.symbol, r.win_rate, r.mean_return, r.total_years
        );
    }

    Ok(())
}
