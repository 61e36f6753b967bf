mod common;

use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=debug and `--features tracing`.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let seasonal = common::build()?;
    let mut symbols = common::universe()?;
    symbols.push(seasonal::Symbol::new("FAIL")?);

    let snapshot = seasonal.load().symbols(&symbols)?.run().await?;
    println!(
        "loaded {} of {} symbols, {} records",
        snapshot.report().loaded.len(),
        snapshot.report().requested.len(),
        snapshot.stats().len()
    );
    Ok(())
}
