mod common;

use seasonal::load_symbols_file;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir();
    let list = dir.join("seasonal-example-symbols.txt");
    std::fs::write(&list, "# energy and airlines\nxom\naal\ndal\nnot a symbol\n")?;

    let (symbols, warnings) = load_symbols_file(&list)?;
    for w in &warnings {
        eprintln!("skipped: {w}");
    }

    let seasonal = common::build()?;
    let snapshot = seasonal.load().symbols(&symbols)?.run().await?;

    let path = dir.join("seasonal-example-prices.json");
    snapshot.save_prices(&path)?;
    let restored = seasonal.snapshot_from_file(&path)?;
    println!(
        "restored {} months x {} symbols; identical stats: {}",
        restored.prices().len(),
        restored.symbols().len(),
        restored.stats() == snapshot.stats()
    );

    let _ = std::fs::remove_file(&list);
    let _ = std::fs::remove_file(&path);
    Ok(())
}
