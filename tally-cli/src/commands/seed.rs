use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use tally_core::{OrderEnricher, GENERATED_PRODUCT_COUNT};
use tally_store::OrderStore;

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Orders file to enrich and rewrite
    #[arg(long, default_value = "data/orders.json")]
    pub file: PathBuf,
}

/// Load the orders file, generate the placeholder products and derived
/// totals, and write the record back. All-or-nothing: any failure leaves
/// the file as it was.
pub fn execute(args: SeedArgs) -> anyhow::Result<()> {
    let store = OrderStore::new(&args.file);

    let mut order = store
        .load()
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    OrderEnricher::new().enrich(&mut order)?;

    store
        .save(&order)
        .with_context(|| format!("failed to write {}", args.file.display()))?;

    println!(
        "Updated {} with {} products.",
        args.file.display(),
        GENERATED_PRODUCT_COUNT
    );
    Ok(())
}
