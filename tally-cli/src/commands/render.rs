use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use tally_slip::{render::DEFAULT_WIDTH, SlipOrder, SlipRenderer};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Slip-format order file to render
    #[arg(long, default_value = "data/orderformat.json")]
    pub file: PathBuf,

    /// Slip width in characters
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,
}

/// Print the text receipt for a slip-format order to stdout.
pub fn execute(args: RenderArgs) -> anyhow::Result<()> {
    let order: SlipOrder = tally_store::read_json(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    print!("{}", SlipRenderer::new(args.width).render(&order));
    Ok(())
}
