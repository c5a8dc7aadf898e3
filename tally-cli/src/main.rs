//! Tally CLI
//!
//! Command-line interface for the order fixture generator and slip renderer.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "tally")]
#[command(about = "Tally - order fixture enrichment and POS slips", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Enrich the orders file with generated placeholder products
    Seed(commands::seed::SeedArgs),
    /// Render a slip-format order as a text receipt
    Render(commands::render::RenderArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed(args) => commands::seed::execute(args),
        Commands::Render(args) => commands::render::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
