use clap::Parser;
use gendex_cli::commands::Commands;

/// Classify text by gendered language usage
#[derive(Debug, Parser)]
#[command(name = "gendex", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
