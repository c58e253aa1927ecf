//! corefmerge command-line entry point

use anyhow::Result;
use clap::Parser;
use corefmerge_cli::commands::Commands;

/// Merge two coreference annotations and resolve mentions to their cluster heads
#[derive(Debug, Parser)]
#[command(name = "corefmerge", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
