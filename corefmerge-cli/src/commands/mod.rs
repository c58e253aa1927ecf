//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use corefmerge_core::{RemapPolicy, StrategyKind};

pub mod process;
pub mod validate;

pub use process::{OutputFormat, ProcessArgs, RemapPolicyArg, StrategyArg};
pub use validate::ValidateArgs;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge annotations and resolve mentions
    Process(ProcessArgs),

    /// Check annotation files without merging
    Validate(ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List intersection strategies
    Strategies,

    /// List output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Listing text for this subcommand
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Strategies => {
                out.push_str("Intersection strategies:\n");
                for kind in StrategyKind::ALL {
                    let marker = if kind == StrategyKind::default() { " (default)" } else { "" };
                    out.push_str(&format!("  {:<8} {}{}\n", kind.as_str(), kind.description(), marker));
                }
                out.push_str("\nRemap policies (fuzzy only):\n");
                for policy in RemapPolicy::ALL {
                    out.push_str(&format!("  {}\n", policy.as_str()));
                }
            }
            ListCommands::Formats => {
                out.push_str("Output formats:\n");
                out.push_str("  text      resolved text, one document per block\n");
                out.push_str("  json      merged clusters, resolved text and metadata\n");
                out.push_str("  markdown  cluster summaries with original and resolved text\n");
            }
        }
        out
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run inside tests.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
