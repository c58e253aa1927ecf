//! Validate command implementation

use crate::commands::init_logging;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use anyhow::Result;
use clap::Args;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Annotation files or patterns to check (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let paths = resolve_patterns(&self.input)?;
        let mut invalid = Vec::new();

        for path in &paths {
            println!("Validating annotations: {}", path.display());
            for document in FileReader::read_documents(path)? {
                let label = document.id.clone().unwrap_or_default();
                match document.check() {
                    Ok(()) => println!(
                        "  ✓ {} ({} tokens, {} + {} clusters)",
                        label,
                        document.tokens.len(),
                        document.clusters_a.len(),
                        document.clusters_b.len()
                    ),
                    Err(e) => {
                        println!("  ✗ {}: {}", label, e);
                        invalid.push(CliError::InvalidDocument {
                            document: label,
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        match invalid.len() {
            0 => {
                println!("✓ All documents are valid!");
                Ok(())
            }
            1 => Err(invalid.remove(0).into()),
            n => Err(anyhow::anyhow!("Validation failed: {} invalid documents", n)),
        }
    }
}
