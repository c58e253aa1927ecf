//! Process command implementation

use crate::commands::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::{Args, ValueEnum};
use corefmerge_core::{AnnotatedDocument, CorefMerger, MergeConfig, RemapPolicy, StrategyKind};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Annotation files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's default_format]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Intersection strategy [default: fuzzy]
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Which boundary disagreements the fuzzy strategy normalizes
    #[arg(long, value_enum)]
    pub remap_policy: Option<RemapPolicyArg>,

    /// Skip span bounds checks
    #[arg(long)]
    pub no_validate: bool,

    /// Merge the documents in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn document_label(input: &AnnotatedDocument) -> &str {
    input.id.as_deref().unwrap_or("document")
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Resolved text, one document per line
    Text,
    /// JSON array of merged documents with metadata
    Json,
    /// Cluster listing with original and resolved text
    Markdown,
}

/// Intersection strategies selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Keep clusters both annotators produced exactly
    Strict,
    /// Keep shared mentions of overlapping clusters
    Partial,
    /// Normalize boundary disagreements, then partial
    Fuzzy,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Strict => StrategyKind::Strict,
            StrategyArg::Partial => StrategyKind::Partial,
            StrategyArg::Fuzzy => StrategyKind::Fuzzy,
        }
    }
}

/// Remap policies selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RemapPolicyArg {
    /// Remap every nested pair to the widest narrower span
    Widest,
    /// Remap only spans the annotators disagree on
    DisagreementOnly,
}

impl From<RemapPolicyArg> for RemapPolicy {
    fn from(arg: RemapPolicyArg) -> Self {
        match arg {
            RemapPolicyArg::Widest => RemapPolicy::Widest,
            RemapPolicyArg::DisagreementOnly => RemapPolicy::DisagreementOnly,
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting coreference merge");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let merge_config = self.merge_config(&config)?;
        let format = self.output_format(&config)?;
        log::info!(
            "Strategy: {}, remap policy: {}, format: {:?}",
            merge_config.strategy,
            merge_config.remap_policy,
            format
        );

        if config.performance.worker_threads > 0 {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(config.performance.worker_threads)
                .build_global()
            {
                log::warn!("Could not configure worker threads: {e}");
            }
        }

        let paths = resolve_patterns(&self.input)?;
        let mut documents = Vec::new();
        for path in &paths {
            documents.extend(FileReader::read_documents(path)?);
        }
        log::info!("Loaded {} document(s) from {} file(s)", documents.len(), paths.len());

        let merger = CorefMerger::with_config(merge_config);
        let outputs = documents
            .iter()
            .zip(merger.process_batch(&documents))
            .map(|(input, result)| {
                result.map_err(|e| CliError::InvalidDocument {
                    document: document_label(input).to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Nothing is written unless every document merged.
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(documents.len() as u64);

        for (input, output) in documents.iter().zip(&outputs) {
            formatter.format_document(input, output)?;
            progress.document_completed(document_label(input));
        }

        formatter.finish()?;
        progress.finish();

        log::info!("Merge completed");
        Ok(())
    }

    /// Combine flags with the configuration file; flags win
    fn merge_config(&self, config: &CliConfig) -> Result<MergeConfig> {
        let strategy = match self.strategy {
            Some(arg) => arg.into(),
            None => config.merge.strategy()?.unwrap_or_default(),
        };
        let remap_policy = match self.remap_policy {
            Some(arg) => Some(arg.into()),
            None => config.merge.remap_policy()?,
        };

        let mut builder = MergeConfig::builder()
            .strategy(strategy)
            .validate_spans(!self.no_validate && config.merge.validate_spans)
            .parallel(self.parallel || config.performance.parallel);
        if let Some(policy) = remap_policy {
            builder = builder.remap_policy(policy);
        }

        Ok(builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?)
    }

    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DOC: &str = r#"{
        "id": "alice",
        "tokens": [
            {"text": "Alice", "whitespace": " ", "pos": "PROPN", "tag": "NNP"},
            {"text": "lost", "whitespace": " ", "pos": "VERB", "tag": "VBD"},
            {"text": "her", "whitespace": " ", "pos": "PRON", "tag": "PRP$"},
            {"text": "keys", "whitespace": "", "pos": "NOUN", "tag": "NNS"}
        ],
        "clusters_a": [[[0, 0], [2, 2]]],
        "clusters_b": [[[0, 0], [2, 2]]]
    }"#;

    fn args(input: &str, output: PathBuf) -> ProcessArgs {
        ProcessArgs {
            input: vec![input.to_string()],
            output: Some(output),
            format: None,
            strategy: None,
            remap_policy: None,
            no_validate: false,
            parallel: false,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_process_writes_resolved_text() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("alice.json");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, DOC).unwrap();

        args(input.to_str().unwrap(), output.clone()).execute().unwrap();

        assert_eq!(fs::read_to_string(output).unwrap(), "Alice lost Alice's keys\n");
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig::from_toml("[merge]\nstrategy = \"partial\"\n").unwrap();
        let mut process = args("x.json", PathBuf::from("out"));
        assert_eq!(
            process.merge_config(&config).unwrap().strategy,
            StrategyKind::Partial
        );

        process.strategy = Some(StrategyArg::Strict);
        process.no_validate = true;
        let merge = process.merge_config(&config).unwrap();
        assert_eq!(merge.strategy, StrategyKind::Strict);
        assert!(!merge.validate_spans);
    }

    #[test]
    fn test_remap_policy_needs_fuzzy() {
        let mut process = args("x.json", PathBuf::from("out"));
        process.strategy = Some(StrategyArg::Partial);
        process.remap_policy = Some(RemapPolicyArg::DisagreementOnly);
        let err = process.merge_config(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("fuzzy"));
    }

    #[test]
    fn test_format_from_config() {
        let config = CliConfig::from_toml("[output]\ndefault_format = \"markdown\"\n").unwrap();
        let process = args("x.json", PathBuf::from("out"));
        assert_eq!(process.output_format(&config).unwrap(), OutputFormat::Markdown);

        let bad = CliConfig::from_toml("[output]\ndefault_format = \"html\"\n").unwrap();
        assert!(process.output_format(&bad).is_err());
    }

    #[test]
    fn test_failed_batch_writes_no_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("mixed.json");
        let output = temp_dir.path().join("out.txt");
        let broken = DOC.replace("alice", "broken").replace("[2, 2]]]", "[2, 9]]]");
        fs::write(&input, format!("[{DOC}, {broken}]")).unwrap();

        let err = args(input.to_str().unwrap(), output.clone()).execute().unwrap_err();
        assert!(err.to_string().contains("Invalid document broken"));
        assert!(!output.exists());
    }

    #[test]
    fn test_out_of_bounds_span_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("broken.json");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, DOC.replace("[2, 2]]]", "[2, 9]]]")).unwrap();

        let err = args(input.to_str().unwrap(), output).execute().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid document alice"));
        assert!(message.contains("out of bounds"));
    }
}
