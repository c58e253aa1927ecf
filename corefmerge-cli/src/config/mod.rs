//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use corefmerge_core::{RemapPolicy, StrategyKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Merge configuration
    #[serde(default)]
    pub merge: MergeSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Merge-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct MergeSection {
    /// Intersection strategy name
    pub strategy: Option<String>,

    /// Remap policy name (fuzzy strategy only)
    pub remap_policy: Option<String>,

    /// Check spans against the tokens before merging
    pub validate_spans: bool,
}

impl Default for MergeSection {
    fn default() -> Self {
        Self {
            strategy: None,
            remap_policy: None,
            validate_spans: true,
        }
    }
}

impl MergeSection {
    /// Parsed strategy, if the file names one
    pub fn strategy(&self) -> Result<Option<StrategyKind>> {
        self.strategy
            .as_deref()
            .map(|name| name.parse::<StrategyKind>().map_err(config_error))
            .transpose()
    }

    /// Parsed remap policy, if the file names one
    pub fn remap_policy(&self) -> Result<Option<RemapPolicy>> {
        self.remap_policy
            .as_deref()
            .map(|name| name.parse::<RemapPolicy>().map_err(config_error))
            .transpose()
    }
}

fn config_error(err: corefmerge_core::CoreError) -> anyhow::Error {
    CliError::ConfigError(err.to_string()).into()
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Merge the documents of a file in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.merge.strategy()?;
        config.merge.remap_policy()?;
        Ok(config)
    }
}
