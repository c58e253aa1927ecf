//! Merge configuration

use crate::error::{CoreError, Result};
use crate::strategy::{RemapPolicy, StrategyKind};

/// Configuration for [`CorefMerger`](crate::CorefMerger)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    /// Intersection strategy
    pub strategy: StrategyKind,
    /// Remap policy for the fuzzy strategy
    pub remap_policy: RemapPolicy,
    /// Check spans against the document before merging
    pub validate_spans: bool,
    /// Process batches on the rayon thread pool
    pub parallel: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Fuzzy,
            remap_policy: RemapPolicy::Widest,
            validate_spans: true,
            parallel: true,
        }
    }
}

impl MergeConfig {
    /// Exact cluster agreement only
    pub fn strict() -> Self {
        Self {
            strategy: StrategyKind::Strict,
            ..Default::default()
        }
    }

    /// Shared-span agreement
    pub fn partial() -> Self {
        Self {
            strategy: StrategyKind::Partial,
            ..Default::default()
        }
    }

    /// Boundary-tolerant agreement (the default)
    pub fn fuzzy() -> Self {
        Self::default()
    }

    /// Create a builder
    pub fn builder() -> MergeConfigBuilder {
        MergeConfigBuilder::default()
    }
}

/// Builder for [`MergeConfig`]
#[derive(Debug, Default)]
pub struct MergeConfigBuilder {
    config: MergeConfig,
    remap_policy: Option<RemapPolicy>,
}

impl MergeConfigBuilder {
    /// Set the strategy
    pub fn strategy(mut self, strategy: StrategyKind) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Set the strategy by name
    pub fn strategy_name(mut self, name: &str) -> Result<Self> {
        self.config.strategy = name.parse()?;
        Ok(self)
    }

    /// Set the remap policy (fuzzy strategy only)
    pub fn remap_policy(mut self, policy: RemapPolicy) -> Self {
        self.remap_policy = Some(policy);
        self
    }

    /// Enable or disable span checks
    pub fn validate_spans(mut self, validate: bool) -> Self {
        self.config.validate_spans = validate;
        self
    }

    /// Enable or disable parallel batches
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<MergeConfig> {
        let mut config = self.config;
        if let Some(policy) = self.remap_policy {
            if config.strategy != StrategyKind::Fuzzy && policy != RemapPolicy::default() {
                return Err(CoreError::Config(format!(
                    "remap policy '{policy}' requires the fuzzy strategy, not '{}'",
                    config.strategy
                )));
            }
            config.remap_policy = policy;
        }
        Ok(config)
    }
}
