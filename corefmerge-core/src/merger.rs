//! Merge entry point: reconcile, then resolve

use crate::annotation::AnnotatedDocument;
use crate::config::MergeConfig;
use crate::error::Result;
use crate::resolver::resolve;
use crate::span::ClusterSet;
use crate::strategy::{IntersectionStrategy, Strategy, StrategyKind};
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of merging one annotated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeOutput {
    /// Identifier of the input document, if it had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Clusters both annotators agree on
    pub clusters: ClusterSet,
    /// Document text with mentions replaced by their cluster heads
    pub resolved: String,
    /// Processing metadata
    pub metadata: MergeMetadata,
}

/// Counts and timing for one merge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeMetadata {
    /// Strategy that produced the clusters
    pub strategy: String,
    /// Tokens in the document
    pub token_count: usize,
    /// Clusters from the first annotator
    pub clusters_a: usize,
    /// Clusters from the second annotator
    pub clusters_b: usize,
    /// Clusters kept
    pub clusters_merged: usize,
    /// Spans across the kept clusters
    pub spans_merged: usize,
    /// Wall-clock time in milliseconds
    pub processing_time_ms: f64,
}

/// Reconciles two annotators' clusters and resolves the merged mentions
#[derive(Debug, Clone)]
pub struct CorefMerger {
    strategy: Strategy,
    config: MergeConfig,
}

impl CorefMerger {
    /// Create a merger with the default (fuzzy) configuration
    pub fn new() -> Self {
        Self::with_config(MergeConfig::default())
    }

    /// Create a merger for a specific strategy
    pub fn with_strategy(kind: StrategyKind) -> Self {
        Self::with_config(MergeConfig {
            strategy: kind,
            ..Default::default()
        })
    }

    /// Create a merger with a custom configuration
    pub fn with_config(config: MergeConfig) -> Self {
        Self {
            strategy: Strategy::new(config.strategy, config.remap_policy),
            config,
        }
    }

    /// Current configuration
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Strategy in use
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Merge the two cluster sets of `input`
    pub fn reconcile(&self, input: &AnnotatedDocument) -> Result<ClusterSet> {
        if self.config.validate_spans {
            input.check()?;
        }
        Ok(self.strategy.reconcile(&input.clusters_a, &input.clusters_b))
    }

    /// Merge the cluster sets and resolve the document against the result
    pub fn process(&self, input: &AnnotatedDocument) -> Result<MergeOutput> {
        let start = Instant::now();

        let clusters = self.reconcile(input)?;
        let resolved = resolve(&input.tokens, &clusters);

        let metadata = MergeMetadata {
            strategy: self.strategy.name().to_string(),
            token_count: input.tokens.len(),
            clusters_a: input.clusters_a.len(),
            clusters_b: input.clusters_b.len(),
            clusters_merged: clusters.len(),
            spans_merged: clusters.iter().map(|c| c.len()).sum(),
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        log::debug!(
            "{} merge kept {} clusters ({} spans) over {} tokens",
            metadata.strategy,
            metadata.clusters_merged,
            metadata.spans_merged,
            metadata.token_count
        );

        Ok(MergeOutput {
            id: input.id.clone(),
            clusters,
            resolved,
            metadata,
        })
    }

    /// Process independent documents, keeping input order
    ///
    /// Runs on the rayon pool when the `parallel` feature is enabled and the
    /// configuration allows it.
    pub fn process_batch(&self, inputs: &[AnnotatedDocument]) -> Vec<Result<MergeOutput>> {
        #[cfg(feature = "parallel")]
        if self.config.parallel && inputs.len() > 1 {
            return inputs.par_iter().map(|input| self.process(input)).collect();
        }

        inputs.iter().map(|input| self.process(input)).collect()
    }
}

impl Default for CorefMerger {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge one document with the default configuration
pub fn merge(input: &AnnotatedDocument) -> Result<MergeOutput> {
    CorefMerger::new().process(input)
}

/// Merge one document with the given strategy
pub fn merge_with_strategy(input: &AnnotatedDocument, kind: StrategyKind) -> Result<MergeOutput> {
    CorefMerger::with_strategy(kind).process(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, Pos, Token};
    use crate::error::CoreError;
    use crate::span::cluster_set;

    fn input() -> AnnotatedDocument {
        let tokens = Document::new(vec![
            Token::new("The", " ", Pos::Det, "DT"),
            Token::new("dog", " ", Pos::Noun, "NN"),
            Token::new("wagged", " ", Pos::Verb, "VBD"),
            Token::new("its", " ", Pos::Pron, "PRP$"),
            Token::new("tail", "", Pos::Noun, "NN"),
            Token::new(".", " ", Pos::Punct, "."),
            Token::new("It", " ", Pos::Pron, "PRP"),
            Token::new("barked", "", Pos::Verb, "VBD"),
        ]);
        AnnotatedDocument::new(
            tokens,
            cluster_set(vec![vec![(0, 1), (3, 3), (6, 6)]]),
            cluster_set(vec![vec![(1, 1), (3, 3), (6, 6)]]),
        )
        .with_id("dog")
    }

    #[test]
    fn test_fuzzy_process() {
        let output = CorefMerger::new().process(&input()).unwrap();
        assert_eq!(output.id.as_deref(), Some("dog"));
        assert_eq!(output.clusters, cluster_set(vec![vec![(1, 1), (3, 3), (6, 6)]]));
        assert_eq!(output.resolved, "The dog wagged dog's tail. dog barked");
        assert_eq!(output.metadata.strategy, "fuzzy");
        assert_eq!(output.metadata.clusters_merged, 1);
        assert_eq!(output.metadata.spans_merged, 3);
        assert_eq!(output.metadata.token_count, 8);
    }

    #[test]
    fn test_strict_process_leaves_text_alone() {
        let output = CorefMerger::with_strategy(StrategyKind::Strict)
            .process(&input())
            .unwrap();
        assert!(output.clusters.is_empty());
        assert_eq!(output.resolved, input().tokens.text());
    }

    #[test]
    fn test_validation_rejects_bad_spans() {
        let mut bad = input();
        bad.clusters_a = cluster_set(vec![vec![(0, 1), (9, 9)]]);
        let err = CorefMerger::new().process(&bad).unwrap_err();
        assert!(matches!(err, CoreError::SpanOutOfBounds { .. }));
    }

    #[test]
    fn test_batch_preserves_order() {
        let mut second = input().with_id("second");
        second.clusters_b = ClusterSet::new();
        let outputs = CorefMerger::new().process_batch(&[input(), second]);

        assert_eq!(outputs.len(), 2);
        let first = outputs[0].as_ref().unwrap();
        let second = outputs[1].as_ref().unwrap();
        assert_eq!(first.id.as_deref(), Some("dog"));
        assert_eq!(second.id.as_deref(), Some("second"));
        assert!(second.clusters.is_empty());
    }
}
