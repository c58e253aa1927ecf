//! Input records pairing a document with two annotators' clusters

use crate::document::Document;
use crate::error::Result;
use crate::span::ClusterSet;
use serde::{Deserialize, Serialize};

/// A tokenized document with the cluster sets of two annotators
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    /// Optional identifier carried through to the output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Shared tokenization
    pub tokens: Document,
    /// Clusters of the first annotator
    #[serde(default)]
    pub clusters_a: ClusterSet,
    /// Clusters of the second annotator
    #[serde(default)]
    pub clusters_b: ClusterSet,
}

impl AnnotatedDocument {
    /// Create a new annotated document
    pub fn new(tokens: Document, clusters_a: ClusterSet, clusters_b: ClusterSet) -> Self {
        Self {
            id: None,
            tokens,
            clusters_a,
            clusters_b,
        }
    }

    /// Attach an identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Check both cluster sets against the tokenization
    pub fn check(&self) -> Result<()> {
        self.tokens.check_cluster_set(&self.clusters_a)?;
        self.tokens.check_cluster_set(&self.clusters_b)
    }
}
