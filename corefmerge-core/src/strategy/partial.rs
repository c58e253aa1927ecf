//! Shared-span intersection

use super::IntersectionStrategy;
use crate::span::{Cluster, ClusterSet, Span};
use std::collections::BTreeSet;

/// Keeps the spans that a cluster shares with the other annotator's clusters
///
/// For every cluster of `a`, each cluster of `b` contributes the spans both
/// contain (duplicates within a cluster collapse). A pairing that agrees on
/// a single span is treated as incidental and contributes nothing. The
/// contributions form one sorted output cluster per cluster of `a`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialIntersection;

impl IntersectionStrategy for PartialIntersection {
    fn reconcile(&self, clusters_a: &[Cluster], clusters_b: &[Cluster]) -> ClusterSet {
        let sets_b: Vec<BTreeSet<Span>> = clusters_b.iter().map(span_set).collect();

        let mut merged = ClusterSet::new();
        for cluster_a in clusters_a {
            let set_a = span_set(cluster_a);
            let mut spans: Vec<Span> = Vec::new();

            for set_b in &sets_b {
                let common: Vec<Span> = set_a.intersection(set_b).copied().collect();
                if common.len() > 1 {
                    spans.extend(common);
                }
            }

            if !spans.is_empty() {
                spans.sort();
                merged.push(Cluster::new(spans));
            }
        }

        log::debug!(
            "partial intersection produced {} clusters from {} x {}",
            merged.len(),
            clusters_a.len(),
            clusters_b.len()
        );
        merged
    }

    fn name(&self) -> &'static str {
        "partial"
    }
}

fn span_set(cluster: &Cluster) -> BTreeSet<Span> {
    cluster.iter().copied().collect()
}
