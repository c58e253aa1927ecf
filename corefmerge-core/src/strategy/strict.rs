//! Exact-match intersection

use super::IntersectionStrategy;
use crate::span::{Cluster, ClusterSet};

/// Keeps a cluster only when the other annotator produced the same cluster
///
/// Clusters are compared as ordered span sequences. A cluster of `a` is
/// emitted once per equal cluster of `b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictIntersection;

impl IntersectionStrategy for StrictIntersection {
    fn reconcile(&self, clusters_a: &[Cluster], clusters_b: &[Cluster]) -> ClusterSet {
        let merged: ClusterSet = clusters_a
            .iter()
            .flat_map(|a| clusters_b.iter().filter(move |b| a == *b).map(move |_| a.clone()))
            .collect();

        log::debug!(
            "strict intersection kept {} of {} clusters",
            merged.len(),
            clusters_a.len()
        );
        merged
    }

    fn name(&self) -> &'static str {
        "strict"
    }
}
