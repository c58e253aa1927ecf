//! Human-readable cluster listings

use crate::document::Document;
use crate::resolver::cluster_head_index;
use crate::span::Cluster;

/// One-line summary of a cluster: `"<head> - [<mention>; <mention>; ...]"`
///
/// Words are the covered token texts joined by single spaces. Clusters
/// without a nominal mention use their first span as head; empty clusters
/// summarize to an empty string.
pub fn cluster_summary(document: &Document, cluster: &Cluster) -> String {
    let Some(head) = cluster.spans().get(cluster_head_index(document, cluster)) else {
        return String::new();
    };

    let mentions: Vec<String> = cluster.iter().map(|span| document.span_words(span)).collect();
    format!("{} - [{}]", document.span_words(head), mentions.join("; "))
}

/// Summaries of every non-empty cluster, in order
pub fn summarize(document: &Document, clusters: &[Cluster]) -> Vec<String> {
    clusters
        .iter()
        .filter(|cluster| !cluster.is_empty())
        .map(|cluster| cluster_summary(document, cluster))
        .collect()
}
