//! Mention resolution
//!
//! Rewrites a document so that every mention in a cluster reads as the
//! cluster's head. The head is the first span (in cluster order) covering a
//! noun or proper noun; clusters made only of pronouns are left alone.
//!
//! Resolution works on one text slot per token. A rewritten mention puts the
//! head text into the slot of its first token and empties the remaining
//! slots, so the final string is simply the slots joined in token order.

use crate::document::Document;
use crate::span::{flatten, is_nested, Cluster, Span};

/// Representative mention of a cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    /// Position of the head in the document
    pub span: Span,
    /// Covered text, without trailing whitespace
    pub text: String,
}

/// Indices (within `cluster`) of the spans that cover a noun or proper noun
pub fn noun_indices(document: &Document, cluster: &Cluster) -> Vec<usize> {
    cluster
        .iter()
        .enumerate()
        .filter(|(_, span)| document.has_nominal(span))
        .map(|(index, _)| index)
        .collect()
}

/// Head of `cluster` given its precomputed noun indices
///
/// Returns `None` when `noun_indices` is empty.
pub fn cluster_head(document: &Document, cluster: &Cluster, noun_indices: &[usize]) -> Option<Head> {
    let index = *noun_indices.first()?;
    let span = *cluster.spans().get(index)?;
    Some(Head {
        span,
        text: document.span_text(&span),
    })
}

/// Index of the head span, falling back to the first span for pronoun-only clusters
pub fn cluster_head_index(document: &Document, cluster: &Cluster) -> usize {
    noun_indices(document, cluster)
        .first()
        .copied()
        .unwrap_or(0)
}

/// Replace every non-head mention with its cluster's head text
pub fn resolve(document: &Document, clusters: &[Cluster]) -> String {
    resolve_slots(document, clusters).concat()
}

/// Per-token output of [`resolve`]
///
/// Slot `i` holds what token `i` contributes to the resolved text. Tokens
/// of every cluster's head keep their source text: a mention sharing a
/// token with any head is not rewritten.
pub fn resolve_slots(document: &Document, clusters: &[Cluster]) -> Vec<String> {
    let mut slots: Vec<String> = document.tokens().iter().map(|t| t.text_with_ws()).collect();
    let all_spans = flatten(clusters);
    let heads: Vec<Option<Head>> = clusters
        .iter()
        .map(|cluster| cluster_head(document, cluster, &noun_indices(document, cluster)))
        .collect();
    let head_spans: Vec<Span> = heads.iter().flatten().map(|head| head.span).collect();

    for (cluster, head) in clusters.iter().zip(&heads) {
        let Some(head) = head else {
            log::trace!("skipping cluster without a nominal mention: {cluster:?}");
            continue;
        };

        for mention in cluster {
            if head_spans.iter().any(|span| span.overlaps(mention)) || is_nested(mention, &all_spans) {
                continue;
            }
            if let Err(e) = document.check_span(mention) {
                log::warn!("not rewriting mention: {e}");
                continue;
            }
            rewrite(document, &mut slots, mention, &head.text);
        }
    }

    slots
}

fn rewrite(document: &Document, slots: &mut [String], mention: &Span, head_text: &str) {
    let final_token = &document[mention.end];
    slots[mention.start] = if final_token.is_possessive() {
        format!("{head_text}'s{}", final_token.whitespace)
    } else {
        format!("{head_text}{}", final_token.whitespace)
    };

    for slot in &mut slots[mention.start + 1..=mention.end] {
        slot.clear();
    }
}
