//! Token spans, clusters and the set utilities shared by every strategy

use core::fmt;
use serde::{Deserialize, Serialize};

/// An inclusive `[start, end]` range of token indices
///
/// Spans are plain values: two spans are equal when their bounds are equal,
/// and they order like the `(start, end)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Span {
    /// First covered token
    pub start: usize,
    /// Last covered token (inclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Distance between the bounds, used to compare span widths
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Number of tokens covered
    pub fn token_count(&self) -> usize {
        self.width() + 1
    }

    /// Check whether `other` lies within this span's inclusive range
    pub fn covers(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Check whether the two spans share at least one token
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Iterate over the covered token indices
    pub fn indices(&self) -> core::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Mentions believed to refer to one entity
///
/// The order of spans only matters for head selection: the first span that
/// covers a noun becomes the head.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cluster {
    spans: Vec<Span>,
}

impl Cluster {
    /// Create a cluster from its spans
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Spans in cluster order
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Number of mentions
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Check whether the cluster has no mentions
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterate over the spans
    pub fn iter(&self) -> core::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    /// Build a new cluster with every span passed through `f`
    pub fn map_spans(&self, f: impl FnMut(&Span) -> Span) -> Self {
        Self::new(self.spans.iter().map(f).collect())
    }

    /// Consume the cluster and return its spans
    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }
}

impl From<Vec<Span>> for Cluster {
    fn from(spans: Vec<Span>) -> Self {
        Self::new(spans)
    }
}

impl From<Vec<(usize, usize)>> for Cluster {
    fn from(spans: Vec<(usize, usize)>) -> Self {
        Self::new(spans.into_iter().map(Span::from).collect())
    }
}

impl FromIterator<Span> for Cluster {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Cluster {
    type Item = &'a Span;
    type IntoIter = core::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

/// All clusters produced by one annotator over one document
pub type ClusterSet = Vec<Cluster>;

/// Every span of every cluster, in encounter order
pub fn flatten(clusters: &[Cluster]) -> Vec<Span> {
    clusters
        .iter()
        .flat_map(|cluster| cluster.iter().copied())
        .collect()
}

/// Containment test in either direction
///
/// Partially overlapping spans where neither contains the other do not match.
pub fn overlaps_within_range(a: &Span, b: &Span) -> bool {
    b.covers(a) || a.covers(b)
}

/// Check whether another span of `spans` covers `span`
pub fn is_nested(span: &Span, spans: &[Span]) -> bool {
    spans.iter().any(|other| other != span && other.covers(span))
}

/// Shorthand for building cluster sets from tuple literals
pub fn cluster_set(clusters: Vec<Vec<(usize, usize)>>) -> ClusterSet {
    clusters.into_iter().map(Cluster::from).collect()
}
