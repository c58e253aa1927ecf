//! Boundary-tolerant intersection
//!
//! Two annotators often agree on a mention but not on where it starts or
//! ends ("the big dog" against "dog"). Before counting agreement the fuzzy
//! strategy pairs every span of one annotator with every span of the other
//! that contains it, or that it contains, and builds a [`RemapTable`]:
//!
//! 1. each containing pair is filed under its longer span, with the shorter
//!    span recorded as a candidate
//! 2. each key settles on its widest candidate; among equally wide
//!    candidates the first one recorded wins
//! 3. chains are collapsed so a span is rewritten at most once
//!
//! Both cluster sets are rewritten through the table and handed to
//! [`PartialIntersection`]. When the annotators never disagree on
//! boundaries the table is empty and the result equals the partial one.

use super::{IntersectionStrategy, PartialIntersection};
use crate::error::{CoreError, Result};
use crate::span::{flatten, overlaps_within_range, Cluster, ClusterSet, Span};
use core::fmt;
use core::str::FromStr;
use std::collections::HashMap;

/// Which keys of the candidate grouping get remapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RemapPolicy {
    /// Remap every key whose widest candidate differs from the key itself
    #[default]
    Widest,
    /// Remap a key only when its candidates disagree among themselves
    DisagreementOnly,
}

impl RemapPolicy {
    /// Every policy
    pub const ALL: [RemapPolicy; 2] = [RemapPolicy::Widest, RemapPolicy::DisagreementOnly];

    /// Kebab-case policy name
    pub fn as_str(&self) -> &'static str {
        match self {
            RemapPolicy::Widest => "widest",
            RemapPolicy::DisagreementOnly => "disagreement-only",
        }
    }
}

impl FromStr for RemapPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "widest" => Ok(RemapPolicy::Widest),
            "disagreement-only" => Ok(RemapPolicy::DisagreementOnly),
            _ => Err(CoreError::UnknownRemapPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for RemapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Call-scoped mapping from a span to its replacement
///
/// Every replacement is final: it is never itself a key of the table, so
/// applying the table twice gives the same result as applying it once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapTable {
    entries: HashMap<Span, Span>,
}

impl RemapTable {
    /// Build the table for two annotators' cluster sets
    pub fn build(clusters_a: &[Cluster], clusters_b: &[Cluster], policy: RemapPolicy) -> Self {
        let spans_b = flatten(clusters_b);
        let mut candidates: HashMap<Span, Vec<Span>> = HashMap::new();

        for span_a in flatten(clusters_a) {
            for span_b in spans_b.iter().copied() {
                if !overlaps_within_range(&span_a, &span_b) {
                    continue;
                }
                let (key, value) = if span_a.width() > span_b.width() {
                    (span_a, span_b)
                } else {
                    (span_b, span_a)
                };
                candidates.entry(key).or_default().push(value);
            }
        }

        let direct: HashMap<Span, Span> = candidates
            .into_iter()
            .filter(|(_, values)| match policy {
                RemapPolicy::Widest => true,
                RemapPolicy::DisagreementOnly => values.iter().any(|v| *v != values[0]),
            })
            .filter_map(|(key, values)| {
                let chosen = widest(&values)?;
                (chosen != key).then_some((key, chosen))
            })
            .collect();

        // Values are strictly narrower than their keys, so every chain ends.
        let entries = direct
            .keys()
            .map(|key| {
                let mut target = direct[key];
                while let Some(next) = direct.get(&target) {
                    target = *next;
                }
                (*key, target)
            })
            .collect();

        let table = Self { entries };
        log::debug!("built remap table with {} entries ({policy})", table.len());
        table
    }

    /// Replacement for `span`, if it is remapped
    pub fn get(&self, span: &Span) -> Option<Span> {
        self.entries.get(span).copied()
    }

    /// Replacement for `span`, or `span` itself
    pub fn map(&self, span: &Span) -> Span {
        self.get(span).unwrap_or(*span)
    }

    /// Rewrite every span of every cluster through the table
    pub fn apply(&self, clusters: &[Cluster]) -> ClusterSet {
        clusters
            .iter()
            .map(|cluster| cluster.map_spans(|span| self.map(span)))
            .collect()
    }

    /// Number of remapped spans
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no span is remapped
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key
    pub fn sorted_entries(&self) -> Vec<(Span, Span)> {
        let mut entries: Vec<(Span, Span)> = self.entries.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort();
        entries
    }
}

/// Widest span, keeping the earliest among equally wide ones
fn widest(values: &[Span]) -> Option<Span> {
    values
        .iter()
        .copied()
        .reduce(|best, candidate| if candidate.width() > best.width() { candidate } else { best })
}

/// Partial intersection over boundary-normalized cluster sets
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyIntersection {
    policy: RemapPolicy,
    partial: PartialIntersection,
}

impl FuzzyIntersection {
    /// Create a fuzzy strategy with the given remap policy
    pub fn new(policy: RemapPolicy) -> Self {
        Self {
            policy,
            partial: PartialIntersection,
        }
    }

    /// Remap policy in use
    pub fn policy(&self) -> RemapPolicy {
        self.policy
    }

    /// Rewrite both cluster sets onto common span boundaries
    pub fn normalize(&self, clusters_a: &[Cluster], clusters_b: &[Cluster]) -> (ClusterSet, ClusterSet) {
        let table = RemapTable::build(clusters_a, clusters_b, self.policy);
        (table.apply(clusters_a), table.apply(clusters_b))
    }
}

impl IntersectionStrategy for FuzzyIntersection {
    fn reconcile(&self, clusters_a: &[Cluster], clusters_b: &[Cluster]) -> ClusterSet {
        let (mapped_a, mapped_b) = self.normalize(clusters_a, clusters_b);
        self.partial.reconcile(&mapped_a, &mapped_b)
    }

    fn name(&self) -> &'static str {
        "fuzzy"
    }
}
