//! Cluster intersection strategies
//!
//! Each strategy takes the cluster sets of two annotators over the same
//! document and keeps what both agree on:
//!
//! - [`StrictIntersection`]: clusters that are identical span for span
//! - [`PartialIntersection`]: the spans a pair of clusters share, when they
//!   share at least two
//! - [`FuzzyIntersection`]: normalizes span boundaries between annotators,
//!   then intersects like [`PartialIntersection`]

pub mod fuzzy;
pub mod partial;
pub mod strict;

pub use fuzzy::{FuzzyIntersection, RemapPolicy, RemapTable};
pub use partial::PartialIntersection;
pub use strict::StrictIntersection;

use crate::error::{CoreError, Result};
use crate::span::{Cluster, ClusterSet};
use core::fmt;
use core::str::FromStr;

/// Common interface of the intersection strategies
pub trait IntersectionStrategy: Send + Sync {
    /// Merge two annotators' cluster sets into the set both agree on
    fn reconcile(&self, clusters_a: &[Cluster], clusters_b: &[Cluster]) -> ClusterSet;

    /// Strategy name for logging and output metadata
    fn name(&self) -> &'static str;
}

/// Names of the available strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// Exact cluster equality
    Strict,
    /// Shared spans between clusters
    Partial,
    /// Boundary normalization followed by partial intersection
    #[default]
    Fuzzy,
}

impl StrategyKind {
    /// Every strategy, from most to least conservative
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Strict,
        StrategyKind::Partial,
        StrategyKind::Fuzzy,
    ];

    /// Lower-case strategy name
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Strict => "strict",
            StrategyKind::Partial => "partial",
            StrategyKind::Fuzzy => "fuzzy",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::Strict => "keep clusters that both annotators produced identically",
            StrategyKind::Partial => "keep the spans two clusters share when they share at least two",
            StrategyKind::Fuzzy => "align span boundaries first, then intersect like partial",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(StrategyKind::Strict),
            "partial" => Ok(StrategyKind::Partial),
            "fuzzy" => Ok(StrategyKind::Fuzzy),
            _ => Err(CoreError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of strategies behind one reconciliation interface
#[derive(Debug, Clone)]
pub enum Strategy {
    /// See [`StrictIntersection`]
    Strict(StrictIntersection),
    /// See [`PartialIntersection`]
    Partial(PartialIntersection),
    /// See [`FuzzyIntersection`]
    Fuzzy(FuzzyIntersection),
}

impl Strategy {
    /// Build the strategy named by `kind`
    ///
    /// `remap_policy` only affects the fuzzy strategy.
    pub fn new(kind: StrategyKind, remap_policy: RemapPolicy) -> Self {
        match kind {
            StrategyKind::Strict => Strategy::Strict(StrictIntersection),
            StrategyKind::Partial => Strategy::Partial(PartialIntersection),
            StrategyKind::Fuzzy => Strategy::Fuzzy(FuzzyIntersection::new(remap_policy)),
        }
    }

    /// Which strategy this is
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Strict(_) => StrategyKind::Strict,
            Strategy::Partial(_) => StrategyKind::Partial,
            Strategy::Fuzzy(_) => StrategyKind::Fuzzy,
        }
    }
}

impl From<StrategyKind> for Strategy {
    fn from(kind: StrategyKind) -> Self {
        Strategy::new(kind, RemapPolicy::default())
    }
}

impl IntersectionStrategy for Strategy {
    fn reconcile(&self, clusters_a: &[Cluster], clusters_b: &[Cluster]) -> ClusterSet {
        match self {
            Strategy::Strict(s) => s.reconcile(clusters_a, clusters_b),
            Strategy::Partial(s) => s.reconcile(clusters_a, clusters_b),
            Strategy::Fuzzy(s) => s.reconcile(clusters_a, clusters_b),
        }
    }

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}
