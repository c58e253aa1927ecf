//! Coreference cluster reconciliation and mention resolution
//!
//! Two coreference systems run over the same tokenized document rarely
//! agree completely. This crate merges their cluster sets into the set both
//! support, and rewrites the document so that every mention in a merged
//! cluster reads as the cluster's head mention.
//!
//! # Architecture
//!
//! - **span**: spans, clusters and set utilities
//! - **document**: tokens with part-of-speech annotations
//! - **strategy**: strict, partial and fuzzy intersection of two cluster sets
//! - **resolver**: head selection and text rewriting
//! - **merger**: the [`CorefMerger`] entry point tying both together
//!
//! Everything is pure and synchronous; a merger can be shared across
//! threads and batches of documents are processed in parallel.
//!
//! # Example
//!
//! ```rust
//! use corefmerge_core::{cluster_set, AnnotatedDocument, CorefMerger, Document, Pos, Token};
//!
//! let tokens = Document::new(vec![
//!     Token::new("Alice", " ", Pos::Propn, "NNP"),
//!     Token::new("lost", " ", Pos::Verb, "VBD"),
//!     Token::new("her", " ", Pos::Pron, "PRP$"),
//!     Token::new("keys", "", Pos::Noun, "NNS"),
//! ]);
//! let input = AnnotatedDocument::new(
//!     tokens,
//!     cluster_set(vec![vec![(0, 0), (2, 2)]]),
//!     cluster_set(vec![vec![(0, 0), (2, 2)]]),
//! );
//!
//! let output = CorefMerger::new().process(&input).unwrap();
//! assert_eq!(output.resolved, "Alice lost Alice's keys");
//! ```

#![warn(missing_docs)]

pub mod annotation;
pub mod config;
pub mod document;
pub mod error;
pub mod merger;
pub mod resolver;
pub mod span;
pub mod strategy;
pub mod summary;

pub use annotation::AnnotatedDocument;
pub use config::{MergeConfig, MergeConfigBuilder};
pub use document::{Document, Pos, Token};
pub use error::{CoreError, Result};
pub use merger::{merge, merge_with_strategy, CorefMerger, MergeMetadata, MergeOutput};
pub use resolver::{
    cluster_head, cluster_head_index, noun_indices, resolve, resolve_slots, Head,
};
pub use span::{cluster_set, flatten, is_nested, overlaps_within_range, Cluster, ClusterSet, Span};
pub use strategy::{
    FuzzyIntersection, IntersectionStrategy, PartialIntersection, RemapPolicy, RemapTable,
    StrategyKind, StrictIntersection, Strategy,
};
pub use summary::{cluster_summary, summarize};
