//! Core error types

use crate::span::Span;
use thiserror::Error;

/// Errors raised by the reconciliation engine
///
/// The algorithms themselves never fail; these errors come from input
/// checks and from parsing names supplied by callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Span whose end precedes its start
    #[error("span {span} ends before it starts")]
    InvertedSpan {
        /// The offending span
        span: Span,
    },

    /// Span reaching past the last token
    #[error("span {span} is out of bounds for a document of {token_count} tokens")]
    SpanOutOfBounds {
        /// The offending span
        span: Span,
        /// Number of tokens in the document
        token_count: usize,
    },

    /// Strategy name that does not match any known strategy
    #[error("unknown intersection strategy '{0}'")]
    UnknownStrategy(String),

    /// Remap policy name that does not match any known policy
    #[error("unknown remap policy '{0}'")]
    UnknownRemapPolicy(String),

    /// Part-of-speech tag that is not a universal tag
    #[error("unknown part-of-speech tag '{0}'")]
    UnknownPos(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
