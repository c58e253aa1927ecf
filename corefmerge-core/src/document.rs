//! Tokenized documents as produced by an upstream NLP pipeline

use crate::error::{CoreError, Result};
use crate::span::{Cluster, Span};
use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Fine-grained tags marking a possessive pronoun or clitic
const POSSESSIVE_TAGS: [&str; 2] = ["PRP$", "POS"];

/// Universal coarse part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    /// Adjective
    Adj,
    /// Adposition
    Adp,
    /// Adverb
    Adv,
    /// Auxiliary
    Aux,
    /// Coordinating conjunction
    Cconj,
    /// Determiner
    Det,
    /// Interjection
    Intj,
    /// Noun
    Noun,
    /// Numeral
    Num,
    /// Particle
    Part,
    /// Pronoun
    Pron,
    /// Proper noun
    Propn,
    /// Punctuation
    Punct,
    /// Subordinating conjunction
    Sconj,
    /// Symbol
    Sym,
    /// Verb
    Verb,
    /// Whitespace token
    Space,
    /// Other or unknown
    #[default]
    #[serde(other)]
    X,
}

impl Pos {
    /// Check whether the tag marks a common or proper noun
    pub fn is_nominal(&self) -> bool {
        matches!(self, Pos::Noun | Pos::Propn)
    }

    /// Canonical upper-case tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            Pos::Adj => "ADJ",
            Pos::Adp => "ADP",
            Pos::Adv => "ADV",
            Pos::Aux => "AUX",
            Pos::Cconj => "CCONJ",
            Pos::Det => "DET",
            Pos::Intj => "INTJ",
            Pos::Noun => "NOUN",
            Pos::Num => "NUM",
            Pos::Part => "PART",
            Pos::Pron => "PRON",
            Pos::Propn => "PROPN",
            Pos::Punct => "PUNCT",
            Pos::Sconj => "SCONJ",
            Pos::Sym => "SYM",
            Pos::Verb => "VERB",
            Pos::Space => "SPACE",
            Pos::X => "X",
        }
    }
}

impl FromStr for Pos {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let pos = match s.to_ascii_uppercase().as_str() {
            "ADJ" => Pos::Adj,
            "ADP" => Pos::Adp,
            "ADV" => Pos::Adv,
            "AUX" => Pos::Aux,
            "CCONJ" | "CONJ" => Pos::Cconj,
            "DET" => Pos::Det,
            "INTJ" => Pos::Intj,
            "NOUN" => Pos::Noun,
            "NUM" => Pos::Num,
            "PART" => Pos::Part,
            "PRON" => Pos::Pron,
            "PROPN" => Pos::Propn,
            "PUNCT" => Pos::Punct,
            "SCONJ" => Pos::Sconj,
            "SYM" => Pos::Sym,
            "VERB" => Pos::Verb,
            "SPACE" => Pos::Space,
            "X" => Pos::X,
            _ => return Err(CoreError::UnknownPos(s.to_string())),
        };
        Ok(pos)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token with the annotations resolution relies on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Literal token text
    pub text: String,
    /// Whitespace following the token
    #[serde(default)]
    pub whitespace: String,
    /// Coarse part-of-speech tag
    #[serde(default)]
    pub pos: Pos,
    /// Fine-grained tag (Penn Treebank style)
    #[serde(default)]
    pub tag: String,
}

impl Token {
    /// Create a new token
    pub fn new(
        text: impl Into<String>,
        whitespace: impl Into<String>,
        pos: Pos,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            whitespace: whitespace.into(),
            pos,
            tag: tag.into(),
        }
    }

    /// Token text followed by its trailing whitespace
    pub fn text_with_ws(&self) -> String {
        format!("{}{}", self.text, self.whitespace)
    }

    /// Check whether the fine tag marks a possessive pronoun or clitic
    pub fn is_possessive(&self) -> bool {
        POSSESSIVE_TAGS.contains(&self.tag.as_str())
    }
}

/// Ordered token sequence shared by both annotators
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    tokens: Vec<Token>,
}

impl Document {
    /// Create a document from its tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// All tokens in order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check whether the document has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`, if any
    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Tokens covered by `span`
    ///
    /// A span that fails [`Document::check_span`] covers no tokens.
    pub fn span_tokens(&self, span: &Span) -> &[Token] {
        if span.start > span.end {
            return &[];
        }
        self.tokens.get(span.start..=span.end).unwrap_or(&[])
    }

    /// Source text reassembled from the tokens
    pub fn text(&self) -> String {
        self.tokens.iter().map(Token::text_with_ws).collect()
    }

    /// Text covered by `span`, without the trailing whitespace of its last token
    pub fn span_text(&self, span: &Span) -> String {
        let tokens = self.span_tokens(span);
        let mut text = String::new();
        if let Some((last, inner)) = tokens.split_last() {
            for token in inner {
                text.push_str(&token.text);
                text.push_str(&token.whitespace);
            }
            text.push_str(&last.text);
        }
        text
    }

    /// Covered token texts joined by single spaces
    pub fn span_words(&self, span: &Span) -> String {
        self.span_tokens(span)
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check whether any covered token is a noun or proper noun
    pub fn has_nominal(&self, span: &Span) -> bool {
        self.span_tokens(span).iter().any(|token| token.pos.is_nominal())
    }

    /// Verify that `span` is well formed for this document
    pub fn check_span(&self, span: &Span) -> Result<()> {
        if span.end < span.start {
            return Err(CoreError::InvertedSpan { span: *span });
        }
        if span.end >= self.tokens.len() {
            return Err(CoreError::SpanOutOfBounds {
                span: *span,
                token_count: self.tokens.len(),
            });
        }
        Ok(())
    }

    /// Verify every span of every cluster, stopping at the first problem
    pub fn check_cluster_set(&self, clusters: &[Cluster]) -> Result<()> {
        clusters
            .iter()
            .flat_map(|cluster| cluster.iter())
            .try_for_each(|span| self.check_span(span))
    }
}

impl Index<usize> for Document {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl From<Vec<Token>> for Document {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
