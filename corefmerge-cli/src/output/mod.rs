//! Output formatting module

use anyhow::Result;
use corefmerge_core::{AnnotatedDocument, MergeOutput};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one merged document
    fn format_document(&mut self, input: &AnnotatedDocument, output: &MergeOutput) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Display name for a document in listings
pub(crate) fn document_label(output: &MergeOutput) -> &str {
    output.id.as_deref().unwrap_or("document")
}
