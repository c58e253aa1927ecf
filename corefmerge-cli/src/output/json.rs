//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use corefmerge_core::{AnnotatedDocument, ClusterSet, MergeMetadata, MergeOutput};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs merged documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Document id
    pub id: Option<String>,
    /// Merged clusters
    pub clusters: ClusterSet,
    /// Cluster summaries (`head - [mentions]`)
    pub summaries: Vec<String>,
    /// Resolved text
    pub resolved: String,
    /// Merge metadata
    pub metadata: MergeMetadata,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, input: &AnnotatedDocument, output: &MergeOutput) -> Result<()> {
        self.documents.push(DocumentData {
            id: output.id.clone(),
            clusters: output.clusters.clone(),
            summaries: corefmerge_core::summarize(&input.tokens, &output.clusters),
            resolved: output.resolved.clone(),
            metadata: output.metadata.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
