//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use corefmerge_core::{AnnotatedDocument, MergeOutput};
use std::io::Write;

/// Plain text formatter - outputs the resolved text of each document
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _input: &AnnotatedDocument, output: &MergeOutput) -> Result<()> {
        writeln!(self.writer, "{}", output.resolved.trim_end())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
