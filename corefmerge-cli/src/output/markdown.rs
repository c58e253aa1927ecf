//! Markdown output formatter

use super::{document_label, OutputFormatter};
use anyhow::Result;
use corefmerge_core::{AnnotatedDocument, MergeOutput};
use std::io::Write;

/// Markdown formatter - cluster listing and a before/after comparison
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, input: &AnnotatedDocument, output: &MergeOutput) -> Result<()> {
        self.document_count += 1;
        writeln!(self.writer, "## {}", document_label(output))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Strategy: `{}`", output.metadata.strategy)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### Clusters")?;
        writeln!(self.writer)?;
        let summaries = corefmerge_core::summarize(&input.tokens, &output.clusters);
        if summaries.is_empty() {
            writeln!(self.writer, "*No clusters*")?;
        }
        for (index, summary) in summaries.iter().enumerate() {
            writeln!(self.writer, "{}. {}", index + 1, summary)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "### Original text")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", input.tokens.text().trim_end())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "### Resolved text")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", output.resolved.trim_end())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corefmerge_core::{cluster_set, CorefMerger, Document, Pos, Token};

    #[test]
    fn test_markdown_sections() {
        let input = AnnotatedDocument::new(
            Document::new(vec![
                Token::new("Ada", " ", Pos::Propn, "NNP"),
                Token::new("wrote", " ", Pos::Verb, "VBD"),
                Token::new("her", " ", Pos::Pron, "PRP$"),
                Token::new("notes", "", Pos::Noun, "NNS"),
            ]),
            cluster_set(vec![vec![(0, 0), (2, 2)]]),
            cluster_set(vec![vec![(0, 0), (2, 2)]]),
        )
        .with_id("ada");
        let output = CorefMerger::new().process(&input).unwrap();

        let mut buffer = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut buffer);
        formatter.format_document(&input, &output).unwrap();
        formatter.finish().unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("## ada\n"));
        assert!(text.contains("Strategy: `fuzzy`"));
        assert!(text.contains("1. Ada - [Ada; her]"));
        assert!(text.contains("### Original text\n\nAda wrote her notes\n"));
        assert!(text.contains("### Resolved text\n\nAda wrote Ada's notes\n"));
        assert!(text.ends_with("---\n*Total documents: 1*\n"));
    }

    #[test]
    fn test_document_without_clusters() {
        let input = AnnotatedDocument::new(
            Document::new(vec![Token::new("Hi", "", Pos::Intj, "UH")]),
            Vec::new(),
            Vec::new(),
        );
        let output = CorefMerger::new().process(&input).unwrap();

        let mut buffer = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut buffer);
        formatter.format_document(&input, &output).unwrap();
        formatter.finish().unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("## document\n"));
        assert!(text.contains("*No clusters*"));
    }
}
