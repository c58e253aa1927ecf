//! Annotation file reading

use anyhow::{Context, Result};
use corefmerge_core::AnnotatedDocument;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A JSON file holds either one document or an array of them
#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentFile {
    Many(Vec<AnnotatedDocument>),
    One(Box<AnnotatedDocument>),
}

/// Reader for annotation files
///
/// `.jsonl` files hold one document per line; every other file is parsed
/// as a JSON document or array of documents. Documents without an `id`
/// are named after the file stem, numbered from 1 when a file holds more
/// than one.
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read every annotated document in a file
    pub fn read_documents(path: &Path) -> Result<Vec<AnnotatedDocument>> {
        let content = Self::read_text(path)?;

        let mut documents = if path.extension().is_some_and(|ext| ext == "jsonl") {
            Self::parse_lines(&content, path)?
        } else {
            match serde_json::from_str::<DocumentFile>(&content)
                .with_context(|| format!("Failed to parse annotations: {}", path.display()))?
            {
                DocumentFile::Many(documents) => documents,
                DocumentFile::One(document) => vec![*document],
            }
        };

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let numbered = documents.len() > 1;
        for (index, document) in documents.iter_mut().enumerate() {
            if document.id.is_none() {
                document.id = Some(if numbered {
                    format!("{stem}#{}", index + 1)
                } else {
                    stem.clone()
                });
            }
        }

        log::info!("Read {} document(s) from {}", documents.len(), path.display());
        Ok(documents)
    }

    fn parse_lines(content: &str, path: &Path) -> Result<Vec<AnnotatedDocument>> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(number, line)| {
                serde_json::from_str(line).with_context(|| {
                    format!("Failed to parse {} line {}", path.display(), number + 1)
                })
            })
            .collect()
    }
}
