//! Error handling for the CLI application

use thiserror::Error;

/// User-facing CLI failures
#[derive(Error, Debug)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),
    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Input document that cannot be merged
    #[error("Invalid document {document}: {reason}")]
    InvalidDocument {
        /// Document label (file and index, or id)
        document: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("doc.json".to_string());
        assert_eq!(error.to_string(), "File not found: doc.json");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown strategy".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown strategy");
    }

    #[test]
    fn test_invalid_document_display() {
        let error = CliError::InvalidDocument {
            document: "news.json#2".to_string(),
            reason: "span [3, 9] is out of bounds for a document of 5 tokens".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid document news.json#2: span [3, 9] is out of bounds for a document of 5 tokens"
        );
    }

    #[test]
    fn test_cli_result_wraps_cli_error() {
        let failure: CliResult<()> = Err(CliError::FileNotFound("a.json".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
