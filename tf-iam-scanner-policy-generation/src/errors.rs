//! Error types for extraction, knowledge-base loading and policy encoding

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by the policy generation core.
///
/// Structured-parse failures and unknown resource types never surface here:
/// the former triggers the fallback scanner and the latter contributes no actions.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// An input could not be read or traversed
    #[error("Failed to {operation} '{}': {source}", path.display())]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The permission knowledge base could not be decoded
    #[error("Invalid permission knowledge base '{origin}': {message}")]
    KnowledgeBase { origin: String, message: String },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The requested output format is not one we can render
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl ExtractorError {
    /// Wrap an I/O error with the operation and path that produced it
    pub fn file_system(
        operation: impl Into<String>,
        path: impl AsRef<Path>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Report a knowledge base that was found but could not be used
    pub fn knowledge_base(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::KnowledgeBase {
            origin: origin.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for operations that can fail with `ExtractorError`
pub type Result<T> = std::result::Result<T, ExtractorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_system_error_names_path() {
        let error = ExtractorError::file_system(
            "read",
            "/tmp/missing/main.tf",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        );

        let message = error.to_string();
        assert!(message.contains("read"));
        assert!(message.contains("/tmp/missing/main.tf"));
        assert!(message.contains("No such file"));
    }

    #[test]
    fn test_unsupported_format_message() {
        let error = ExtractorError::UnsupportedFormat("toml".to_string());
        assert_eq!(error.to_string(), "unsupported format: toml");
    }
}
