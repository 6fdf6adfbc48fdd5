//! Directory-level extraction
//!
//! Walks a directory tree in lexicographic path order, parses every `.tf` file and
//! scans every state file, merging the findings into one [`ParseResult`].

use std::path::Path;

use log::{debug, info, warn};

use super::state_file::{backend_from_state, is_state_file};
use super::{fallback, hcl_parser, ParseResult, CONFIGURATION_SUFFIX};
use crate::errors::Result;
use crate::providers::FileSystemProvider;

/// Extracts resources, data references and backends from Terraform sources
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ExtractionEngine;

impl ExtractionEngine {
    /// Create a new extraction engine
    pub fn new() -> Self {
        Self
    }

    /// Extract everything below `root`.
    ///
    /// A traversal or configuration-file read error aborts the run. Files that are
    /// not valid HCL are handled by the fallback scanner. A backend inferred from a
    /// state file replaces any backend found in configuration, whatever the order
    /// the files were visited in.
    pub fn extract_directory(&self, root: impl AsRef<Path>) -> Result<ParseResult> {
        let root = root.as_ref();
        let mut result = ParseResult::default();

        for path in FileSystemProvider::list_files(root)? {
            if is_configuration_file(&path) {
                result.merge(self.parse_file(&path)?);
            }

            if is_state_file(&path) {
                match FileSystemProvider::read_file_lossy(&path) {
                    Ok(content) => {
                        if let Some(backend) = backend_from_state(&content) {
                            debug!("State file {} implies a {} backend", path.display(), backend.kind);
                            result.backend = Some(backend);
                        }
                    }
                    Err(e) => warn!("Skipping unreadable state file: {}", e),
                }
            }
        }

        info!(
            "Extraction completed: {} resources, {} data sources found in {}",
            result.resources.len(),
            result.data_references.len(),
            root.display()
        );

        Ok(result)
    }

    /// Parse a single configuration file.
    ///
    /// A file that is not valid UTF-8 cannot be HCL; it goes straight to the line
    /// scanner with invalid bytes replaced.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParseResult> {
        let path = path.as_ref();
        match String::from_utf8(FileSystemProvider::read_bytes(path)?) {
            Ok(content) => Ok(self.parse_content(&content, path)),
            Err(e) => {
                warn!(
                    "{} is not valid UTF-8, falling back to line scanning",
                    path.display()
                );
                Ok(fallback::scan_lines(&String::from_utf8_lossy(e.as_bytes())))
            }
        }
    }

    /// Parse configuration text, falling back to line scanning on syntax errors.
    ///
    /// `origin` is only used for log messages.
    pub fn parse_content(&self, content: &str, origin: &Path) -> ParseResult {
        match hcl_parser::parse_document(content) {
            Ok(result) => {
                debug!(
                    "Parsed {}: {} resources, {} data sources",
                    origin.display(),
                    result.resources.len(),
                    result.data_references.len()
                );
                result
            }
            Err(e) => {
                warn!(
                    "Failed to parse {} as HCL, falling back to line scanning: {}",
                    origin.display(),
                    e
                );
                fallback::scan_lines(content)
            }
        }
    }
}

fn is_configuration_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(CONFIGURATION_SUFFIX))
}
