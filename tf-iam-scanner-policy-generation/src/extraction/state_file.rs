//! Backend detection from Terraform state files.
//!
//! State files are scanned as plain text rather than decoded: any mention of `s3`
//! or `backend` is taken as evidence of an S3 remote-state backend.

use std::path::Path;

use super::{BackendDescriptor, STATE_FILE_SUFFIX};

/// Whether a file name follows the state-file naming convention
pub(crate) fn is_state_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == "terraform.tfstate" || name.ends_with(STATE_FILE_SUFFIX))
}

/// Infer a backend from raw state-file text
pub(crate) fn backend_from_state(content: &str) -> Option<BackendDescriptor> {
    if content.contains("s3") || content.contains("backend") {
        Some(BackendDescriptor::new("s3"))
    } else {
        None
    }
}
