//! Native filesystem provider implementation using blocking `std::fs` reads and
//! `walkdir` for recursive traversal.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::{ExtractorError, Result};

/// Native filesystem provider using blocking I/O.
///
/// Every operation completes before returning; callers process files strictly
/// in the order they are handed out.
#[derive(Debug, Clone)]
pub struct NativeFileSystemProvider;

impl NativeFileSystemProvider {
    /// Read the entire contents of a file as a UTF-8 string.
    pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
        fs::read_to_string(path.as_ref())
            .map_err(|e| ExtractorError::file_system("read", path.as_ref(), e))
    }

    /// Read the raw bytes of a file.
    pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
        fs::read(path.as_ref()).map_err(|e| ExtractorError::file_system("read", path.as_ref(), e))
    }

    /// Read a file as text, replacing invalid UTF-8 sequences.
    ///
    /// State files are only scanned for substrings, so lossy decoding is enough.
    pub fn read_file_lossy(path: impl AsRef<Path>) -> Result<String> {
        Self::read_bytes(path).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Recursively list the regular files below `root`, in lexicographic path order.
    ///
    /// The root itself is included when it is a file. Symlinks to regular files are
    /// listed under their link path; symlinked directories are not descended into.
    /// Any traversal error aborts the listing and names the entry that could not
    /// be read.
    pub fn list_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let root = root.as_ref();
        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                ExtractorError::file_system("walk directory", path, e.into())
            })?;

            if entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}
