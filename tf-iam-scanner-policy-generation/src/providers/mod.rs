//! Thin wrappers over filesystem and JSON primitives

// Native filesystem provider implementation
pub(crate) mod filesystem;

// Native JSON provider implementation
pub(crate) mod json;

/// Type alias for the filesystem provider implementation.
///
/// Resolves to [`NativeFileSystemProvider`](filesystem::NativeFileSystemProvider).
pub type FileSystemProvider = filesystem::NativeFileSystemProvider;

/// Type alias for the JSON provider implementation.
///
/// Resolves to [`NativeJsonProvider`](json::NativeJsonProvider).
pub type JsonProvider = json::NativeJsonProvider;
