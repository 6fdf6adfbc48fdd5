//! Embedded permission knowledge base
//!
//! The default resource-type → IAM action mapping is compiled into the binary so
//! that the scanner works without any data files next to it.

use rust_embed::RustEmbed;

/// Name of the embedded knowledge base file
pub(crate) const PERMISSIONS_FILE: &str = "permissions.json";

/// Embedded permission mapping with compression
#[derive(RustEmbed)]
#[folder = "resources/config"]
#[include = "*.json"]
pub(crate) struct PermissionsData;

impl PermissionsData {
    /// Get the raw bytes of the embedded knowledge base
    pub(crate) fn get_permissions() -> Option<std::borrow::Cow<'static, [u8]>> {
        let start_time = std::time::Instant::now();

        let result = Self::get(PERMISSIONS_FILE).map(|file| file.data);

        if let Some(data) = &result {
            log::debug!(
                "Loaded embedded {}: {}KB in {:?}",
                PERMISSIONS_FILE,
                data.len() / 1024,
                start_time.elapsed()
            );
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissions_file_is_embedded() {
        let data = PermissionsData::get_permissions().expect("permissions.json should be embedded");
        assert!(!data.is_empty());
    }
}
