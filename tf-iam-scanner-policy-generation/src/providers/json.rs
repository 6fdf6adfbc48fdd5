//! Native JSON provider implementation backed by `serde_json`.

use serde::{Deserialize, Serialize};

use crate::errors::{ExtractorError, Result};

/// Native JSON provider using `serde_json`.
///
/// All operations are stateless and do not require mutable access.
#[derive(Debug, Clone)]
pub struct NativeJsonProvider;

impl NativeJsonProvider {
    /// Parse JSON string into a typed value.
    pub(crate) fn parse<T>(json_str: &str) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        serde_json::from_str(json_str).map_err(ExtractorError::from)
    }

    /// Serialize a value to a pretty-printed JSON string (two-space indent).
    pub fn stringify_pretty<T>(value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        serde_json::to_string_pretty(value).map_err(ExtractorError::from)
    }
}
