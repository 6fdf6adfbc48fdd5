//! Policy encoders
//!
//! Renders an [`IamPolicy`] as JSON, YAML, or Terraform source that can be pasted
//! into a configuration tree.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ExtractorError, Result};
use crate::policy_generation::IamPolicy;
use crate::providers::JsonProvider;

mod terraform;

/// Supported output encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Json,
    Yaml,
    Terraform,
}

impl OutputFormat {
    /// Every supported format, in the order they are documented
    pub const ALL: [Self; 3] = [Self::Json, Self::Yaml, Self::Terraform];

    /// The selector string for this format
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Terraform => "terraform",
        }
    }

    /// Render `policy` in this format
    pub fn render(self, policy: &IamPolicy) -> Result<String> {
        match self {
            Self::Json => JsonProvider::stringify_pretty(policy),
            Self::Yaml => serde_yaml::to_string(policy).map_err(ExtractorError::from),
            Self::Terraform => Ok(terraform::render(policy)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ExtractorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ExtractorError::UnsupportedFormat(s.to_string()))
    }
}

/// Render `policy` using a format selector string.
///
/// Fails with [`ExtractorError::UnsupportedFormat`] for anything but `json`, `yaml`
/// or `terraform`.
pub fn render(policy: &IamPolicy, format: &str) -> Result<String> {
    format.parse::<OutputFormat>()?.render(policy)
}
