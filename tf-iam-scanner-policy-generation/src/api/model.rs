//! Request and response types for the core API

use std::path::PathBuf;

use serde::Serialize;

use crate::extraction::BackendDescriptor;
use crate::policy_generation::IamPolicy;

/// Everything needed for one scan-and-generate run
#[derive(Debug, Clone)]
pub struct GeneratePolicyConfig {
    /// Directory (or single file) to scan
    pub root: PathBuf,
    /// Output format selector: `json`, `yaml` or `terraform`
    pub format: String,
    /// Always add remote-state storage and locking permissions
    pub include_state_backend: bool,
    /// One statement per service with scoped resource ARNs
    pub least_privilege: bool,
    /// Knowledge base to use instead of the embedded one
    pub permissions_file: Option<PathBuf>,
}

impl GeneratePolicyConfig {
    /// Default flags with JSON output
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            format: "json".to_string(),
            include_state_backend: false,
            least_privilege: false,
            permissions_file: None,
        }
    }
}

/// Counts and findings reported alongside the generated policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratePolicySummary {
    pub resources_found: usize,
    pub data_sources_found: usize,
    /// Backend detected during extraction, if any
    pub backend: Option<BackendDescriptor>,
    /// Services that appear in the policy, sorted
    pub services: Vec<String>,
}

/// Result of a scan-and-generate run
#[derive(Debug, Clone)]
pub struct GeneratePolicyResult {
    /// The structured policy
    pub policy: IamPolicy,
    /// The policy rendered in the requested format
    pub rendered: String,
    pub summary: GeneratePolicySummary,
}
