//! Terraform configuration extraction
//!
//! Turns a directory of `.tf` files (and any `.tfstate` files alongside them) into a
//! flat [`ParseResult`]: declared resources, data references and an optional
//! remote-state backend. Expressions are not evaluated beyond literals and no
//! dependency graph is built.

use std::collections::BTreeMap;

use serde::Serialize;

pub(crate) mod engine;
pub(crate) mod fallback;
pub(crate) mod hcl_parser;
pub(crate) mod state_file;

pub use engine::ExtractionEngine;

/// Provider assumed when the type name carries no usable prefix
pub const DEFAULT_PROVIDER: &str = "aws";

/// Suffix of Terraform configuration files
pub(crate) const CONFIGURATION_SUFFIX: &str = ".tf";

/// Suffix of Terraform state files
pub(crate) const STATE_FILE_SUFFIX: &str = ".tfstate";

/// A `resource` or `data` block found in configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct DeclaredResource {
    /// Full Terraform type, e.g. `aws_s3_bucket`
    pub resource_type: String,
    /// Instance name, e.g. `logs` in `resource "aws_s3_bucket" "logs"`
    pub name: String,
    /// Provider derived from the type name, see [`provider_prefix`]
    pub provider: String,
    /// True for `data` blocks
    pub is_data_reference: bool,
    /// Attributes whose values could be evaluated without any context
    pub attributes: BTreeMap<String, hcl::Value>,
}

impl DeclaredResource {
    /// A managed resource with no captured attributes
    pub fn resource(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(resource_type.into(), name.into(), false)
    }

    /// A read-only data reference
    pub fn data_reference(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(resource_type.into(), name.into(), true)
    }

    fn new(resource_type: String, name: String, is_data_reference: bool) -> Self {
        Self {
            provider: provider_prefix(&resource_type).to_string(),
            resource_type,
            name,
            is_data_reference,
            attributes: BTreeMap::new(),
        }
    }

    /// Attach statically evaluated attributes
    #[must_use]
    pub fn with_attributes(mut self, attributes: BTreeMap<String, hcl::Value>) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Remote-state backend declared in a `terraform` block or implied by a state file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendDescriptor {
    /// Backend kind, e.g. `s3`
    pub kind: String,
    /// String-valued backend settings
    pub settings: BTreeMap<String, String>,
}

impl BackendDescriptor {
    /// A backend with no settings
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            settings: BTreeMap::new(),
        }
    }
}

/// Everything extracted from one or more configuration files
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseResult {
    pub resources: Vec<DeclaredResource>,
    pub data_references: Vec<DeclaredResource>,
    pub backend: Option<BackendDescriptor>,
}

impl ParseResult {
    /// Append another file's findings.
    ///
    /// A block-derived backend only fills an empty slot; the first one wins.
    pub(crate) fn merge(&mut self, other: Self) {
        self.resources.extend(other.resources);
        self.data_references.extend(other.data_references);
        if self.backend.is_none() {
            self.backend = other.backend;
        }
    }

    /// True when neither resources nor data references were found
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty() && self.data_references.is_empty()
    }
}

/// Derive the provider name from a Terraform type name.
///
/// This is a heuristic: `aws_*` maps to `aws`, anything else with an underscore maps
/// to the text before the first underscore, and a bare name falls back to
/// [`DEFAULT_PROVIDER`]. Providers whose own name contains an underscore are split
/// incorrectly.
pub fn provider_prefix(resource_type: &str) -> &str {
    if resource_type.starts_with("aws_") {
        return "aws";
    }
    match resource_type.split_once('_') {
        Some((prefix, _)) => prefix,
        None => DEFAULT_PROVIDER,
    }
}
