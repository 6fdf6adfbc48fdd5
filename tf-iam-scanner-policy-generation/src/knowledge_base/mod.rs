//! Permission knowledge base
//!
//! Maps a Terraform resource type (e.g. `aws_s3_bucket`) to the IAM actions needed
//! to manage it and the IAM resource types those actions touch. The mapping is
//! loaded once and never mutated afterwards, so it is shared behind an [`Arc`]
//! and handed explicitly to whatever needs it.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use log::{debug, info};
use serde::Deserialize;

use crate::embedded_data::{PermissionsData, PERMISSIONS_FILE};
use crate::errors::{ExtractorError, Result};
use crate::providers::{FileSystemProvider, JsonProvider};

/// Actions and related IAM resource types required for one Terraform resource type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[non_exhaustive]
pub struct PermissionEntry {
    /// The Terraform resource type this entry is keyed by
    #[serde(skip)]
    pub resource_type: String,
    /// IAM actions in `service:Verb` form, in source order
    pub actions: Vec<String>,
    /// IAM resource types the actions apply to
    #[serde(rename = "resource_types", default)]
    pub related_resource_types: Vec<String>,
}

/// Read-only lookup of the actions required for a resource type.
///
/// Unknown types yield an empty slice, never an error.
pub trait PermissionLookup: std::fmt::Debug + Send + Sync {
    /// Ordered action list for `resource_type`
    fn actions_for(&self, resource_type: &str) -> &[String];
}

/// Immutable resource-type → permission mapping
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: HashMap<String, PermissionEntry>,
}

static EMBEDDED: OnceLock<Arc<KnowledgeBase>> = OnceLock::new();

impl KnowledgeBase {
    /// Decode a knowledge base from JSON text.
    ///
    /// `origin` only labels errors (a file path or `embedded`).
    pub fn from_json(json_str: &str, origin: &str) -> Result<Self> {
        let raw: HashMap<String, PermissionEntry> = JsonProvider::parse(json_str)
            .map_err(|e| ExtractorError::knowledge_base(origin, e.to_string()))?;

        let entries = raw
            .into_iter()
            .map(|(resource_type, mut entry)| {
                entry.resource_type.clone_from(&resource_type);
                (resource_type, entry)
            })
            .collect::<HashMap<_, _>>();

        debug!(
            "Loaded {} permission entries from {}",
            entries.len(),
            origin
        );

        Ok(Self { entries })
    }

    /// Load a knowledge base from a JSON file on disk
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = FileSystemProvider::read_file(path)?;
        Self::from_json(&content, &path.display().to_string())
    }

    /// The knowledge base compiled into the binary.
    ///
    /// Decoded on first use; every later call returns the same shared instance.
    pub fn embedded() -> Result<Arc<Self>> {
        if let Some(knowledge_base) = EMBEDDED.get() {
            return Ok(Arc::clone(knowledge_base));
        }

        let data = PermissionsData::get_permissions().ok_or_else(|| {
            ExtractorError::knowledge_base("embedded", format!("{PERMISSIONS_FILE} is missing"))
        })?;
        let json_str = std::str::from_utf8(&data)
            .map_err(|e| ExtractorError::knowledge_base("embedded", e.to_string()))?;
        let loaded = Arc::new(Self::from_json(json_str, "embedded")?);

        info!(
            "Embedded knowledge base ready with {} resource types",
            loaded.len()
        );

        Ok(Arc::clone(EMBEDDED.get_or_init(|| loaded)))
    }

    /// The full entry for a resource type, if known
    pub fn entry(&self, resource_type: &str) -> Option<&PermissionEntry> {
        self.entries.get(resource_type)
    }

    /// IAM resource types associated with a resource type; empty when unknown
    pub fn related_resource_types(&self, resource_type: &str) -> &[String] {
        self.entry(resource_type)
            .map(|entry| entry.related_resource_types.as_slice())
            .unwrap_or_default()
    }

    /// Number of resource types known
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no resource types are known
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = &PermissionEntry> {
        self.entries.values()
    }
}

impl PermissionLookup for KnowledgeBase {
    fn actions_for(&self, resource_type: &str) -> &[String] {
        self.entry(resource_type)
            .map(|entry| entry.actions.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "aws_s3_bucket": {
            "actions": ["s3:CreateBucket", "s3:DeleteBucket", "s3:GetBucketLocation", "s3:ListBucket"],
            "resource_types": ["bucket"]
        },
        "aws_sqs_queue": {
            "actions": ["sqs:CreateQueue"]
        }
    }"#;

    #[test]
    fn test_lookup_known_type_returns_entry_actions_in_order() {
        let knowledge_base = KnowledgeBase::from_json(SAMPLE, "test").unwrap();

        assert_eq!(
            knowledge_base.actions_for("aws_s3_bucket"),
            [
                "s3:CreateBucket",
                "s3:DeleteBucket",
                "s3:GetBucketLocation",
                "s3:ListBucket"
            ]
        );
        assert_eq!(
            knowledge_base.entry("aws_s3_bucket").unwrap().resource_type,
            "aws_s3_bucket"
        );
    }

    #[test]
    fn test_lookup_unknown_type_is_empty() {
        let knowledge_base = KnowledgeBase::from_json(SAMPLE, "test").unwrap();

        assert!(knowledge_base.actions_for("aws_not_a_thing").is_empty());
        assert!(knowledge_base.related_resource_types("aws_not_a_thing").is_empty());
        assert!(knowledge_base.entry("aws_not_a_thing").is_none());
    }

    #[test]
    fn test_related_resource_types_default_to_empty() {
        let knowledge_base = KnowledgeBase::from_json(SAMPLE, "test").unwrap();

        assert_eq!(knowledge_base.related_resource_types("aws_s3_bucket"), ["bucket"]);
        assert!(knowledge_base.related_resource_types("aws_sqs_queue").is_empty());
    }

    #[test]
    fn test_malformed_json_is_knowledge_base_error() {
        let result = KnowledgeBase::from_json(r#"{"aws_s3_bucket": {"actions": "s3:*"}}"#, "broken.json");

        let error = result.unwrap_err();
        assert!(matches!(error, ExtractorError::KnowledgeBase { .. }));
        assert!(error.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("permissions.json");
        fs::write(&path, SAMPLE).unwrap();

        let knowledge_base = KnowledgeBase::load_from_path(&path).unwrap();

        assert_eq!(knowledge_base.len(), 2);
        assert!(!knowledge_base.is_empty());
    }

    #[test]
    fn test_load_from_missing_path_is_file_system_error() {
        let result = KnowledgeBase::load_from_path("no/such/permissions.json");

        assert!(matches!(result, Err(ExtractorError::FileSystem { .. })));
    }

    #[test]
    fn test_embedded_is_shared_instance() {
        let first = KnowledgeBase::embedded().unwrap();
        let second = KnowledgeBase::embedded().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(first
            .actions_for("aws_lambda_function")
            .contains(&"lambda:CreateFunction".to_string()));
    }
}
