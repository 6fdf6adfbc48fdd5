//! Permissive line scanner used when a file is not valid HCL.
//!
//! Recognises `resource "<type>" "<name>"` and `data "<type>" "<name>"` headers by
//! whitespace tokenisation, plus a `backend "<kind>"` line inside a `terraform`
//! block. It never fails.

use super::{BackendDescriptor, DeclaredResource, ParseResult};

/// Block kinds the scanner tracks between lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CurrentBlock {
    None,
    Resource,
    Data,
    Terraform,
}

/// Scan `content` line by line and return whatever could be recognised
pub(crate) fn scan_lines(content: &str) -> ParseResult {
    let mut result = ParseResult::default();
    let mut current_block = CurrentBlock::None;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }

        if trimmed.starts_with("resource \"") {
            current_block = CurrentBlock::Resource;
            if let Some((resource_type, name)) = header_labels(trimmed) {
                result
                    .resources
                    .push(DeclaredResource::resource(resource_type, name));
            }
        } else if trimmed.starts_with("data \"") {
            current_block = CurrentBlock::Data;
            if let Some((resource_type, name)) = header_labels(trimmed) {
                result
                    .data_references
                    .push(DeclaredResource::data_reference(resource_type, name));
            }
        }

        if current_block == CurrentBlock::Terraform && trimmed.contains("backend \"") {
            if let Some(kind) = trimmed.split_whitespace().nth(1) {
                result.backend = Some(BackendDescriptor::new(kind.trim_matches('"')));
            }
        }

        if trimmed.starts_with("terraform") {
            current_block = CurrentBlock::Terraform;
        }

        if trimmed == "}" {
            current_block = CurrentBlock::None;
        }
    }

    result
}

/// Type and name tokens of a block header line, quotes stripped.
///
/// A header without a name token gets an empty name; names are never carried
/// over from an earlier header.
fn header_labels(line: &str) -> Option<(&str, &str)> {
    let mut tokens = line.split_whitespace().skip(1);
    let resource_type = tokens.next()?.trim_matches('"');
    let name = tokens.next().map(|t| t.trim_matches('"')).unwrap_or_default();
    Some((resource_type, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovers_blocks_from_malformed_file() {
        let content = r#"
# storage
resource "aws_s3_bucket" "logs" {
  bucket = "logs"
}

// missing closing brace below
resource "aws_sqs_queue" "jobs" {
  name = "jobs"

data "aws_iam_policy_document" "assume" {
"#;

        let result = scan_lines(content);

        let types: Vec<_> = result
            .resources
            .iter()
            .map(|r| (r.resource_type.as_str(), r.name.as_str()))
            .collect();
        assert_eq!(types, vec![("aws_s3_bucket", "logs"), ("aws_sqs_queue", "jobs")]);
        assert_eq!(result.data_references.len(), 1);
        assert_eq!(result.data_references[0].resource_type, "aws_iam_policy_document");
        assert_eq!(result.data_references[0].name, "assume");
        assert!(result.data_references[0].is_data_reference);
    }

    #[test]
    fn test_backend_inside_terraform_block() {
        let content = r#"
terraform {
  backend "s3" {
    bucket = "state"
  }
resource "aws_vpc" "main" {
"#;

        let result = scan_lines(content);

        let backend = result.backend.unwrap();
        assert_eq!(backend.kind, "s3");
        assert!(backend.settings.is_empty());
        assert_eq!(result.resources.len(), 1);
    }

    #[test]
    fn test_backend_outside_terraform_block_is_ignored() {
        let content = r#"
locals {
  backend "s3" {
}
"#;

        assert!(scan_lines(content).backend.is_none());
    }

    #[test]
    fn test_closing_brace_disarms_backend_detection() {
        let content = r#"
terraform {
}
  backend "s3" {
"#;

        assert!(scan_lines(content).backend.is_none());
    }

    #[test]
    fn test_missing_name_token_yields_empty_name() {
        let result = scan_lines("resource \"aws_s3_bucket\"");

        assert_eq!(result.resources.len(), 1);
        assert_eq!(result.resources[0].resource_type, "aws_s3_bucket");
        assert_eq!(result.resources[0].name, "");
    }

    #[test]
    fn test_commented_headers_are_skipped() {
        let content = r#"
# resource "aws_s3_bucket" "old" {
// data "aws_region" "current" {}
"#;

        let result = scan_lines(content);

        assert!(result.is_empty());
    }
}
