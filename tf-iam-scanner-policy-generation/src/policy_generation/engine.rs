//! Policy generation engine implementation
//!
//! Resolves extracted resources against the permission knowledge base, unions the
//! resulting actions and shapes them into either one wildcard-resource statement or
//! one scoped statement per service.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, info};

use super::arn_patterns::{resource_arn_for_service, ANY_RESOURCE};
use super::grouping::{collapse_by_service, partition_by_service};
use super::{IamPolicy, Statement};
use crate::errors::Result;
use crate::extraction::ParseResult;
use crate::knowledge_base::PermissionLookup;
use crate::output;

/// Services with more than this many distinct actions collapse to `service:*`
pub const WILDCARD_THRESHOLD: usize = 5;

/// Actions needed to read, write and lock remote Terraform state
pub const STATE_BACKEND_ACTIONS: [&str; 8] = [
    "s3:GetObject",
    "s3:PutObject",
    "s3:ListBucket",
    "s3:DeleteObject",
    "dynamodb:GetItem",
    "dynamodb:PutItem",
    "dynamodb:DeleteItem",
    "dynamodb:DescribeTable",
];

/// The only provider whose resources are resolved
const SUPPORTED_PROVIDER: &str = "aws";

/// Verb fragments that mark an action as read-only
const READ_ONLY_MARKERS: [&str; 3] = ["Describe", "Get", "List"];

/// Switches that shape the generated policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Always add remote-state storage and locking actions
    pub include_state_backend: bool,
    /// Emit one statement per service with scoped resources
    pub least_privilege: bool,
}

/// Policy generation engine that converts extracted resources into an IAM policy
#[derive(Debug, Clone)]
pub struct Engine {
    knowledge_base: Arc<dyn PermissionLookup>,
}

impl Engine {
    /// Create an engine reading from the given knowledge base
    pub fn new(knowledge_base: Arc<dyn PermissionLookup>) -> Self {
        Self { knowledge_base }
    }

    /// Union of every action the extracted configuration needs, sorted.
    ///
    /// Resources contribute all of their actions; data references only contribute
    /// read-only ones. State-backend actions are added when requested or when a
    /// backend was detected.
    pub fn collect_actions(
        &self,
        parse_result: &ParseResult,
        include_state_backend: bool,
    ) -> Vec<String> {
        let mut actions: BTreeSet<String> = BTreeSet::new();

        for resource in &parse_result.resources {
            if resource.provider != SUPPORTED_PROVIDER || resource.resource_type.is_empty() {
                continue;
            }
            let resolved = self.knowledge_base.actions_for(&resource.resource_type);
            if resolved.is_empty() {
                debug!("No permissions known for {}", resource.resource_type);
            }
            actions.extend(resolved.iter().cloned());
        }

        for data_reference in &parse_result.data_references {
            let resource_type = data_reference
                .resource_type
                .strip_prefix("data.")
                .unwrap_or(&data_reference.resource_type);
            if resource_type.is_empty() {
                continue;
            }
            actions.extend(
                self.knowledge_base
                    .actions_for(resource_type)
                    .iter()
                    .filter(|action| is_read_only(action))
                    .cloned(),
            );
        }

        if include_state_backend || parse_result.backend.is_some() {
            actions.extend(STATE_BACKEND_ACTIONS.iter().map(|a| a.to_string()));
        }

        actions.into_iter().collect()
    }

    /// Build the structured policy for the extracted configuration
    pub fn synthesize(&self, parse_result: &ParseResult, options: SynthesisOptions) -> IamPolicy {
        let actions = self.collect_actions(parse_result, options.include_state_backend);

        let statements = if options.least_privilege {
            let mut statements: Vec<Statement> = partition_by_service(&actions)
                .into_iter()
                .map(|(service, service_actions)| {
                    Statement::allow(service_actions, resource_arn_for_service(&service))
                })
                .collect();
            statements.sort_by(|a, b| a.action.as_slice().first().cmp(&b.action.as_slice().first()));
            statements
        } else {
            vec![Statement::allow(
                collapse_by_service(actions, WILDCARD_THRESHOLD),
                ANY_RESOURCE,
            )]
        };

        info!("Generated policy with {} statement(s)", statements.len());

        IamPolicy::new(statements)
    }

    /// Build the policy and render it in `format` (`json`, `yaml` or `terraform`)
    pub fn generate(
        &self,
        parse_result: &ParseResult,
        options: SynthesisOptions,
        format: &str,
    ) -> Result<String> {
        let policy = self.synthesize(parse_result, options);
        output::render(&policy, format)
    }
}

fn is_read_only(action: &str) -> bool {
    READ_ONLY_MARKERS.iter().any(|marker| action.contains(marker))
}
