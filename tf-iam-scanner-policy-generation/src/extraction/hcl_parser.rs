//! Structured extraction of Terraform blocks using `hcl-rs`

use std::collections::BTreeMap;

use hcl::eval::{Context, Evaluate};
use hcl::{Block, Body};
use log::trace;

use super::{BackendDescriptor, DeclaredResource, ParseResult};

/// Parse a configuration document and collect its top-level blocks.
///
/// Fails only when the document is not valid HCL; callers fall back to the line
/// scanner in that case.
pub(crate) fn parse_document(content: &str) -> Result<ParseResult, hcl::Error> {
    let body: Body = hcl::parse(content)?;
    let mut result = ParseResult::default();

    for block in body.blocks() {
        match block.identifier() {
            "resource" => {
                if let Some(resource) = extract_resource(block) {
                    result.resources.push(resource);
                }
            }
            "data" => {
                if let Some(data_reference) = extract_data_reference(block) {
                    result.data_references.push(data_reference);
                }
            }
            "terraform" => {
                if result.backend.is_none() {
                    result.backend = extract_backend(block);
                }
            }
            other => trace!("Skipping top-level '{}' block", other),
        }
    }

    Ok(result)
}

/// The `(type, name)` labels of a block, if it has at least two
fn type_and_name(block: &Block) -> Option<(&str, &str)> {
    match block.labels() {
        [resource_type, name, ..] => Some((resource_type.as_str(), name.as_str())),
        _ => None,
    }
}

fn extract_resource(block: &Block) -> Option<DeclaredResource> {
    let (resource_type, name) = type_and_name(block)?;
    let attributes = evaluate_attributes(block.body());

    Some(DeclaredResource::resource(resource_type, name).with_attributes(attributes))
}

fn extract_data_reference(block: &Block) -> Option<DeclaredResource> {
    let (resource_type, name) = type_and_name(block)?;
    Some(DeclaredResource::data_reference(resource_type, name))
}

/// Find the first labelled `backend` block nested in a `terraform` block
fn extract_backend(block: &Block) -> Option<BackendDescriptor> {
    let backend = block
        .body()
        .blocks()
        .find(|nested| nested.identifier() == "backend" && !nested.labels().is_empty())?;

    let kind = backend.labels()[0].as_str();
    let settings = evaluate_attributes(backend.body())
        .into_iter()
        .filter_map(|(key, value)| match value {
            hcl::Value::String(s) => Some((key, s)),
            _ => None,
        })
        .collect();

    Some(BackendDescriptor {
        kind: kind.to_string(),
        settings,
    })
}

/// Evaluate every direct attribute with an empty context.
///
/// References to variables, locals or other resources cannot be resolved and are
/// dropped.
fn evaluate_attributes(body: &Body) -> BTreeMap<String, hcl::Value> {
    let context = Context::new();
    body.attributes()
        .filter_map(|attribute| match attribute.expr().evaluate(&context) {
            Ok(value) => Some((attribute.key().to_string(), value)),
            Err(errors) => {
                trace!("Dropping attribute '{}': {}", attribute.key(), errors);
                None
            }
        })
        .collect()
}
