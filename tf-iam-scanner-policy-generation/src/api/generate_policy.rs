use anyhow::{Context, Result};
use log::{info, warn};

use crate::api::common::load_knowledge_base;
use crate::api::model::{GeneratePolicyConfig, GeneratePolicyResult, GeneratePolicySummary};
use crate::output::render;
use crate::{ExtractionEngine, PolicyGenerationEngine, SynthesisOptions};

/// Scan a Terraform tree and generate the IAM policy it needs.
///
/// The knowledge base is loaded before any file is read, so a broken knowledge base
/// fails the run without touching the input tree.
pub fn generate_policy(config: &GeneratePolicyConfig) -> Result<GeneratePolicyResult> {
    info!("Generating IAM policy for {}", config.root.display());

    let knowledge_base = load_knowledge_base(config.permissions_file.as_deref())?;

    let parse_result = ExtractionEngine::new()
        .extract_directory(&config.root)
        .context("Failed to parse Terraform files")?;

    let engine = PolicyGenerationEngine::new(knowledge_base);
    let policy = engine.synthesize(
        &parse_result,
        SynthesisOptions {
            include_state_backend: config.include_state_backend,
            least_privilege: config.least_privilege,
        },
    );

    if policy.statements.iter().all(|s| s.action.as_slice().is_empty()) {
        warn!("No IAM actions were resolved for {}", config.root.display());
    }

    let rendered = render(&policy, &config.format).context("Failed to generate IAM policy")?;

    let summary = GeneratePolicySummary {
        resources_found: parse_result.resources.len(),
        data_sources_found: parse_result.data_references.len(),
        backend: parse_result.backend,
        services: policy.services(),
    };

    Ok(GeneratePolicyResult {
        policy,
        rendered,
        summary,
    })
}
