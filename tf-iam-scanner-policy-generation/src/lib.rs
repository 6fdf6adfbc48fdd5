//! Terraform IAM policy generation
//!
//! Scans Terraform configuration for the AWS resources and data sources it
//! declares, resolves each type against a permission knowledge base and produces
//! the IAM policy needed to apply that configuration, rendered as JSON, YAML or
//! Terraform source.
//!
//! The [`api`] module offers a single entry point for the whole pipeline; the
//! building blocks ([`ExtractionEngine`], [`KnowledgeBase`],
//! [`PolicyGenerationEngine`] and [`render`]) can also be used on their own.

pub mod api;
pub mod errors;
pub mod extraction;
pub mod knowledge_base;
pub mod output;
pub mod policy_generation;

mod embedded_data;
mod providers;


pub use errors::{ExtractorError, Result};
pub use extraction::{provider_prefix, BackendDescriptor, DeclaredResource, ExtractionEngine, ParseResult};
pub use knowledge_base::{KnowledgeBase, PermissionEntry, PermissionLookup};
pub use output::{render, OutputFormat};
pub use policy_generation::{
    Effect, Engine as PolicyGenerationEngine, IamPolicy, OneOrMany, Statement, SynthesisOptions,
};
