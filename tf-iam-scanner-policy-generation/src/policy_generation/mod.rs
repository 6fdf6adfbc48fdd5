//! IAM policy model and synthesis
//!
//! The types here serialize directly to the AWS policy grammar: field names are
//! `Version`, `Statement`, `Effect`, `Action` and `Resource`, in that order.

use serde::{Deserialize, Serialize};

pub(crate) mod arn_patterns;
pub(crate) mod engine;
pub(crate) mod grouping;

pub use arn_patterns::resource_arn_for_service;
pub use engine::{Engine, SynthesisOptions, STATE_BACKEND_ACTIONS, WILDCARD_THRESHOLD};

/// Policy language version written into every generated policy
pub const POLICY_VERSION: &str = "2012-10-17";

/// Statement effect
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Effect {
    Allow,
}

/// A field that serializes as a bare string when it holds one value and as a
/// list otherwise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// The contained values as a slice
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

/// A single IAM policy statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statement {
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Action")]
    pub action: OneOrMany,
    #[serde(rename = "Resource")]
    pub resource: OneOrMany,
}

impl Statement {
    /// An `Allow` statement over `actions` on a single resource pattern
    pub fn allow(actions: Vec<String>, resource: impl Into<String>) -> Self {
        Self {
            effect: Effect::Allow,
            action: OneOrMany::Many(actions),
            resource: OneOrMany::One(resource.into()),
        }
    }
}

/// An IAM policy document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IamPolicy {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Statement")]
    pub statements: Vec<Statement>,
}

impl IamPolicy {
    /// Wrap statements with the fixed policy version
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statements,
        }
    }

    /// Service prefixes that appear in any statement's actions, sorted and unique
    pub fn services(&self) -> Vec<String> {
        let mut services: Vec<String> = self
            .statements
            .iter()
            .flat_map(|statement| statement.action.as_slice())
            .filter_map(|action| action.split_once(':').map(|(service, _)| service.to_string()))
            .collect();
        services.sort();
        services.dedup();
        services
    }
}
