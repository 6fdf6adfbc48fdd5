//! Terraform IAM Scanner Core API Interface

mod common;
mod generate_policy;
pub mod model;

pub use generate_policy::generate_policy;
