use std::path::PathBuf;

use clap::Parser;
use tf_iam_scanner_policy_generation::OutputFormat as PolicyFormat;

/// Terraform IAM policy scanner
///
/// Scans Terraform configuration for AWS resources and data sources and prints
/// the IAM policy required to manage them.
#[derive(Parser, Debug)]
#[command(name = "tf-iam-scanner")]
#[command(version)]
#[command(about, long_about)]
pub struct Cli {
    /// Directory (or single .tf file) to scan
    #[arg(short = 'p', long = "path", default_value = ".", env = "TF_IAM_SCANNER_PATH")]
    pub path: PathBuf,

    /// Write the policy to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Include permissions for the S3/DynamoDB state backend
    #[arg(long = "include-state-backend")]
    pub include_state_backend: bool,

    /// Emit one statement per service with scoped resource ARNs
    #[arg(long = "least-privilege")]
    pub least_privilege: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "json")]
    pub format: OutputFormat,

    /// Permission knowledge base to use instead of the built-in one
    #[arg(long = "permissions-file", env = "TF_IAM_SCANNER_PERMISSIONS")]
    pub permissions_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Terraform,
}

impl From<OutputFormat> for PolicyFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Self::Json,
            OutputFormat::Yaml => Self::Yaml,
            OutputFormat::Terraform => Self::Terraform,
        }
    }
}
