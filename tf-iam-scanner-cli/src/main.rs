//! `tf-iam-scanner` command-line entry point

use std::fs;
use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use tf_iam_scanner_policy_generation::api::generate_policy;
use tf_iam_scanner_policy_generation::api::model::{
    GeneratePolicyConfig, GeneratePolicyResult,
};
use tf_iam_scanner_policy_generation::OutputFormat as PolicyFormat;

mod cli;

use cli::Cli;

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // RUST_LOG, when set, takes precedence over the flag
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn print_summary(cli: &Cli, result: &GeneratePolicyResult) {
    let summary = &result.summary;

    if summary.resources_found == 0 && summary.data_sources_found == 0 {
        eprintln!(
            "Warning: No AWS resources or data sources found in {}",
            cli.path.display()
        );
    }

    eprintln!();
    eprintln!("Summary:");
    eprintln!("  Resources found: {}", summary.resources_found);
    eprintln!("  Data sources found: {}", summary.data_sources_found);
    if let Some(backend) = &summary.backend {
        eprintln!("  Backend detected: {}", backend.kind);
        if !cli.include_state_backend {
            eprintln!("    Use --include-state-backend to add backend permissions");
        }
    }
    if cli.least_privilege && !summary.services.is_empty() {
        eprintln!(
            "  Services requiring permissions: {}",
            summary.services.join(", ")
        );
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = GeneratePolicyConfig {
        format: PolicyFormat::from(cli.format).to_string(),
        include_state_backend: cli.include_state_backend,
        least_privilege: cli.least_privilege,
        permissions_file: cli.permissions_file.clone(),
        ..GeneratePolicyConfig::new(&cli.path)
    };
    debug!("Running with {:?}", config);

    let result = generate_policy(&config)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &result.rendered)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            println!("IAM policy written to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", result.rendered).context("Failed to write policy to stdout")?;
        }
    }

    print_summary(cli, &result);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
