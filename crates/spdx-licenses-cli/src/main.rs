use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use spdx_licenses_core::{ExtractConfig, extract_to};

mod args;

/// Exit status for usage errors and rejected documents.
const EXIT_FAILURE: u8 = 1;

fn main() -> Result<ExitCode> {
    // The only argument is the SBOM path; anything else is a usage error.
    let args = match args::Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            eprint!("{}", args::Args::command().render_long_help());
            return Ok(ExitCode::from(EXIT_FAILURE));
        }
    };

    // Diagnostics go to stderr; stdout carries only the license lines.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let mut stdout = std::io::stdout().lock();

    match extract_to(&args.sbom_path, &ExtractConfig::default(), &mut stdout) {
        Ok(count) => {
            tracing::debug!(count, "listed package licenses");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_document_schema() => {
            eprintln!("{err}");
            Ok(ExitCode::from(EXIT_FAILURE))
        }
        Err(err) => Err(err.into()),
    }
}
