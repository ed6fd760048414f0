//! ColdStart CLI
//!
//! Scaffolds AI-assistant rule files for software projects from JSON
//! configuration and a shipped template set.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing; `--verbose` lowers the default filter to debug.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "coldstart=debug,coldstart_core=debug,coldstart_codegen=debug"
    } else {
        "coldstart=info,coldstart_core=info,coldstart_codegen=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute()
}
