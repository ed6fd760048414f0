//! CLI command definitions and handlers.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use coldstart_core::paths;

pub mod clean;
pub mod generate;
pub mod init;
pub mod list;

/// ColdStart - AI-assistant rule scaffolding
#[derive(Parser)]
#[command(name = "coldstart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the rules_template directory (defaults to auto-discovery)
    #[arg(long, global = true)]
    pub templates: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a project (scaffold config, then generate rules)
    Init(init::InitArgs),

    /// Regenerate rules from the current configuration
    Generate(generate::GenerateArgs),

    /// List supported languages, frameworks, platforms, IDEs, and packs
    List(list::ListArgs),

    /// Remove generated rule files (and optionally the config directory)
    Clean(clean::CleanArgs),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::execute(args, &resolve_templates(self.templates)?),
            Commands::Generate(args) => {
                generate::execute(args, &resolve_templates(self.templates)?)
            }
            Commands::List(args) => list::execute(args, &resolve_templates(self.templates)?),
            // Clean works off manifests alone; no template root required.
            Commands::Clean(args) => clean::execute(args),
        }
    }
}

fn resolve_templates(overridden: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match overridden {
        Some(dir) => dir,
        None => paths::find_template_dir()?,
    };
    tracing::debug!(dir = %dir.display(), "using template root");
    Ok(dir)
}
