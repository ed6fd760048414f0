//! Clean command - remove generated rule files.
//!
//! Deletion is scoped to what the manifests record; hand-written rules
//! and unrelated files are never touched.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use coldstart_codegen::manifest::{Manifest, MANIFEST_FILE};
use coldstart_codegen::IdeTarget;
use coldstart_core::config;

#[derive(Args)]
pub struct CleanArgs {
    /// Target project directory (defaults to the current directory)
    pub target: Option<PathBuf>,

    /// Confirm the deletion
    #[arg(long)]
    pub confirm: bool,

    /// Also remove the .coldstart/ configuration directory
    #[arg(long)]
    pub config: bool,
}

pub fn execute(args: CleanArgs) -> Result<()> {
    let target = args.target.unwrap_or_else(|| PathBuf::from("."));
    let target = target
        .canonicalize()
        .with_context(|| format!("failed to resolve target directory {}", target.display()))?;

    // Every IDE directory that carries a manifest, configured or not.
    let tracked: Vec<(IdeTarget, Manifest)> = IdeTarget::ALL
        .iter()
        .filter_map(|&ide| {
            Manifest::load(&ide.rules_dir_in(&target)).map(|manifest| (ide, manifest))
        })
        .collect();

    if tracked.is_empty() && !args.config {
        println!("{}", "Nothing to clean: no generated rules found.".dimmed());
        return Ok(());
    }

    if !args.confirm {
        println!("{}", "This will permanently delete:".red().bold());
        for (ide, manifest) in &tracked {
            println!(
                "  {} {}/ ({} generated rules)",
                "•".red(),
                ide.rules_dir(),
                manifest.files.len()
            );
        }
        if args.config {
            println!("  {} .coldstart/ (configuration)", "•".red());
        }
        println!();
        println!("Run with {} to confirm.", "--confirm".bold());
        if !args.config {
            println!("{}", "  Add --config to also remove .coldstart/".dimmed());
        }
        return Ok(());
    }

    println!("{}", "Cleaning generated rules...".bold());
    for (ide, manifest) in &tracked {
        let rules_dir = ide.rules_dir_in(&target);
        let mut removed = 0usize;
        for file in &manifest.files {
            if remove_if_present(&rules_dir.join(file))? {
                removed += 1;
            }
        }
        remove_if_present(&rules_dir.join(MANIFEST_FILE))?;
        println!(
            "  {} {}/ ({} files removed)",
            "✓".green(),
            ide.rules_dir(),
            removed
        );
    }

    if args.config {
        let state_dir = config::state_dir(&target);
        if state_dir.exists() {
            std::fs::remove_dir_all(&state_dir)
                .with_context(|| format!("failed to remove {}", state_dir.display()))?;
            println!("  {} Removed .coldstart/", "✓".green());
        }
    }

    println!();
    println!("{}", "Clean complete.".green().bold());
    Ok(())
}

fn remove_if_present(path: &Path) -> Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("failed to remove {}", path.display())),
    }
}
