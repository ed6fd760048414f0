//! Explicit regeneration command.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use coldstart_codegen::{parse_targets, GenerationMode, RuleGenerator};
use coldstart_core::config;
use coldstart_core::options::OptionsCatalog;

use crate::output;

#[derive(Args)]
pub struct GenerateArgs {
    /// Target project directory (defaults to the current directory)
    pub target: Option<PathBuf>,

    /// Preview without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Generate only the core rules, with minimal placeholder values
    #[arg(long)]
    pub core_only: bool,

    /// Override the configured IDE targets (repeatable)
    #[arg(long = "ide", value_name = "ID")]
    pub ides: Vec<String>,
}

pub fn execute(args: GenerateArgs, template_dir: &Path) -> Result<()> {
    let target = args.target.unwrap_or_else(|| PathBuf::from("."));
    let target = target
        .canonicalize()
        .with_context(|| format!("failed to resolve target directory {}", target.display()))?;

    if !config::is_initialized(&target) {
        bail!(
            "{} is not a ColdStart project. Run 'coldstart init {}' first.",
            target.display(),
            target.display()
        );
    }

    let (project, project_check) = config::check_project(&target);
    let (technology, tech_check) = config::check_technology(&target);
    if !project_check.ok || !tech_check.ok {
        println!(
            "  {} project.json - {}",
            output::status_icon(project_check.ok),
            project_check.message
        );
        println!(
            "  {} technology.json - {}",
            output::status_icon(tech_check.ok),
            tech_check.message
        );
        println!();
        println!("{}", "Configuration incomplete; fill in the required fields and retry.".yellow());
        return Ok(());
    }

    let (features, _) = config::check_features(&target);
    let catalog = OptionsCatalog::load(template_dir)?;
    let merged = config::merge(
        &project.expect("checked above"),
        &technology.expect("checked above"),
        &features,
        &catalog,
    );

    let ides = if args.ides.is_empty() {
        parse_targets(&merged.ides)?
    } else {
        parse_targets(&args.ides)?
    };

    let mode = if args.core_only {
        GenerationMode::CoreOnly
    } else {
        GenerationMode::Full
    };

    let generator = RuleGenerator::new(template_dir, catalog);

    if args.dry_run {
        let plan = generator.plan(&merged, mode);
        println!(
            "{} Would generate {} rules into {} IDE target(s):",
            "→".dimmed(),
            plan.len(),
            ides.len()
        );
        for ide in &ides {
            println!("  {}/", ide.rules_dir());
            for rule in &plan {
                println!("    {}", rule.output_name);
            }
        }
        println!();
        println!("{}", "(dry run - no files written)".dimmed());
        return Ok(());
    }

    let reports = generator.generate(&target, &merged, &ides, mode)?;
    for report in &reports {
        output::print_report(report);
    }

    println!();
    println!("{}", "Rules generated.".green().bold());
    Ok(())
}
