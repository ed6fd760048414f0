//! Project initialization command.
//!
//! Two-phase, like the rest of the tool's workflow: the first run
//! scaffolds empty configuration and generic core rules; once the
//! configuration is filled in, the next run generates the customized
//! rule set for every configured IDE.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use coldstart_codegen::{parse_targets, GenerationMode, IdeTarget, RuleGenerator};
use coldstart_core::config;
use coldstart_core::options::OptionsCatalog;

use crate::output;

#[derive(Args)]
pub struct InitArgs {
    /// Target project directory (defaults to the current directory)
    pub target: Option<PathBuf>,

    /// Collect configuration through interactive prompts
    #[arg(long)]
    pub interactive: bool,
}

pub fn execute(args: InitArgs, template_dir: &Path) -> Result<()> {
    let target = args.target.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&target)
        .with_context(|| format!("failed to create target directory {}", target.display()))?;
    let target = target
        .canonicalize()
        .with_context(|| format!("failed to resolve target directory {}", target.display()))?;

    let catalog = OptionsCatalog::load(template_dir)?;

    println!("{}", "ColdStart - project initialization".bold());
    println!("Target: {}", target.display());
    println!();

    if args.interactive {
        if !config::is_initialized(&target) {
            config::scaffold(&target)?;
        }
        collect_interactive(&target, &catalog)?;
        println!();
        return generate_full(&target, template_dir, catalog);
    }

    if config::is_initialized(&target) {
        update_init(&target, template_dir, catalog)
    } else {
        first_init(&target, template_dir, catalog)
    }
}

/// First run: empty config + generic core rules.
fn first_init(target: &Path, template_dir: &Path, catalog: OptionsCatalog) -> Result<()> {
    println!("{} First initialization", "→".blue().bold());
    println!();

    let written = config::scaffold(target)?;
    for file in &written {
        println!("  {} .coldstart/{}", "✓".green(), file);
    }
    println!();

    println!("{} Injecting generic core rules...", "→".blue().bold());
    let generator = RuleGenerator::new(template_dir, catalog);
    let reports = generator.generate_core(target, &[IdeTarget::Cursor])?;
    for report in &reports {
        output::print_report(report);
    }

    println!();
    println!("{}", "First initialization complete.".green().bold());
    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. Fill in the config files (your AI assistant can help):");
    println!("       .coldstart/config/project.json");
    println!("       .coldstart/config/technology.json");
    println!("       .coldstart/config/features.json");
    println!("  2. Run init again to generate the customized rules:");
    println!("       coldstart init {}", target.display());

    Ok(())
}

/// Subsequent runs: check config, then regenerate everything.
fn update_init(target: &Path, template_dir: &Path, catalog: OptionsCatalog) -> Result<()> {
    println!("{} Checking configuration...", "→".blue().bold());

    let (project, project_check) = config::check_project(target);
    println!(
        "  {} project.json - {}",
        output::status_icon(project_check.ok),
        project_check.message
    );

    let (technology, tech_check) = config::check_technology(target);
    println!(
        "  {} technology.json - {}",
        output::status_icon(tech_check.ok),
        tech_check.message
    );

    let (features, features_check) = config::check_features(target);
    println!(
        "  {} features.json - {}",
        output::status_icon(features_check.ok),
        features_check.message
    );
    println!();

    if !project_check.ok || !tech_check.ok {
        println!("{}", "Configuration incomplete; fill in the required fields and retry.".yellow());
        println!("{}", "Hint: your AI assistant can fill in .coldstart/config/ for you.".dimmed());
        return Ok(());
    }

    let merged = config::merge(
        &project.expect("checked above"),
        &technology.expect("checked above"),
        &features,
        &catalog,
    );
    let ides = parse_targets(&merged.ides)?;

    println!("{} Generating rules...", "→".blue().bold());
    let generator = RuleGenerator::new(template_dir, catalog);
    let reports = generator.generate(target, &merged, &ides, GenerationMode::Full)?;
    for report in &reports {
        output::print_report(report);
    }

    println!();
    println!("{}", "Rules generated.".green().bold());
    Ok(())
}

/// The post-prompt generation path; config is known to be complete.
fn generate_full(target: &Path, template_dir: &Path, catalog: OptionsCatalog) -> Result<()> {
    let project = config::load_project(target)?;
    let technology = config::load_technology(target)?;
    let features = config::load_features(target)?;
    let merged = config::merge(&project, &technology, &features, &catalog);
    let ides = parse_targets(&merged.ides)?;

    println!("{} Generating rules...", "→".blue().bold());
    let generator = RuleGenerator::new(template_dir, catalog);
    let reports = generator.generate(target, &merged, &ides, GenerationMode::Full)?;
    for report in &reports {
        output::print_report(report);
    }

    println!();
    println!("{}", "Rules generated.".green().bold());
    Ok(())
}

/// Collect project configuration through terminal prompts.
fn collect_interactive(target: &Path, catalog: &OptionsCatalog) -> Result<()> {
    let mut project = config::load_project(target).unwrap_or_default();
    let mut features = config::load_features(target).unwrap_or_default();

    let name: String = Input::new()
        .with_prompt("Project name")
        .default(if project.name.is_empty() {
            "Untitled Project".to_string()
        } else {
            project.name.clone()
        })
        .interact_text()
        .context("failed to read project name")?;

    let description: String = Input::new()
        .with_prompt("Short description")
        .allow_empty(true)
        .default(project.description.clone())
        .interact_text()
        .context("failed to read description")?;

    let language_names: Vec<&str> = catalog.languages.iter().map(|l| l.name.as_str()).collect();
    anyhow::ensure!(!language_names.is_empty(), "options catalog lists no languages");
    let language_idx = Select::new()
        .with_prompt("Programming language")
        .items(&language_names)
        .default(0)
        .interact()
        .context("failed to read language choice")?;
    let language = &catalog.languages[language_idx];

    let framework = match language.frameworks.len() {
        0 => String::new(),
        1 => {
            println!(
                "  {} framework: {}",
                "auto-selected".dimmed(),
                language.frameworks[0].name
            );
            language.frameworks[0].id.clone()
        }
        _ => {
            let framework_names: Vec<&str> =
                language.frameworks.iter().map(|f| f.name.as_str()).collect();
            let idx = Select::new()
                .with_prompt("Framework")
                .items(&framework_names)
                .default(0)
                .interact()
                .context("failed to read framework choice")?;
            language.frameworks[idx].id.clone()
        }
    };

    let platform_names: Vec<&str> = catalog.platforms.iter().map(|p| p.name.as_str()).collect();
    let preselected: Vec<bool> = catalog.platforms.iter().map(|p| p.default).collect();
    let chosen = MultiSelect::new()
        .with_prompt("Target platforms (space to toggle)")
        .items(&platform_names)
        .defaults(&preselected)
        .interact()
        .context("failed to read platform choices")?;
    let mut platforms: Vec<String> = chosen
        .into_iter()
        .map(|i| catalog.platforms[i].id.clone())
        .collect();
    if platforms.is_empty() {
        if let Some(default) = catalog.default_platform() {
            platforms.push(default.id.clone());
        }
    }

    let github_action = Confirm::new()
        .with_prompt("Enable the GitHub Actions rule pack?")
        .default(features.github_action.enabled)
        .interact()
        .context("failed to read GitHub Actions choice")?;

    project.name = name;
    project.description = description;
    config::save_project(target, &project)?;

    let technology = coldstart_core::config::model::TechnologyConfig {
        comment: None,
        language: language.id.clone(),
        framework,
        platforms,
    };
    config::save_technology(target, &technology)?;

    features.github_action.enabled = github_action;
    config::save_features(target, &features)?;

    println!();
    println!("{} Configuration saved", "✓".green().bold());
    Ok(())
}
