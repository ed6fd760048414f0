//! Catalog listing command.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use coldstart_codegen::RuleCollector;
use coldstart_core::options::OptionsCatalog;

use crate::output;

#[derive(Args)]
pub struct ListArgs {
    /// What to list (defaults to an overview)
    #[arg(value_enum)]
    pub kind: Option<ListKind>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ListKind {
    Languages,
    Frameworks,
    Platforms,
    Ides,
    Packs,
}

pub fn execute(args: ListArgs, template_dir: &Path) -> Result<()> {
    let catalog = OptionsCatalog::load(template_dir)?;

    match args.kind {
        Some(ListKind::Languages) => output::print_languages(&catalog),
        Some(ListKind::Frameworks) => output::print_frameworks(&catalog),
        Some(ListKind::Platforms) => output::print_platforms(&catalog),
        Some(ListKind::Ides) => output::print_ides(),
        Some(ListKind::Packs) => {
            let collector =
                RuleCollector::new(template_dir, catalog.rule_priorities.clone());
            output::print_packs(&collector.available_packs());
        }
        None => {
            output::print_languages(&catalog);
            println!();
            output::print_platforms(&catalog);
            println!();
            println!(
                "{}",
                "Hint: 'coldstart list frameworks|ides|packs' for more.".dimmed()
            );
        }
    }

    Ok(())
}
