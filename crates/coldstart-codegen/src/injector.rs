//! Rule injection.
//!
//! Renders collected rules into one IDE's rules directory and reconciles
//! the directory against the previous run: files recorded in the old
//! manifest that are no longer expected (stale tech rules after a config
//! change, rules of packs that were disabled) are deleted. Files the
//! manifest never recorded are user files and are left alone.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use coldstart_core::template::{PlaceholderValues, TemplateEngine};

use crate::collector::RuleFile;
use crate::ide::IdeTarget;
use crate::manifest::Manifest;

/// What one injection run did, for CLI reporting.
#[derive(Debug, Clone)]
pub struct InjectReport {
    pub ide: IdeTarget,
    pub rules_dir: PathBuf,
    pub written: Vec<String>,
    /// Rules whose template failed to render: (output name, reason).
    pub skipped: Vec<(String, String)>,
    pub deleted: Vec<String>,
}

/// Injects rendered rules into a single IDE target.
pub struct RuleInjector<'a> {
    engine: &'a TemplateEngine,
    values: &'a PlaceholderValues,
}

impl<'a> RuleInjector<'a> {
    pub fn new(engine: &'a TemplateEngine, values: &'a PlaceholderValues) -> Self {
        Self { engine, values }
    }

    /// Render `rules` into the IDE's rules directory under `target_dir`,
    /// delete stale generated files, and save the new manifest.
    pub fn inject(
        &self,
        target_dir: &Path,
        ide: IdeTarget,
        rules: &[RuleFile],
    ) -> Result<InjectReport> {
        let rules_dir = ide.rules_dir_in(target_dir);
        std::fs::create_dir_all(&rules_dir)
            .with_context(|| format!("failed to create {}", rules_dir.display()))?;

        let mut expected = BTreeSet::new();
        let mut written = Vec::new();
        let mut skipped = Vec::new();

        for rule in rules {
            // A failed render keeps its slot in the expected set so a
            // previously generated copy is not deleted underneath it.
            expected.insert(rule.output_name.clone());

            let output_path = rules_dir.join(&rule.output_name);
            match self
                .engine
                .render_to_file(&rule.template_path, &output_path, self.values)
            {
                Ok(()) => {
                    debug!(file = %rule.output_name, ide = %ide, "wrote rule");
                    written.push(rule.output_name.clone());
                }
                Err(e) => {
                    warn!(file = %rule.output_name, error = %e, "skipping rule");
                    skipped.push((rule.output_name.clone(), e.to_string()));
                }
            }
        }

        let deleted = self.reconcile(&rules_dir, &expected);

        Manifest::new(expected).save(&rules_dir)?;

        Ok(InjectReport {
            ide,
            rules_dir,
            written,
            skipped,
            deleted,
        })
    }

    /// Delete previously generated files that are no longer expected.
    fn reconcile(&self, rules_dir: &Path, expected: &BTreeSet<String>) -> Vec<String> {
        let Some(previous) = Manifest::load(rules_dir) else {
            // First run or lost manifest: nothing is safe to delete.
            return Vec::new();
        };

        let mut deleted = Vec::new();
        for file in &previous.files {
            if expected.contains(file) {
                continue;
            }
            let path = rules_dir.join(file);
            match std::fs::remove_file(&path) {
                Ok(()) => {
                    debug!(file = %file, "deleted stale rule");
                    deleted.push(file.clone());
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    deleted.push(file.clone());
                }
                Err(e) => {
                    warn!(file = %file, error = %e, "failed to delete stale rule");
                }
            }
        }
        deleted
    }
}
