//! The generation facade.
//!
//! Ties the pipeline together: collect the rules a configuration calls
//! for, assemble placeholder values, and inject into every configured
//! IDE target.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use coldstart_core::config::model::GenerationConfig;
use coldstart_core::options::OptionsCatalog;
use coldstart_core::placeholders;
use coldstart_core::template::TemplateEngine;

use crate::collector::{RuleCollector, RuleFile};
use crate::ide::IdeTarget;
use crate::injector::{InjectReport, RuleInjector};

/// How much of the rule set to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Everything the configuration calls for.
    Full,
    /// Core rules only, with minimal placeholder values (first init).
    CoreOnly,
}

/// Drives collection, rendering, and injection.
pub struct RuleGenerator {
    template_dir: PathBuf,
    catalog: OptionsCatalog,
}

impl RuleGenerator {
    pub fn new(template_dir: impl Into<PathBuf>, catalog: OptionsCatalog) -> Self {
        Self {
            template_dir: template_dir.into(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &OptionsCatalog {
        &self.catalog
    }

    fn collector(&self) -> RuleCollector {
        RuleCollector::new(&self.template_dir, self.catalog.rule_priorities.clone())
    }

    /// The rules a run would generate, without touching the target.
    pub fn plan(&self, config: &GenerationConfig, mode: GenerationMode) -> Vec<RuleFile> {
        match mode {
            GenerationMode::Full => self.collector().collect(config),
            GenerationMode::CoreOnly => self.collector().collect_core(),
        }
    }

    /// Run the full pipeline for every IDE target.
    pub fn generate(
        &self,
        target_dir: &Path,
        config: &GenerationConfig,
        ides: &[IdeTarget],
        mode: GenerationMode,
    ) -> Result<Vec<InjectReport>> {
        let rules = self.plan(config, mode);
        let values = match mode {
            GenerationMode::Full => placeholders::build_values(config),
            GenerationMode::CoreOnly => placeholders::minimal_values(),
        };
        self.inject_all(target_dir, ides, &rules, &values)
    }

    /// Generate core rules with minimal values (first init, no config yet).
    pub fn generate_core(
        &self,
        target_dir: &Path,
        ides: &[IdeTarget],
    ) -> Result<Vec<InjectReport>> {
        let rules = self.collector().collect_core();
        let values = placeholders::minimal_values();
        self.inject_all(target_dir, ides, &rules, &values)
    }

    fn inject_all(
        &self,
        target_dir: &Path,
        ides: &[IdeTarget],
        rules: &[RuleFile],
        values: &coldstart_core::template::PlaceholderValues,
    ) -> Result<Vec<InjectReport>> {
        let engine = TemplateEngine::new();
        let injector = RuleInjector::new(&engine, values);

        let mut reports = Vec::with_capacity(ides.len());
        for &ide in ides {
            let report = injector.inject(target_dir, ide, rules)?;
            info!(
                ide = %ide,
                written = report.written.len(),
                deleted = report.deleted.len(),
                "injected rules"
            );
            reports.push(report);
        }
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coldstart_core::config::model::FeaturesConfig;
    use tempfile::TempDir;

    fn write_template(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn catalog() -> OptionsCatalog {
        serde_json::from_str(
            r#"{
                "languages": [{"id": "dart", "name": "Dart", "frameworks": []}],
                "platforms": [{"id": "web", "name": "Web", "default": true}]
            }"#,
        )
        .unwrap()
    }

    fn config() -> GenerationConfig {
        GenerationConfig {
            project_name: "Demo".to_string(),
            project_description: String::new(),
            project_version: "1.0.0".to_string(),
            ides: vec!["cursor".to_string()],
            language: "dart".to_string(),
            language_name: "Dart".to_string(),
            code_language: "dart".to_string(),
            framework: String::new(),
            build_tool: "CLI".to_string(),
            platforms: vec!["web".to_string()],
            features: FeaturesConfig::default(),
        }
    }

    #[test]
    fn test_generate_into_multiple_ides() {
        let templates = TempDir::new().unwrap();
        write_template(
            templates.path(),
            "templates/core/00-core.mdc.template",
            "# {{ PROJECT_NAME }}\nLanguage: {{ PROGRAMMING_LANGUAGE }}\n",
        );
        write_template(
            templates.path(),
            "templates/tech/languages/10-dart.mdc.template",
            "Dart rules for {{ PROJECT_NAME }}\n",
        );

        let target = TempDir::new().unwrap();
        let generator = RuleGenerator::new(templates.path(), catalog());
        let reports = generator
            .generate(
                target.path(),
                &config(),
                &[IdeTarget::Cursor, IdeTarget::Windsurf],
                GenerationMode::Full,
            )
            .unwrap();

        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(report.written.len(), 2);
        }

        let cursor_rule = target.path().join(".cursor/rules/00-core.mdc");
        let windsurf_rule = target.path().join(".windsurf/rules/00-core.mdc");
        assert!(cursor_rule.exists());
        assert!(windsurf_rule.exists());
        assert!(std::fs::read_to_string(cursor_rule)
            .unwrap()
            .contains("Language: Dart"));
    }

    #[test]
    fn test_core_only_uses_minimal_values() {
        let templates = TempDir::new().unwrap();
        write_template(
            templates.path(),
            "templates/core/00-core.mdc.template",
            "Language: {{ PROGRAMMING_LANGUAGE }}\n",
        );

        let target = TempDir::new().unwrap();
        let generator = RuleGenerator::new(templates.path(), catalog());
        generator
            .generate_core(target.path(), &[IdeTarget::Cursor])
            .unwrap();

        let content =
            std::fs::read_to_string(target.path().join(".cursor/rules/00-core.mdc")).unwrap();
        assert_eq!(content, "Language: to be configured\n");
    }

    #[test]
    fn test_plan_lists_without_writing() {
        let templates = TempDir::new().unwrap();
        write_template(
            templates.path(),
            "templates/core/00-core.mdc.template",
            "core\n",
        );

        let generator = RuleGenerator::new(templates.path(), catalog());
        let plan = generator.plan(&config(), GenerationMode::Full);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].output_name, "00-core.mdc");
    }
}
