//! Rule collection.
//!
//! Walks the template tree and decides which rule files apply to a
//! project configuration. Collection order doubles as generation order:
//! core rules, then language, framework, platform, and pack rules.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use coldstart_core::config::model::GenerationConfig;
use coldstart_core::options::RulePriorities;

const TEMPLATE_SUFFIX: &str = ".template";

/// One rule to render: where its template lives and what the output file
/// is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFile {
    pub template_path: PathBuf,
    pub output_name: String,
}

/// Collects the rule files that apply to a configuration.
#[derive(Debug)]
pub struct RuleCollector {
    template_dir: PathBuf,
    priorities: RulePriorities,
}

impl RuleCollector {
    pub fn new(template_dir: impl Into<PathBuf>, priorities: RulePriorities) -> Self {
        Self {
            template_dir: template_dir.into(),
            priorities,
        }
    }

    /// Collect every rule the configuration calls for.
    pub fn collect(&self, config: &GenerationConfig) -> Vec<RuleFile> {
        let mut rules = self.collect_core();
        rules.extend(self.collect_language(&config.language));
        rules.extend(self.collect_framework(&config.framework));
        rules.extend(self.collect_platforms(&config.platforms));
        rules.extend(self.collect_packs(config));
        debug!(count = rules.len(), "collected rules");
        rules
    }

    /// Collect only the core rules (first init, before configuration).
    pub fn collect_core(&self) -> Vec<RuleFile> {
        let core_dir = self.template_dir.join("templates/core");
        let mut rules = Vec::new();

        let Ok(entries) = std::fs::read_dir(&core_dir) else {
            return rules;
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|n| n.ends_with(TEMPLATE_SUFFIX))
            .collect();
        names.sort();

        for name in names {
            let output_name = name.trim_end_matches(TEMPLATE_SUFFIX).to_string();
            rules.push(RuleFile {
                template_path: core_dir.join(&name),
                output_name,
            });
        }
        rules
    }

    fn collect_language(&self, language: &str) -> Vec<RuleFile> {
        if language.is_empty() {
            return Vec::new();
        }
        self.tech_rule("languages", language, 10, self.priorities.languages)
            .into_iter()
            .collect()
    }

    fn collect_framework(&self, framework: &str) -> Vec<RuleFile> {
        if framework.is_empty() {
            return Vec::new();
        }
        self.tech_rule("frameworks", framework, 20, self.priorities.frameworks)
            .into_iter()
            .collect()
    }

    fn collect_platforms(&self, platforms: &[String]) -> Vec<RuleFile> {
        let mut rules = Vec::new();
        let mut priority = self.priorities.platforms;
        for platform in platforms {
            if let Some(rule) = self.tech_rule("platforms", platform, 30, priority) {
                rules.push(rule);
                priority += 1;
            }
        }
        rules
    }

    /// A rule under `templates/tech/<category>/`.
    ///
    /// Template file names carry their canonical prefix (`10-dart.mdc`);
    /// a bare `dart.mdc.template` is accepted as fallback. The output
    /// prefix always comes from the catalog's rule priorities.
    fn tech_rule(
        &self,
        category: &str,
        id: &str,
        canonical_prefix: u32,
        output_priority: u32,
    ) -> Option<RuleFile> {
        let dir = self.template_dir.join("templates/tech").join(category);
        let candidates = [
            format!("{canonical_prefix}-{id}.mdc{TEMPLATE_SUFFIX}"),
            format!("{id}.mdc{TEMPLATE_SUFFIX}"),
        ];

        for candidate in candidates {
            let path = dir.join(&candidate);
            if path.is_file() {
                return Some(RuleFile {
                    template_path: path,
                    output_name: format!("{output_priority}-{id}.mdc"),
                });
            }
        }
        debug!(category, id, "no template for configured id, skipping");
        None
    }

    fn collect_packs(&self, config: &GenerationConfig) -> Vec<RuleFile> {
        let available = self.available_packs();
        let mut rules = Vec::new();
        for pack_id in config.features.enabled_packs() {
            if let Some(output_name) = available.get(&pack_id) {
                rules.push(RuleFile {
                    template_path: self.pack_template(&pack_id),
                    output_name: output_name.clone(),
                });
            }
        }
        rules
    }

    /// Every pack template on disk, enabled or not, with its output name.
    ///
    /// The injector reconciles against this to remove the rules of packs
    /// that were disabled since the last run.
    pub fn available_packs(&self) -> BTreeMap<String, String> {
        let packs_dir = self.template_dir.join("templates/packs");
        let mut packs = BTreeMap::new();

        let Ok(entries) = std::fs::read_dir(&packs_dir) else {
            return packs;
        };
        for entry in entries.filter_map(|e| e.ok()) {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            let Some(stem) = name.strip_suffix(&format!(".mdc{TEMPLATE_SUFFIX}")) else {
                continue;
            };
            packs.insert(
                stem.to_string(),
                format!("{}-{}.mdc", self.priorities.packs, stem),
            );
        }
        packs
    }

    fn pack_template(&self, pack_id: &str) -> PathBuf {
        self.template_dir
            .join("templates/packs")
            .join(format!("{pack_id}.mdc{TEMPLATE_SUFFIX}"))
    }
}
