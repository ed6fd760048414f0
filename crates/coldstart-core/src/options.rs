//! The options catalog: supported languages, frameworks, and platforms.
//!
//! Loaded from `options.json` at the template root. The catalog drives
//! `coldstart list`, interactive init, and the id → display-name
//! resolution used when merging configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ColdstartError, ColdstartResult};

/// A framework choice nested under a language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkOption {
    pub id: String,
    pub name: String,
    #[serde(default = "default_build_tool")]
    pub build_tool: String,
}

fn default_build_tool() -> String {
    "CLI".to_string()
}

/// A supported programming language and its frameworks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub id: String,
    pub name: String,
    /// Fenced-code-block language tag used inside generated rules.
    #[serde(default)]
    pub code_language: Option<String>,
    #[serde(default)]
    pub frameworks: Vec<FrameworkOption>,
}

impl LanguageOption {
    /// The code-block language tag, falling back to the language id.
    pub fn code_language(&self) -> &str {
        self.code_language.as_deref().unwrap_or(&self.id)
    }
}

/// A supported target platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub default: bool,
}

/// Numeric file-name prefixes per rule category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulePriorities {
    #[serde(default = "default_language_priority")]
    pub languages: u32,
    #[serde(default = "default_framework_priority")]
    pub frameworks: u32,
    #[serde(default = "default_platform_priority")]
    pub platforms: u32,
    #[serde(default = "default_pack_priority")]
    pub packs: u32,
}

fn default_language_priority() -> u32 {
    10
}
fn default_framework_priority() -> u32 {
    20
}
fn default_platform_priority() -> u32 {
    30
}
fn default_pack_priority() -> u32 {
    40
}

impl Default for RulePriorities {
    fn default() -> Self {
        Self {
            languages: default_language_priority(),
            frameworks: default_framework_priority(),
            platforms: default_platform_priority(),
            packs: default_pack_priority(),
        }
    }
}

/// The full catalog parsed from `options.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsCatalog {
    pub languages: Vec<LanguageOption>,
    pub platforms: Vec<PlatformOption>,
    #[serde(default)]
    pub rule_priorities: RulePriorities,
}

impl OptionsCatalog {
    /// Load the catalog from the template root.
    pub fn load(template_root: &Path) -> ColdstartResult<Self> {
        let path = template_root.join("options.json");
        let data = std::fs::read_to_string(&path)
            .map_err(|_| ColdstartError::ConfigNotFound(path.clone()))?;
        serde_json::from_str(&data).map_err(|e| {
            ColdstartError::invalid_config("options.json", e.to_string())
        })
    }

    /// Find a language by id.
    pub fn language(&self, id: &str) -> Option<&LanguageOption> {
        self.languages.iter().find(|l| l.id == id)
    }

    /// Find a framework by id, searching every language.
    pub fn framework(&self, id: &str) -> Option<&FrameworkOption> {
        self.languages
            .iter()
            .flat_map(|l| l.frameworks.iter())
            .find(|f| f.id == id)
    }

    /// The platform marked as default, or the first one.
    pub fn default_platform(&self) -> Option<&PlatformOption> {
        self.platforms
            .iter()
            .find(|p| p.default)
            .or_else(|| self.platforms.first())
    }
}
