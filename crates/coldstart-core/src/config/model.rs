//! Typed models for the three project configuration files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `project.json` — project identity and IDE targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(rename = "$comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_ides")]
    pub ides: Vec<String>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_ides() -> Vec<String> {
    vec!["cursor".to_string()]
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            comment: None,
            name: String::new(),
            description: String::new(),
            version: default_version(),
            ides: default_ides(),
        }
    }
}

/// `technology.json` — language, framework, and platform choices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyConfig {
    #[serde(rename = "$comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub framework: String,
    #[serde(default)]
    pub platforms: Vec<String>,
}

/// A plain on/off feature toggle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toggle {
    #[serde(default)]
    pub enabled: bool,
}

impl Toggle {
    pub fn on() -> Self {
        Self { enabled: true }
    }
}

/// Logging feature configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingFeature {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default = "default_service_class")]
    pub service_class: String,
    #[serde(default = "default_log_file")]
    pub file_path: String,
}

fn enabled_by_default() -> bool {
    true
}

fn default_service_class() -> String {
    "LogService".to_string()
}

fn default_log_file() -> String {
    "logs/app.log".to_string()
}

impl Default for LoggingFeature {
    fn default() -> Self {
        Self {
            enabled: true,
            service_class: default_service_class(),
            file_path: default_log_file(),
        }
    }
}

/// `features.json` — built-in feature toggles plus open pack toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesConfig {
    #[serde(rename = "$comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub logging: LoggingFeature,
    #[serde(default)]
    pub github_action: Toggle,
    #[serde(default = "toggle_on")]
    pub documentation: Toggle,
    /// Extension packs beyond the built-in three, keyed by pack id.
    #[serde(default)]
    pub packs: BTreeMap<String, Toggle>,
}

fn toggle_on() -> Toggle {
    Toggle::on()
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            comment: None,
            logging: LoggingFeature::default(),
            github_action: Toggle::default(),
            documentation: Toggle::on(),
            packs: BTreeMap::new(),
        }
    }
}

impl FeaturesConfig {
    /// Ids of every enabled pack: built-ins first, then extensions.
    pub fn enabled_packs(&self) -> Vec<String> {
        let mut packs = Vec::new();
        if self.logging.enabled {
            packs.push("logging".to_string());
        }
        if self.github_action.enabled {
            packs.push("github-action".to_string());
        }
        if self.documentation.enabled {
            packs.push("documentation".to_string());
        }
        for (id, toggle) in &self.packs {
            if toggle.enabled {
                packs.push(id.clone());
            }
        }
        packs
    }

    /// Whether a pack id is currently enabled.
    pub fn pack_enabled(&self, id: &str) -> bool {
        match id {
            "logging" => self.logging.enabled,
            "github-action" => self.github_action.enabled,
            "documentation" => self.documentation.enabled,
            other => self.packs.get(other).map(|t| t.enabled).unwrap_or(false),
        }
    }
}

/// The merged configuration the generation pipeline consumes.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub project_name: String,
    pub project_description: String,
    pub project_version: String,
    pub ides: Vec<String>,
    pub language: String,
    pub language_name: String,
    pub code_language: String,
    pub framework: String,
    pub build_tool: String,
    pub platforms: Vec<String>,
    pub features: FeaturesConfig,
}

/// Outcome of checking one configuration file.
#[derive(Debug, Clone)]
pub struct ConfigCheck {
    pub ok: bool,
    pub message: String,
}

impl ConfigCheck {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn incomplete(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_defaults() {
        let features = FeaturesConfig::default();
        assert!(features.logging.enabled);
        assert!(features.documentation.enabled);
        assert!(!features.github_action.enabled);
        assert_eq!(features.enabled_packs(), vec!["logging", "documentation"]);
    }

    #[test]
    fn test_enabled_packs_includes_extensions() {
        let mut features = FeaturesConfig::default();
        features.github_action = Toggle::on();
        features.packs.insert("security".to_string(), Toggle::on());
        features.packs.insert("disabled".to_string(), Toggle::default());

        assert_eq!(
            features.enabled_packs(),
            vec!["logging", "github-action", "documentation", "security"]
        );
    }

    #[test]
    fn test_pack_enabled_lookup() {
        let mut features = FeaturesConfig::default();
        features.packs.insert("security".to_string(), Toggle::on());

        assert!(features.pack_enabled("logging"));
        assert!(!features.pack_enabled("github-action"));
        assert!(features.pack_enabled("security"));
        assert!(!features.pack_enabled("unknown"));
    }

    #[test]
    fn test_features_parse_with_missing_sections() {
        let features: FeaturesConfig = serde_json::from_str(r#"{"githubAction": {"enabled": true}}"#).unwrap();
        assert!(features.logging.enabled);
        assert!(features.github_action.enabled);
        assert_eq!(features.logging.service_class, "LogService");
    }

    #[test]
    fn test_project_defaults() {
        let project: ProjectConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(project.version, "1.0.0");
        assert_eq!(project.ides, vec!["cursor"]);
    }
}
