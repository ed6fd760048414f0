//! Project configuration: loading, checking, scaffolding, and merging.
//!
//! A ColdStart project keeps its configuration in three JSON files under
//! `.coldstart/config/`. The files are written empty on first init and
//! filled in afterwards (usually by the user's AI assistant); generation
//! refuses to run until the required fields are present.

pub mod model;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ColdstartError, ColdstartResult};
use crate::options::OptionsCatalog;
use model::{
    ConfigCheck, FeaturesConfig, GenerationConfig, ProjectConfig, TechnologyConfig,
};

pub const PROJECT_FILE: &str = "project.json";
pub const TECHNOLOGY_FILE: &str = "technology.json";
pub const FEATURES_FILE: &str = "features.json";

/// The `.coldstart/` state directory inside a target project.
pub fn state_dir(target_dir: &Path) -> PathBuf {
    target_dir.join(".coldstart")
}

/// The config directory inside a target project.
pub fn config_dir(target_dir: &Path) -> PathBuf {
    state_dir(target_dir).join("config")
}

/// Whether the target project has been initialized before.
pub fn is_initialized(target_dir: &Path) -> bool {
    config_dir(target_dir).is_dir()
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> ColdstartResult<T> {
    let data = std::fs::read_to_string(path)
        .map_err(|_| ColdstartError::ConfigNotFound(path.to_path_buf()))?;
    serde_json::from_str(&data).map_err(|e| {
        ColdstartError::invalid_config(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            e.to_string(),
        )
    })
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> ColdstartResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut data = serde_json::to_string_pretty(value)?;
    data.push('\n');
    std::fs::write(path, data)?;
    Ok(())
}

/// Load `project.json`.
pub fn load_project(target_dir: &Path) -> ColdstartResult<ProjectConfig> {
    load_json(&config_dir(target_dir).join(PROJECT_FILE))
}

/// Load `technology.json`.
pub fn load_technology(target_dir: &Path) -> ColdstartResult<TechnologyConfig> {
    load_json(&config_dir(target_dir).join(TECHNOLOGY_FILE))
}

/// Load `features.json`, falling back to defaults when the file is absent.
pub fn load_features(target_dir: &Path) -> ColdstartResult<FeaturesConfig> {
    let path = config_dir(target_dir).join(FEATURES_FILE);
    if !path.exists() {
        return Ok(FeaturesConfig::default());
    }
    load_json(&path)
}

/// Save `project.json`.
pub fn save_project(target_dir: &Path, config: &ProjectConfig) -> ColdstartResult<()> {
    write_json(&config_dir(target_dir).join(PROJECT_FILE), config)
}

/// Save `technology.json`.
pub fn save_technology(target_dir: &Path, config: &TechnologyConfig) -> ColdstartResult<()> {
    write_json(&config_dir(target_dir).join(TECHNOLOGY_FILE), config)
}

/// Save `features.json`.
pub fn save_features(target_dir: &Path, config: &FeaturesConfig) -> ColdstartResult<()> {
    write_json(&config_dir(target_dir).join(FEATURES_FILE), config)
}

/// Check `project.json` for required fields.
pub fn check_project(target_dir: &Path) -> (Option<ProjectConfig>, ConfigCheck) {
    match load_project(target_dir) {
        Err(ColdstartError::ConfigNotFound(_)) => {
            (None, ConfigCheck::incomplete("file not found"))
        }
        Err(e) => (None, ConfigCheck::incomplete(e.to_string())),
        Ok(config) if config.name.is_empty() => (
            Some(config),
            ConfigCheck::incomplete("missing required field: name"),
        ),
        Ok(config) => {
            let message = format!("complete ({})", config.name);
            (Some(config), ConfigCheck::ok(message))
        }
    }
}

/// Check `technology.json` for required fields.
pub fn check_technology(target_dir: &Path) -> (Option<TechnologyConfig>, ConfigCheck) {
    match load_technology(target_dir) {
        Err(ColdstartError::ConfigNotFound(_)) => {
            (None, ConfigCheck::incomplete("file not found"))
        }
        Err(e) => (None, ConfigCheck::incomplete(e.to_string())),
        Ok(config) if config.language.is_empty() => (
            Some(config),
            ConfigCheck::incomplete("missing required field: language"),
        ),
        Ok(config) => {
            let message = if config.framework.is_empty() {
                format!("complete ({})", config.language)
            } else {
                format!("complete ({} + {})", config.language, config.framework)
            };
            (Some(config), ConfigCheck::ok(message))
        }
    }
}

/// Check `features.json`; an absent file is fine (defaults apply).
pub fn check_features(target_dir: &Path) -> (FeaturesConfig, ConfigCheck) {
    let path = config_dir(target_dir).join(FEATURES_FILE);
    if !path.exists() {
        return (FeaturesConfig::default(), ConfigCheck::ok("using defaults"));
    }
    match load_features(target_dir) {
        Ok(config) => (config, ConfigCheck::ok("complete")),
        Err(e) => (FeaturesConfig::default(), ConfigCheck::incomplete(e.to_string())),
    }
}

/// Write the empty configuration files a fresh project starts from.
pub fn scaffold(target_dir: &Path) -> ColdstartResult<Vec<String>> {
    let dir = config_dir(target_dir);
    std::fs::create_dir_all(&dir)?;

    let mut written = Vec::new();

    let project = ProjectConfig {
        comment: Some("Project identity - fill in 'name' before generating rules".to_string()),
        ..ProjectConfig::default()
    };
    write_json(&dir.join(PROJECT_FILE), &project)?;
    written.push(format!("config/{PROJECT_FILE}"));

    let technology = TechnologyConfig {
        comment: Some(
            "Technology stack - run 'coldstart list' for available options".to_string(),
        ),
        ..TechnologyConfig::default()
    };
    write_json(&dir.join(TECHNOLOGY_FILE), &technology)?;
    written.push(format!("config/{TECHNOLOGY_FILE}"));

    let features = FeaturesConfig {
        comment: Some("Feature toggles - each maps to an optional rule pack".to_string()),
        ..FeaturesConfig::default()
    };
    write_json(&dir.join(FEATURES_FILE), &features)?;
    written.push(format!("config/{FEATURES_FILE}"));

    let readme = state_dir(target_dir).join("README.md");
    std::fs::write(&readme, scaffold_readme())?;
    written.push("README.md".to_string());

    debug!(target = %target_dir.display(), "scaffolded config directory");
    Ok(written)
}

fn scaffold_readme() -> &'static str {
    r#"# ColdStart Configuration

This directory is managed by the ColdStart scaffolder.

## Layout

```
.coldstart/
└── config/
    ├── project.json      # project identity and IDE targets
    ├── technology.json   # language, framework, platforms
    └── features.json     # feature toggles (rule packs)
```

## Usage

1. Fill in the config files (your AI assistant can help).
2. Run `coldstart init .` again to generate the customized rules.

`project.json` requires `name`; `technology.json` requires `language`.
Run `coldstart list` to see the supported languages, frameworks, and
platforms.
"#
}

/// Merge the three config files into the pipeline's view, resolving ids
/// against the options catalog.
pub fn merge(
    project: &ProjectConfig,
    technology: &TechnologyConfig,
    features: &FeaturesConfig,
    catalog: &OptionsCatalog,
) -> GenerationConfig {
    let language_option = catalog.language(&technology.language);
    let language_name = language_option
        .map(|l| l.name.clone())
        .unwrap_or_else(|| technology.language.clone());
    let code_language = language_option
        .map(|l| l.code_language().to_string())
        .unwrap_or_else(|| technology.language.clone());

    let build_tool = catalog
        .framework(&technology.framework)
        .map(|f| f.build_tool.clone())
        .unwrap_or_else(|| "CLI".to_string());

    GenerationConfig {
        project_name: project.name.clone(),
        project_description: project.description.clone(),
        project_version: project.version.clone(),
        ides: project.ides.clone(),
        language: technology.language.clone(),
        language_name,
        code_language,
        framework: technology.framework.clone(),
        build_tool,
        platforms: technology.platforms.clone(),
        features: features.clone(),
    }
}
