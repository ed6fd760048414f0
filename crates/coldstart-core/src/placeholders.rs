//! Placeholder value assembly.
//!
//! Turns a merged [`GenerationConfig`](crate::config::model::GenerationConfig)
//! into the value set the template engine renders with. Also provides the
//! minimal value set used on first init, before the project is configured.

use chrono::Local;

use crate::config::model::GenerationConfig;
use crate::template::PlaceholderValues;

/// Placeholder shown for fields the user has not configured yet.
const UNCONFIGURED: &str = "to be configured";

/// The minimal value set for first-init core rules.
pub fn minimal_values() -> PlaceholderValues {
    let mut values = PlaceholderValues::new();
    values.insert("PROJECT_NAME".into(), "Untitled Project".into());
    values.insert("PROGRAMMING_LANGUAGE".into(), UNCONFIGURED.into());
    values.insert("FRAMEWORK".into(), UNCONFIGURED.into());
    values.insert("BUILD_TOOL".into(), UNCONFIGURED.into());
    values.insert("CODE_LANGUAGE".into(), "text".into());
    values.insert("TARGET_PLATFORMS".into(), UNCONFIGURED.into());
    values.insert("LOGGER_SERVICE_CLASS".into(), "LogService".into());
    values.insert(
        "GENERATION_DATE".into(),
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string().into(),
    );
    values
}

/// Build the full value set from merged configuration.
pub fn build_values(config: &GenerationConfig) -> PlaceholderValues {
    let mut values = PlaceholderValues::new();

    let project_name = if config.project_name.is_empty() {
        "Untitled Project".to_string()
    } else {
        config.project_name.clone()
    };

    let target_platforms = if config.platforms.is_empty() {
        "web".to_string()
    } else {
        config.platforms.join(", ")
    };

    values.insert("PROJECT_NAME".into(), project_name.into());
    values.insert(
        "PROJECT_DESCRIPTION".into(),
        config.project_description.clone().into(),
    );
    values.insert(
        "PROJECT_VERSION".into(),
        config.project_version.clone().into(),
    );
    values.insert(
        "PROGRAMMING_LANGUAGE".into(),
        config.language_name.clone().into(),
    );
    values.insert("CODE_LANGUAGE".into(), config.code_language.clone().into());
    values.insert("FRAMEWORK".into(), config.framework.clone().into());
    values.insert("BUILD_TOOL".into(), config.build_tool.clone().into());
    values.insert("TARGET_PLATFORMS".into(), target_platforms.into());
    values.insert("PLATFORMS".into(), config.platforms.clone().into());
    values.insert("MODULE_NAME".into(), "app".into());
    values.insert("MODULE_PATH".into(), "**".into());
    values.insert(
        "GENERATION_DATE".into(),
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string().into(),
    );

    values.insert(
        "ENABLE_LOGGING".into(),
        config.features.logging.enabled.into(),
    );
    values.insert(
        "ENABLE_GITHUB_ACTION".into(),
        config.features.github_action.enabled.into(),
    );
    values.insert(
        "ENABLE_DOCUMENTATION".into(),
        config.features.documentation.enabled.into(),
    );
    values.insert(
        "LOGGER_SERVICE_CLASS".into(),
        config.features.logging.service_class.clone().into(),
    );
    values.insert(
        "LOG_FILE_PATH".into(),
        config.features.logging.file_path.clone().into(),
    );
    values.insert(
        "LOG_COLLECT_SCRIPT_PATH".into(),
        "scripts/collect_logs.sh".into(),
    );
    values.insert(
        "LOG_COLLECT_COMMAND".into(),
        "./scripts/collect_logs.sh".into(),
    );

    values.insert(
        "ADDITIONAL_API_METHODS".into(),
        additional_api_methods(&config.code_language).into(),
    );

    for (name, value) in deploy_values(&config.framework) {
        values.insert(name.to_string(), value.to_string().into());
    }

    values
}

fn additional_api_methods(code_language: &str) -> &'static str {
    match code_language {
        "typescript" | "javascript" => {
            "- Warning log: `logger.warn('message', tag: 'TAG')`"
        }
        _ => "",
    }
}

/// Framework-specific deployment guidance placeholders.
fn deploy_values(framework: &str) -> [(&'static str, &'static str); 3] {
    match framework {
        "flutter" => [
            (
                "DEPLOY_SCRIPTS_DESCRIPTION",
                "**Deploy script:** `scripts/deploy.sh`\n\nUse this script to deploy the Flutter app. Do not run flutter commands by hand.\n\n**The script:**\n- detects connected devices\n- builds the app\n- installs it on the device\n- launches the app",
            ),
            (
                "DEPLOY_STEPS_DESCRIPTION",
                "1. **Deploy with the script**\n   - Run: `./scripts/deploy.sh`\n   - The script builds, installs, and launches the app",
            ),
            (
                "DEPLOY_COMMANDS_DESCRIPTION",
                "**Deploy command:**\n\n```bash\n./scripts/deploy.sh\n```\n\nThe script checks the Flutter environment, runs `flutter build`, `flutter install`, and `flutter run`.",
            ),
        ],
        "react" => [
            (
                "DEPLOY_SCRIPTS_DESCRIPTION",
                "**Deploy script:** `scripts/deploy.sh`\n\nUse this script to build and deploy the web app. Do not run npm/yarn commands by hand.\n\n**The script:**\n- installs dependencies\n- builds the app\n- starts the dev server or deploys to production",
            ),
            (
                "DEPLOY_STEPS_DESCRIPTION",
                "1. **Deploy with the script**\n   - Run: `./scripts/deploy.sh`\n   - The script builds and starts the app",
            ),
            (
                "DEPLOY_COMMANDS_DESCRIPTION",
                "**Deploy command:**\n\n```bash\n./scripts/deploy.sh\n```\n\nThe script runs `npm install`, `npm run build`, and `npm run dev`.",
            ),
        ],
        "django" => [
            (
                "DEPLOY_SCRIPTS_DESCRIPTION",
                "**Deploy script:** `scripts/deploy.sh`\n\nUse this script to deploy the Python app. Do not run pip/python commands by hand.\n\n**The script:**\n- installs dependencies\n- runs database migrations\n- starts the app server",
            ),
            (
                "DEPLOY_STEPS_DESCRIPTION",
                "1. **Deploy with the script**\n   - Run: `./scripts/deploy.sh`\n   - The script installs dependencies and starts the app",
            ),
            (
                "DEPLOY_COMMANDS_DESCRIPTION",
                "**Deploy command:**\n\n```bash\n./scripts/deploy.sh\n```\n\nThe script runs `pip install -r requirements.txt`, applies migrations, and starts the server.",
            ),
        ],
        _ => [
            (
                "DEPLOY_SCRIPTS_DESCRIPTION",
                "**Deploy script:** `scripts/deploy.sh`\n\nUse this script to deploy the app. Do not run build commands by hand.\n\n**The script:**\n- builds the app\n- deploys it to the target environment",
            ),
            (
                "DEPLOY_STEPS_DESCRIPTION",
                "1. **Deploy with the script**\n   - Run: `./scripts/deploy.sh`\n   - The script builds and deploys the app",
            ),
            (
                "DEPLOY_COMMANDS_DESCRIPTION",
                "**Deploy command:**\n\n```bash\n./scripts/deploy.sh\n```\n\nThe script builds and deploys the app.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::FeaturesConfig;

    fn config() -> GenerationConfig {
        GenerationConfig {
            project_name: "Demo".to_string(),
            project_description: "a demo".to_string(),
            project_version: "1.0.0".to_string(),
            ides: vec!["cursor".to_string()],
            language: "dart".to_string(),
            language_name: "Dart".to_string(),
            code_language: "dart".to_string(),
            framework: "flutter".to_string(),
            build_tool: "Flutter CLI".to_string(),
            platforms: vec!["android".to_string(), "ios".to_string()],
            features: FeaturesConfig::default(),
        }
    }

    #[test]
    fn test_build_values_core_keys() {
        let values = build_values(&config());
        assert_eq!(values["PROJECT_NAME"], "Demo");
        assert_eq!(values["PROGRAMMING_LANGUAGE"], "Dart");
        assert_eq!(values["TARGET_PLATFORMS"], "android, ios");
        assert_eq!(values["ENABLE_LOGGING"], true);
        assert_eq!(values["ENABLE_GITHUB_ACTION"], false);
        assert!(values.contains_key("GENERATION_DATE"));
        assert!(values.contains_key("DEPLOY_COMMANDS_DESCRIPTION"));
    }

    #[test]
    fn test_platforms_default_to_web() {
        let mut cfg = config();
        cfg.platforms.clear();
        let values = build_values(&cfg);
        assert_eq!(values["TARGET_PLATFORMS"], "web");
    }

    #[test]
    fn test_empty_project_name_gets_placeholder() {
        let mut cfg = config();
        cfg.project_name.clear();
        let values = build_values(&cfg);
        assert_eq!(values["PROJECT_NAME"], "Untitled Project");
    }

    #[test]
    fn test_additional_api_methods_language_dependent() {
        let mut cfg = config();
        cfg.code_language = "typescript".to_string();
        let values = build_values(&cfg);
        assert_ne!(values["ADDITIONAL_API_METHODS"], "");

        cfg.code_language = "dart".to_string();
        let values = build_values(&cfg);
        assert_eq!(values["ADDITIONAL_API_METHODS"], "");
    }

    #[test]
    fn test_minimal_values() {
        let values = minimal_values();
        assert_eq!(values["CODE_LANGUAGE"], "text");
        assert_eq!(values["PROGRAMMING_LANGUAGE"], "to be configured");
    }
}
