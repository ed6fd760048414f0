//! End-to-end generation flow: configure, generate, reconfigure,
//! regenerate, and check the rules directories reconcile.

use std::path::Path;

use coldstart_codegen::{GenerationMode, IdeTarget, RuleGenerator};
use coldstart_core::config;
use coldstart_core::options::OptionsCatalog;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn template_root(tmp: &Path) {
    write(
        tmp,
        "options.json",
        r#"{
            "languages": [
                {"id": "dart", "name": "Dart", "frameworks": [
                    {"id": "flutter", "name": "Flutter", "buildTool": "Flutter CLI"}
                ]},
                {"id": "typescript", "name": "TypeScript", "frameworks": [
                    {"id": "react", "name": "React", "buildTool": "npm"}
                ]}
            ],
            "platforms": [
                {"id": "web", "name": "Web", "default": true},
                {"id": "android", "name": "Android"}
            ]
        }"#,
    );
    write(
        tmp,
        "templates/core/00-core.mdc.template",
        "# {{ PROJECT_NAME }}\n\nStack: {{ PROGRAMMING_LANGUAGE }} + {{ FRAMEWORK }}\nPlatforms: {{ TARGET_PLATFORMS }}\n",
    );
    write(
        tmp,
        "templates/tech/languages/10-dart.mdc.template",
        "Write idiomatic {{ PROGRAMMING_LANGUAGE }}.\n",
    );
    write(
        tmp,
        "templates/tech/languages/10-typescript.mdc.template",
        "Write idiomatic {{ PROGRAMMING_LANGUAGE }}.\n",
    );
    write(
        tmp,
        "templates/tech/frameworks/20-flutter.mdc.template",
        "Build with {{ BUILD_TOOL }}.\n",
    );
    write(
        tmp,
        "templates/packs/logging.mdc.template",
        "{% if ENABLE_LOGGING %}Log through {{ LOGGER_SERVICE_CLASS }}.{% endif %}\n",
    );
    write(
        tmp,
        "templates/packs/github-action.mdc.template",
        "CI runs on GitHub Actions.\n",
    );
}

fn configure(target: &Path, language: &str, framework: &str, github_action: bool) {
    let dir = config::config_dir(target);
    std::fs::create_dir_all(&dir).unwrap();
    write(
        &dir,
        "project.json",
        r#"{"name": "Demo", "description": "demo project", "ides": ["cursor", "windsurf"]}"#,
    );
    write(
        &dir,
        "technology.json",
        &format!(
            r#"{{"language": "{language}", "framework": "{framework}", "platforms": ["web"]}}"#
        ),
    );
    write(
        &dir,
        "features.json",
        &format!(
            r#"{{"logging": {{"enabled": true}}, "githubAction": {{"enabled": {github_action}}}, "documentation": {{"enabled": false}}}}"#
        ),
    );
}

fn generate(templates: &Path, target: &Path) -> Vec<String> {
    let catalog = OptionsCatalog::load(templates).unwrap();
    let project = config::load_project(target).unwrap();
    let technology = config::load_technology(target).unwrap();
    let features = config::load_features(target).unwrap();
    let merged = config::merge(&project, &technology, &features, &catalog);

    let ides: Vec<IdeTarget> = merged.ides.iter().map(|i| i.parse().unwrap()).collect();
    let generator = RuleGenerator::new(templates, catalog);
    let reports = generator
        .generate(target, &merged, &ides, GenerationMode::Full)
        .unwrap();

    let mut written = reports[0].written.clone();
    written.sort();
    written
}

#[test]
fn test_full_flow_with_reconciliation() {
    let templates = tempfile::TempDir::new().unwrap();
    let target = tempfile::TempDir::new().unwrap();
    template_root(templates.path());

    // First generation: dart + flutter, logging on, github-action on.
    configure(target.path(), "dart", "flutter", true);
    let written = generate(templates.path(), target.path());
    assert_eq!(
        written,
        vec![
            "00-core.mdc",
            "10-dart.mdc",
            "20-flutter.mdc",
            "40-github-action.mdc",
            "40-logging.mdc",
        ]
    );

    // Both configured IDEs got the rules.
    let cursor_dir = target.path().join(".cursor/rules");
    let windsurf_dir = target.path().join(".windsurf/rules");
    assert!(cursor_dir.join("10-dart.mdc").exists());
    assert!(windsurf_dir.join("10-dart.mdc").exists());

    let core = std::fs::read_to_string(cursor_dir.join("00-core.mdc")).unwrap();
    assert!(core.contains("# Demo"));
    assert!(core.contains("Stack: Dart + flutter"));
    assert!(core.contains("Platforms: web"));

    let logging = std::fs::read_to_string(cursor_dir.join("40-logging.mdc")).unwrap();
    assert!(logging.contains("Log through LogService."));

    // The user adds a rule of their own.
    std::fs::write(cursor_dir.join("99-mine.mdc"), "hands off\n").unwrap();

    // Reconfigure: switch to typescript/react, drop github-action.
    configure(target.path(), "typescript", "react", false);
    let written = generate(templates.path(), target.path());
    // No react template shipped, so only core + language + logging.
    assert_eq!(
        written,
        vec!["00-core.mdc", "10-typescript.mdc", "40-logging.mdc"]
    );

    // Stale rules are gone from both IDE directories.
    for dir in [&cursor_dir, &windsurf_dir] {
        assert!(!dir.join("10-dart.mdc").exists());
        assert!(!dir.join("20-flutter.mdc").exists());
        assert!(!dir.join("40-github-action.mdc").exists());
        assert!(dir.join("10-typescript.mdc").exists());
    }

    // The hand-written rule survived.
    assert!(cursor_dir.join("99-mine.mdc").exists());
}

#[test]
fn test_core_only_then_full_upgrade() {
    let templates = tempfile::TempDir::new().unwrap();
    let target = tempfile::TempDir::new().unwrap();
    template_root(templates.path());

    let catalog = OptionsCatalog::load(templates.path()).unwrap();
    let generator = RuleGenerator::new(templates.path(), catalog);

    // First init: core rules only, minimal placeholder values.
    generator
        .generate_core(target.path(), &[IdeTarget::Cursor])
        .unwrap();
    let core =
        std::fs::read_to_string(target.path().join(".cursor/rules/00-core.mdc")).unwrap();
    assert!(core.contains("to be configured"));

    // After configuration, the full run overwrites with real values.
    configure(target.path(), "dart", "flutter", false);
    generate(templates.path(), target.path());
    let core =
        std::fs::read_to_string(target.path().join(".cursor/rules/00-core.mdc")).unwrap();
    assert!(core.contains("Stack: Dart + flutter"));
}
