//! The rule template engine.
//!
//! Rule templates are authored in a small legacy dialect: bare
//! `UPPER_SNAKE` placeholders (`{{ PROJECT_NAME }}`), conditionals
//! (`{% if ENABLE_LOGGING %}`, `{% if not ENABLE_LOGGING %}`) and loops
//! (`{% for item in TARGET_PLATFORMS %}`), where any identifier may be
//! absent from the value set. Absent identifiers are falsy/empty, never a
//! render error.
//!
//! Rendering is two-phase: regex passes normalize the dialect into strict
//! Tera syntax, then a scan pass backfills every referenced identifier
//! that the value set does not define (loop sources become empty arrays,
//! condition flags false, interpolations empty strings). Lower-case
//! identifiers are loop variables and are left for Tera to resolve.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tera::{Context, Tera};

use crate::error::{ColdstartError, ColdstartResult};

/// Placeholder name → value, as fed into the render context.
pub type PlaceholderValues = BTreeMap<String, serde_json::Value>;

static VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([A-Z_][A-Z0-9_]*)\s*\}\}").unwrap());
static IF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{%\s*if\s+(not\s+)?([A-Z_][A-Z0-9_]*)\s*%\}").unwrap());
static FOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{%\s*for\s+([a-z_][a-zA-Z0-9_]*)\s+in\s+([A-Z_][A-Z0-9_]*)\s*%\}").unwrap()
});
static ENDIF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{%\s*endif\s*%\}").unwrap());
static ENDFOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{%\s*endfor\s*%\}").unwrap());

/// Renders legacy-dialect templates through Tera.
#[derive(Debug, Default)]
pub struct TemplateEngine;

impl TemplateEngine {
    pub fn new() -> Self {
        Self
    }

    /// Render template source against the given values.
    pub fn render(&self, source: &str, values: &PlaceholderValues) -> ColdstartResult<String> {
        self.render_named("<inline>", source, values)
    }

    /// Render a template file.
    pub fn render_file(
        &self,
        template_path: &Path,
        values: &PlaceholderValues,
    ) -> ColdstartResult<String> {
        let source = std::fs::read_to_string(template_path)?;
        self.render_named(&template_path.display().to_string(), &source, values)
    }

    /// Render a template file and write the result, creating parent
    /// directories as needed.
    pub fn render_to_file(
        &self,
        template_path: &Path,
        output_path: &Path,
        values: &PlaceholderValues,
    ) -> ColdstartResult<()> {
        let content = self.render_file(template_path, values)?;
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    fn render_named(
        &self,
        path: &str,
        source: &str,
        values: &PlaceholderValues,
    ) -> ColdstartResult<String> {
        let translated = translate(source);

        let mut filled = values.clone();
        fill_missing(&mut filled, &translated);

        let mut context = Context::new();
        for (name, value) in &filled {
            context.insert(name, value);
        }

        let mut tera = Tera::default();
        tera.render_str(&translated, &context)
            .map_err(|source| ColdstartError::Template {
                path: path.to_string(),
                source,
            })
    }
}

/// Normalize the legacy dialect into strict Tera syntax.
///
/// The passes only touch tags whose identifier is `UPPER_SNAKE`; anything
/// else (loop variables, literal braces in rule prose) passes through.
pub fn translate(source: &str) -> String {
    let content = IF_RE.replace_all(source, |caps: &Captures| {
        if caps.get(1).is_some() {
            format!("{{% if not {} %}}", &caps[2])
        } else {
            format!("{{% if {} %}}", &caps[2])
        }
    });
    let content = FOR_RE.replace_all(&content, "{% for $1 in $2 %}");
    let content = VAR_RE.replace_all(&content, "{{ $1 }}");
    let content = ENDIF_RE.replace_all(&content, "{% endif %}");
    let content = ENDFOR_RE.replace_all(&content, "{% endfor %}");
    content.into_owned()
}

/// Backfill identifiers the template references but the values omit.
///
/// Loop sources default to empty arrays, condition flags to `false`, and
/// interpolations to empty strings, in that precedence order.
pub fn fill_missing(values: &mut PlaceholderValues, source: &str) {
    for caps in FOR_RE.captures_iter(source) {
        values
            .entry(caps[2].to_string())
            .or_insert_with(|| serde_json::Value::Array(Vec::new()));
    }
    for caps in IF_RE.captures_iter(source) {
        values
            .entry(caps[2].to_string())
            .or_insert(serde_json::Value::Bool(false));
    }
    for caps in VAR_RE.captures_iter(source) {
        values
            .entry(caps[1].to_string())
            .or_insert_with(|| serde_json::Value::String(String::new()));
    }
}
