//! Terminal output formatting.

use std::collections::BTreeMap;

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use coldstart_codegen::{IdeTarget, InjectReport};
use coldstart_core::options::OptionsCatalog;

/// Status glyph for config check lines.
pub fn status_icon(ok: bool) -> ColoredString {
    if ok {
        "✓".green().bold()
    } else {
        "⚠".yellow().bold()
    }
}

/// Print one injection report.
pub fn print_report(report: &InjectReport) {
    println!(
        "{} {} ({})",
        "→".blue().bold(),
        report.ide.display_name().cyan(),
        report.rules_dir.display()
    );
    for file in &report.written {
        println!("  {} {}", "✓".green(), file);
    }
    for (file, reason) in &report.skipped {
        println!("  {} {} ({})", "⚠".yellow(), file, reason.dimmed());
    }
    for file in &report.deleted {
        println!("  {} {} {}", "✗".red(), file, "(removed)".dimmed());
    }
}

/// Print supported languages with their frameworks.
pub fn print_languages(catalog: &OptionsCatalog) {
    println!("{}", "Supported languages:".bold());
    for lang in &catalog.languages {
        println!("  {:<14} {}", lang.id.cyan(), lang.name);
        if !lang.frameworks.is_empty() {
            let ids: Vec<&str> = lang.frameworks.iter().map(|f| f.id.as_str()).collect();
            println!("  {:<14} {}", "", format!("frameworks: {}", ids.join(", ")).dimmed());
        }
    }
}

/// Print supported frameworks grouped by language.
pub fn print_frameworks(catalog: &OptionsCatalog) {
    println!("{}", "Supported frameworks:".bold());
    for lang in &catalog.languages {
        if lang.frameworks.is_empty() {
            continue;
        }
        println!("  {}:", lang.name);
        for fw in &lang.frameworks {
            println!(
                "    {:<14} {:<16} {}",
                fw.id.cyan(),
                truncate(&fw.name, 16),
                format!("build: {}", fw.build_tool).dimmed()
            );
        }
    }
}

/// Print supported platforms.
pub fn print_platforms(catalog: &OptionsCatalog) {
    println!("{}", "Supported platforms:".bold());
    for platform in &catalog.platforms {
        let marker = if platform.default {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {:<14} {}{}", platform.id.cyan(), platform.name, marker);
    }
}

/// Print known IDE targets and their rules directories.
pub fn print_ides() {
    println!("{}", "IDE targets:".bold());
    for ide in IdeTarget::ALL {
        println!(
            "  {:<14} {:<10} {}",
            ide.id().cyan(),
            ide.display_name(),
            format!("rules: {}", ide.rules_dir()).dimmed()
        );
    }
}

/// Print the rule packs shipped with the template set.
pub fn print_packs(packs: &BTreeMap<String, String>) {
    if packs.is_empty() {
        println!("{}", "No rule packs shipped with this template set.".dimmed());
        return;
    }
    println!("{}", "Rule packs:".bold());
    for (id, output_name) in packs {
        println!("  {:<16} {}", id.cyan(), format!("-> {output_name}").dimmed());
    }
}

/// Truncate to a display width, appending an ellipsis when cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_strings_untouched() {
        assert_eq!(truncate("Flutter", 16), "Flutter");
    }

    #[test]
    fn test_truncate_long_strings() {
        let out = truncate("A very long framework name", 10);
        assert!(out.ends_with('…'));
        assert!(UnicodeWidthStr::width(out.as_str()) <= 10);
    }
}
