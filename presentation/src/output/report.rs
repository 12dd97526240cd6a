//! Human-facing reports for the validate and list commands
//!
//! These functions only render strings; the binary decides where they go
//! and what exit code follows. Everything here writes to stdout territory,
//! which is safe because validate/list never start the MCP transport.

use colored::Colorize;
use std::path::Path;

use toolgate_domain::source::entities::{ActionDef, ParamSpec, SourceConfig};

/// One line per successfully validated file.
pub fn source_ok_line(path: &Path, source: &SourceConfig) -> String {
    let mut line = format!(
        "{} {}: {} ({} action(s))",
        "✓".green(),
        path.display(),
        source.name.bold(),
        source.actions.len()
    );
    if !binary_on_path(&source.command) {
        line.push_str(&format!(
            "\n  {} command '{}' not found on PATH",
            "⚠".yellow(),
            base_binary(&source.command)
        ));
    }
    line
}

/// One line per file that failed to load.
pub fn source_error_line(path: &Path, error: &dyn std::error::Error) -> String {
    format!("{} {}: {}", "✗".red(), path.display(), error)
}

/// Closing line of a validate run.
pub fn validate_summary(valid: usize, invalid: usize) -> String {
    if invalid == 0 {
        format!("All {valid} config(s) valid").green().to_string()
    } else {
        format!("{valid} valid, {invalid} invalid").red().to_string()
    }
}

/// Full listing of every action across the given sources, sorted by
/// action name, with parameter metadata.
pub fn action_listing(sources: &[SourceConfig]) -> String {
    let mut lines = Vec::new();
    let mut actions: Vec<(&SourceConfig, &ActionDef)> = sources
        .iter()
        .flat_map(|source| source.actions.iter().map(move |action| (source, action)))
        .collect();
    actions.sort_by(|a, b| a.1.name.cmp(&b.1.name));

    for (source, action) in &actions {
        lines.push(format!(
            "{}  [{}]  {}",
            action.name.bold(),
            source.name,
            action.description
        ));
        for param in &action.args {
            lines.push(format!("    {}", param_summary(param)));
        }
    }

    lines.push(String::new());
    lines.push(format!("{} action(s) from {} source(s)", actions.len(), sources.len()));
    lines.join("\n")
}

fn param_summary(param: &ParamSpec) -> String {
    let mut notes = vec![param.kind.to_string()];
    if param.required {
        notes.push("required".to_string());
    }
    if param.positional {
        notes.push("positional".to_string());
    }
    if let Some(default) = &param.default {
        notes.push(format!("default={default}"));
    }
    if let Some(allowed) = &param.allowed {
        notes.push(format!("enum=[{}]", allowed.join(", ")));
    }
    format!("{}: {}", param.name, notes.join(", "))
}

/// Whether the first word of a base command resolves on PATH.
pub fn binary_on_path(command: &str) -> bool {
    which::which(base_binary(command)).is_ok()
}

fn base_binary(command: &str) -> &str {
    command.split_whitespace().next().unwrap_or(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use toolgate_domain::source::entities::{ParamKind, ParamSpec};

    fn source() -> SourceConfig {
        SourceConfig::new("test-tools", "echo")
            .with_action(ActionDef::new("hello", "Say hello").with_command("hello"))
    }

    #[test]
    fn test_ok_line_mentions_name_and_count() {
        colored::control::set_override(false);
        let line = source_ok_line(&PathBuf::from("test.yaml"), &source());
        assert!(line.contains("✓"));
        assert!(line.contains("test.yaml"));
        assert!(line.contains("test-tools"));
        assert!(line.contains("1 action(s)"));
        assert!(!line.contains("not found on PATH"));
    }

    #[test]
    fn test_ok_line_warns_when_binary_missing() {
        colored::control::set_override(false);
        let source = SourceConfig::new("ghost", "definitely_not_a_real_binary_xyz")
            .with_action(ActionDef::new("t", "Test action"));
        let line = source_ok_line(&PathBuf::from("ghost.yaml"), &source);
        assert!(line.contains("not found on PATH"));
    }

    #[test]
    fn test_error_line() {
        colored::control::set_override(false);
        let error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing command field");
        let line = source_error_line(&PathBuf::from("bad.yaml"), &error);
        assert!(line.contains("✗"));
        assert!(line.contains("bad.yaml"));
        assert!(line.contains("missing command"));
    }

    #[test]
    fn test_validate_summary_texts() {
        colored::control::set_override(false);
        assert_eq!(validate_summary(2, 0), "All 2 config(s) valid");
        assert_eq!(validate_summary(1, 1), "1 valid, 1 invalid");
    }

    #[test]
    fn test_listing_sorted_by_name() {
        colored::control::set_override(false);
        let source = SourceConfig::new("sorted", "app")
            .with_action(ActionDef::new("zebra", "Z action"))
            .with_action(ActionDef::new("alpha", "A action"))
            .with_action(ActionDef::new("middle", "M action"));
        let listing = action_listing(&[source]);
        let alpha = listing.find("alpha").unwrap();
        let middle = listing.find("middle").unwrap();
        let zebra = listing.find("zebra").unwrap();
        assert!(alpha < middle && middle < zebra);
        assert!(listing.contains("3 action(s) from 1 source(s)"));
    }

    #[test]
    fn test_listing_shows_param_metadata() {
        colored::control::set_override(false);
        let source = SourceConfig::new("meta-test", "app").with_action(
            ActionDef::new("search", "Search things")
                .with_command("search")
                .with_arg(ParamSpec::new("query").required().positional())
                .with_arg(
                    ParamSpec::new("limit")
                        .with_kind(ParamKind::Integer)
                        .with_default(10)
                        .with_flag("--limit"),
                )
                .with_arg(ParamSpec::new("format").with_allowed(["json", "table"])),
        );
        let listing = action_listing(&[source]);
        assert!(listing.contains("query"));
        assert!(listing.contains("required"));
        assert!(listing.contains("positional"));
        assert!(listing.contains("default=10"));
        assert!(listing.contains("enum=[json, table]"));
    }

    #[test]
    fn test_binary_on_path() {
        assert!(binary_on_path("sh"));
        assert!(binary_on_path("sh -c"));
        assert!(!binary_on_path("definitely_not_a_command_123xyz"));
    }
}
