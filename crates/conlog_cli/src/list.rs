//! `conlog list`: print the available categories.

use std::error::Error;

use conlog::Severity;
use conlog_config::LogConfig;
use serde::Serialize;

use crate::{settings, GlobalArgs, ListArgs, ListFormat, CLI};

/// One listed category.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CategoryRow<'a> {
    /// Key to pass to `emit --category`, `None` for the built-in category.
    pub key: Option<&'a str>,
    /// Display label.
    pub name: &'a str,
    /// Accepted severities.
    pub severities: Severity,
    /// Whether the category produces output in this build.
    pub active: bool,
    /// Whether lines carry a timestamp.
    pub timestamp: bool,
}

/// Runs the `list` subcommand.
pub fn run(args: &ListArgs, global: &GlobalArgs) -> Result<i32, Box<dyn Error>> {
    let config = settings::load(global)?;
    let rows = rows(&config);
    let output = match args.format {
        ListFormat::Text => render_text(&rows),
        ListFormat::Json => serde_json::to_string_pretty(&rows)?,
    };
    println!("{output}");
    Ok(0)
}

/// The built-in category followed by the configured ones in key order.
pub fn rows(config: &LogConfig) -> Vec<CategoryRow<'_>> {
    let builtin = CategoryRow {
        key: None,
        name: CLI.name(),
        severities: CLI.accepted(),
        active: CLI.is_enabled(),
        timestamp: CLI.write_timestamp(),
    };
    std::iter::once(builtin)
        .chain(config.categories.iter().map(|(key, def)| CategoryRow {
            key: Some(key),
            name: def.label(key),
            severities: def.severities,
            active: def.is_active(),
            timestamp: def.timestamp,
        }))
        .collect()
}

fn render_text(rows: &[CategoryRow<'_>]) -> String {
    let mut out = format!(
        "{:<12} {:<12} {:<10} {:<9} {}",
        "KEY", "NAME", "SEVERITIES", "STATUS", "TIMESTAMP"
    );
    for row in rows {
        out.push('\n');
        out.push_str(&format!(
            "{:<12} {:<12} {:<10} {:<9} {}",
            row.key.unwrap_or("-"),
            row.name,
            row.severities.to_string(),
            if row.active { "active" } else { "inactive" },
            if row.timestamp { "yes" } else { "no" },
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use conlog_config::load_config_from_str;

    const TOML: &str = r#"
[categories.net]
name = "Net"
severities = "warning"
timestamp = true

[categories.db]
enabled = false
"#;

    #[test]
    fn builtin_row_comes_first() {
        let config = LogConfig::default();
        let rows = rows(&config);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, None);
        assert_eq!(rows[0].name, "Cli");
        assert_eq!(rows[0].severities, Severity::All);
    }

    #[test]
    fn configured_rows_in_key_order() {
        let config = load_config_from_str(TOML).unwrap();
        let rows = rows(&config);
        let keys: Vec<_> = rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![None, Some("db"), Some("net")]);
        assert_eq!(rows[1].name, "db");
        assert!(!rows[1].active);
        assert_eq!(rows[2].severities, Severity::Warning);
        assert!(rows[2].timestamp);
    }

    #[test]
    fn text_has_header_and_one_line_per_row() {
        let config = load_config_from_str(TOML).unwrap();
        let text = render_text(&rows(&config));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("KEY"));
        assert!(lines[1].starts_with("-"));
        assert!(lines[2].contains("inactive"));
        assert!(lines[3].starts_with("net"));
        assert!(lines[3].contains("warning"));
    }

    #[test]
    fn json_output() {
        let config = load_config_from_str(TOML).unwrap();
        let json = serde_json::to_value(rows(&config)).unwrap();
        assert_eq!(json[0]["key"], serde_json::Value::Null);
        assert_eq!(json[2]["key"], "net");
        assert_eq!(json[2]["severities"], "warning");
        assert_eq!(json[2]["timestamp"], true);
    }
}
