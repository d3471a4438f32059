//! Session rendering

use clap::ValueEnum;
use serde_json::Value;

/// How a decoded session is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    #[default]
    Pretty,
    /// One `key = value` line per leaf, nested keys joined with `.`
    Text,
}

/// Render a session value in the requested format
pub fn render_session(value: &Value, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
        OutputFormat::Text => Ok(render_text(value)),
    }
}

/// Flatten a value into `(path, leaf)` pairs.
///
/// Object keys are joined with `.`, array items use `[i]`. Strings are shown
/// without quotes, other leaves as JSON.
pub fn flatten_session(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    flatten_into(value, String::new(), &mut out);
    out
}

fn flatten_into(value: &Value, path: String, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                flatten_into(child, child_path, out);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (i, child) in items.iter().enumerate() {
                flatten_into(child, format!("{path}[{i}]"), out);
            }
        }
        Value::String(s) => out.push((path, s.clone())),
        other => out.push((path, other.to_string())),
    }
}

fn render_text(value: &Value) -> String {
    let entries = flatten_session(value);
    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    entries
        .iter()
        .map(|(key, leaf)| {
            if key.is_empty() {
                leaf.clone()
            } else {
                format!("{key:<width$} = {leaf}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
