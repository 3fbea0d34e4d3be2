// Output formatting for CLI
//
// Every renderer takes the sink explicitly; commands pass stdout.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => OutputFormat::Text,
        }
    }

    pub fn write_value<T: Serialize>(&self, out: &mut impl Write, value: &T) -> Result<()> {
        match self {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
            }
            OutputFormat::Yaml => {
                writeln!(out, "{}", serde_yaml::to_string(value)?)?;
            }
            OutputFormat::Text => {
                // Text format is handled by each command
            }
        }
        Ok(())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

/// Write a simple key-value pair for text output
pub fn write_field(out: &mut impl Write, label: &str, value: &str) -> Result<()> {
    writeln!(out, "{:<10} {}", format!("{}:", label), value)?;
    Ok(())
}

/// Write a table header
pub fn write_table_header(out: &mut impl Write, columns: &[(&str, usize)]) -> Result<()> {
    let header: String = columns
        .iter()
        .map(|(name, width)| format!("{:<width$}", name, width = width))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", header.trim_end())?;
    Ok(())
}

/// Write a table row
pub fn write_table_row(out: &mut impl Write, values: &[(&str, usize)]) -> Result<()> {
    let row: String = values
        .iter()
        .map(|(val, width)| format!("{:<width$}", truncate(val, *width), width = width))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", row.trim_end())?;
    Ok(())
}

/// Shorten to `width` characters, marking the cut with "..."
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
