//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format variable lists as aligned, human-readable tables.
//! - Format a single variable as a details block.
//!
//! Does NOT handle:
//! - Machine-readable exports (see `yaml`, `json`, `env`).
//!
//! Invariants:
//! - The VALUE column only exists when values are requested.
//! - Values in the table are shown on one line and truncated.

use anyhow::Result;
use gitlab_secrets_client::Variable;

use super::{Formatter, RenderOptions};

/// Maximum characters shown in the VALUE column.
const VALUE_COLUMN_WIDTH: usize = 50;

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_variables(&self, variables: &[Variable], options: &RenderOptions) -> Result<String> {
        let mut output = String::new();

        if variables.is_empty() {
            output.push_str("No variables found.\n");
            return Ok(output);
        }

        output.push_str(&format!(
            "GitLab CI/CD Variables (sorted by {})\n\n",
            options.sorted_by
        ));

        let key_width = variables
            .iter()
            .map(|v| v.key.chars().count())
            .max()
            .unwrap_or(0)
            .max("KEY".len());
        let value_width = if options.include_values {
            variables
                .iter()
                .map(|v| display_value(&v.value).chars().count())
                .max()
                .unwrap_or(0)
                .max("VALUE".len())
        } else {
            0
        };

        let row = |key: &str, value: &str, protected: &str, masked: &str, raw: &str, scope: &str| {
            let mut line = format!("{:<key_width$}  ", key);
            if options.include_values {
                line.push_str(&format!("{:<value_width$}  ", value));
            }
            line.push_str(&format!("{:<9}  {:<6}  {:<5}  {}", protected, masked, raw, scope));
            line.push('\n');
            line
        };

        output.push_str(&row(
            "KEY",
            "VALUE",
            "PROTECTED",
            "MASKED",
            "RAW",
            "ENVIRONMENT SCOPE",
        ));
        output.push_str(&row(
            "===",
            "=====",
            "=========",
            "======",
            "===",
            "=================",
        ));

        for variable in variables {
            output.push_str(&row(
                &variable.key,
                &display_value(&variable.value),
                &variable.protected.to_string(),
                &variable.masked.to_string(),
                &variable.raw.to_string(),
                &variable.environment_scope,
            ));
        }

        Ok(output)
    }
}

/// Format one variable as a labelled block.
///
/// Multiline values keep their line breaks, aligned under the first line.
pub fn format_variable_details(title: &str, variable: &Variable, include_value: bool) -> String {
    const LABEL_WIDTH: usize = 19;
    let mut output = format!("{}\n", title);

    let mut field = |label: &str, value: &str| {
        let continuation = format!("\n  {:LABEL_WIDTH$}", "");
        output.push_str(&format!(
            "  {:<LABEL_WIDTH$}{}\n",
            format!("{}:", label),
            value.replace('\n', &continuation)
        ));
    };

    field("Key", &variable.key);
    if include_value {
        field("Value", &variable.value);
    }
    field("Protected", &variable.protected.to_string());
    field("Masked", &variable.masked.to_string());
    field("Raw", &variable.raw.to_string());
    field("Environment Scope", &variable.environment_scope);

    output
}

fn display_value(value: &str) -> String {
    let single_line = value.replace('\r', "").replace('\n', "\\n");
    if single_line.chars().count() <= VALUE_COLUMN_WIDTH {
        return single_line;
    }
    let truncated: String = single_line.chars().take(VALUE_COLUMN_WIDTH - 3).collect();
    format!("{}...", truncated)
}
