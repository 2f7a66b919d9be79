//! YAML formatter implementation.
//!
//! Responsibilities:
//! - Simple export: comment header plus a flat `KEY: value` mapping.
//! - Structured export: `variables`, `total` and `sorted_by`.
//! - Literal block style for multiline and long values.
//!
//! Does NOT handle:
//! - Parsing YAML input (see `input`).
//!
//! Invariants:
//! - Every emitted value parses back to exactly the original string.
//! - Plain scalars are quoted by `serde_yaml`; block scalars are written here.

use anyhow::Result;
use gitlab_secrets_client::Variable;

use super::common::{ExportDocument, export_header};
use super::{Formatter, RenderOptions, YamlStyle};
use crate::selection::SortField;

/// Values longer than this many characters are written as block scalars.
const LITERAL_THRESHOLD: usize = 120;

/// Block scalar content is indented this far past its mapping.
const BLOCK_INDENT: usize = 2;

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_variables(&self, variables: &[Variable], options: &RenderOptions) -> Result<String> {
        match options.yaml_style {
            YamlStyle::Simple => {
                format_simple(variables, options.sorted_by, options.include_values)
            }
            YamlStyle::Structured => {
                format_structured(variables, options.sorted_by, options.include_values)
            }
        }
    }
}

/// Flat `KEY: value` mapping under a comment header.
///
/// Without `include_values` every key maps to an empty string.
fn format_simple(
    variables: &[Variable],
    sorted_by: SortField,
    include_values: bool,
) -> Result<String> {
    let mut output = export_header(variables.len(), sorted_by);
    for variable in variables {
        let value = if include_values {
            variable.value.as_str()
        } else {
            ""
        };
        push_entry(&mut output, 0, &variable.key, value)?;
    }
    Ok(output)
}

/// `variables` list with `total` and `sorted_by`.
///
/// Without `include_values` the `value` field is omitted from every entry.
fn format_structured(
    variables: &[Variable],
    sorted_by: SortField,
    include_values: bool,
) -> Result<String> {
    let needs_blocks = include_values && variables.iter().any(|v| needs_block_layout(&v.value));
    if !needs_blocks {
        let document = ExportDocument::new(variables, sorted_by, include_values);
        return Ok(serde_yaml::to_string(&document)?);
    }
    write_structured(variables, sorted_by, include_values)
}

/// Values `serde_yaml` would not lay out the way exports require: it picks its
/// own block style for line breaks and never folds long single-line values.
fn needs_block_layout(value: &str) -> bool {
    value.contains('\n') || value.chars().count() > LITERAL_THRESHOLD
}

/// Line-by-line rendering of the structured layout, with literal blocks.
fn write_structured(
    variables: &[Variable],
    sorted_by: SortField,
    include_values: bool,
) -> Result<String> {
    let mut output = String::new();

    if variables.is_empty() {
        output.push_str("variables: []\n");
    } else {
        output.push_str("variables:\n");
        for variable in variables {
            output.push_str(&format!("- key: {}\n", quote_scalar(&variable.key)?));
            if include_values {
                push_entry(&mut output, 2, "value", &variable.value)?;
            }
            output.push_str(&format!("  protected: {}\n", variable.protected));
            output.push_str(&format!("  masked: {}\n", variable.masked));
            output.push_str(&format!("  raw: {}\n", variable.raw));
            push_entry(
                &mut output,
                2,
                "environment_scope",
                &variable.environment_scope,
            )?;
        }
    }

    output.push_str(&format!("total: {}\n", variables.len()));
    output.push_str(&format!("sorted_by: {}\n", sorted_by));
    Ok(output)
}

fn push_entry(output: &mut String, indent: usize, key: &str, value: &str) -> Result<()> {
    output.push_str(&" ".repeat(indent));
    output.push_str(&quote_scalar(key)?);
    output.push(':');
    if use_literal_block(value) {
        output.push(' ');
        output.push_str(&literal_block(value, indent + BLOCK_INDENT));
    } else {
        output.push(' ');
        output.push_str(&quote_scalar(value)?);
        output.push('\n');
    }
    Ok(())
}

/// Single-line scalar, plain or quoted as `serde_yaml` sees fit.
///
/// `serde_yaml` answers any value with a line break with a block scalar,
/// which cannot sit on a `key:` line; those are double-quoted instead.
fn quote_scalar(value: &str) -> Result<String> {
    if value.contains('\n') {
        return Ok(double_quoted(value));
    }
    let rendered = serde_yaml::to_string(value)?;
    let rendered = rendered.trim_end_matches('\n');
    if rendered.contains('\n') || rendered.starts_with(['|', '>']) {
        Ok(double_quoted(value))
    } else {
        Ok(rendered.to_string())
    }
}

fn needs_escape(c: char) -> bool {
    c.is_control() || matches!(c, '\u{feff}' | '\u{2028}' | '\u{2029}')
}

fn double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if needs_escape(c) => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn use_literal_block(value: &str) -> bool {
    (value.contains('\n') || value.chars().count() > LITERAL_THRESHOLD)
        && !value.trim().is_empty()
        && !value
            .chars()
            .any(|c| c != '\n' && c != '\t' && needs_escape(c))
}

/// Literal block scalar starting with its `|` header.
///
/// Chomping keeps the exact number of trailing newlines; an indentation
/// indicator is added when the first line starts with whitespace.
fn literal_block(value: &str, indent: usize) -> String {
    let body = value.trim_end_matches('\n');
    let trailing_newlines = value.len() - body.len();

    let mut out = String::from("|");
    if body.starts_with(char::is_whitespace) {
        out.push_str(&BLOCK_INDENT.to_string());
    }
    match trailing_newlines {
        0 => out.push('-'),
        1 => {}
        _ => out.push('+'),
    }
    out.push('\n');

    let pad = " ".repeat(indent);
    for line in body.split('\n') {
        if !line.is_empty() {
            out.push_str(&pad);
            out.push_str(line);
        }
        out.push('\n');
    }
    for _ in 1..trailing_newlines {
        out.push('\n');
    }
    out
}
