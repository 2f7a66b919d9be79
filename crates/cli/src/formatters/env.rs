//! Dotenv formatter implementation.
//!
//! Responsibilities:
//! - Format variables as `KEY=value` lines under a comment header.
//!
//! Does NOT handle:
//! - Quoting or escaping; multiline values are written verbatim and are
//!   ambiguous in this format.

use anyhow::Result;
use gitlab_secrets_client::Variable;

use super::common::export_header;
use super::{Formatter, RenderOptions};

/// Dotenv formatter.
pub struct EnvFormatter;

impl Formatter for EnvFormatter {
    fn format_variables(&self, variables: &[Variable], options: &RenderOptions) -> Result<String> {
        let mut output = export_header(variables.len(), options.sorted_by);
        for variable in variables {
            output.push_str(&variable.key);
            output.push('=');
            if options.include_values {
                output.push_str(&variable.value);
            }
            output.push('\n');
        }
        Ok(output)
    }
}
