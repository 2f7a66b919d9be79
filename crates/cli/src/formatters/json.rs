//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format variables as a pretty-printed `{ variables, total, sorted_by }` document.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use gitlab_secrets_client::Variable;

use super::common::ExportDocument;
use super::{Formatter, RenderOptions};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_variables(&self, variables: &[Variable], options: &RenderOptions) -> Result<String> {
        let document = ExportDocument::new(variables, options.sorted_by, options.include_values);
        let mut output = serde_json::to_string_pretty(&document)?;
        output.push('\n');
        Ok(output)
    }
}
