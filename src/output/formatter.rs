//! Output formatting

use crate::container::Container;
use crate::output::human::{format_human, format_human_value, format_human_values};
use crate::output::json::{format_json, format_json_value, format_json_values};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub fn format_output(container: &Container, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(container),
        OutputFormat::Json => format_json(container),
    }
}

/// Format a single lookup result; `None` is the absent sentinel
pub fn format_lookup(value: Option<&Value>, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human_value(value),
        OutputFormat::Json => format_json_value(value),
    }
}

pub fn format_values(values: &[Value], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human_values(values),
        OutputFormat::Json => format_json_values(values),
    }
}
