//! Output formatting module

pub mod formatter;
pub mod human;
pub mod json;

pub use formatter::{format_lookup, format_output, format_values, OutputFormat};
