//! JSON output formatting

use crate::container::Container;
use crate::value::Value;
use serde::Serialize;
use serde_json::json;

pub fn format_json(container: &Container) -> String {
    pretty(container)
}

pub fn format_json_value(value: Option<&Value>) -> String {
    match value {
        Some(value) => pretty(value),
        None => json!(null).to_string(),
    }
}

pub fn format_json_values(values: &[Value]) -> String {
    pretty(&values)
}

fn pretty<T: Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}
