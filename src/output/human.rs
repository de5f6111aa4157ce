//! Human-readable output formatting

use crate::container::Container;
use crate::value::Value;

pub fn format_human(container: &Container) -> String {
    container.describe()
}

pub fn format_human_value(value: Option<&Value>) -> String {
    value.map(Value::inspect).unwrap_or_else(|| "nil".to_string())
}

pub fn format_human_values(values: &[Value]) -> String {
    let inner: Vec<String> = values.iter().map(Value::inspect).collect();
    format!("[{}]", inner.join(", "))
}
