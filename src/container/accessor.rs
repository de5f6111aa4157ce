//! Per-instance registry of materialized field accessors
//!
//! Every identifier-shaped field name gets a getter/setter pair the first
//! time it is merged. The registry lives inside each container, so accessors
//! never leak between instances, and the reserved built-in names below can
//! never be shadowed by a field.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use super::key::Key;
use super::types::{Container, Fields};
use crate::value::Value;

/// Names answered by the container itself. Fields with these names are
/// stored normally but never get an accessor.
pub const RESERVED_NAMES: &[&str] = &[
    "len", "length", "size", "first", "last", "keys", "values", "pairs", "to_a", "sort",
    "is_empty", "describe", "inspect", "get", "set", "push", "pop", "shift", "insert",
    "remove", "combine", "slice", "range", "each", "each_pair", "each_key",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

type Getter = for<'a, 'b> fn(&'a Fields, &'b Key) -> Option<&'a Value>;
type Setter = fn(&mut Fields, &Key, Value);

/// Getter and setter bound to one field key
#[derive(Clone)]
pub(crate) struct Accessor {
    key: Key,
    getter: Getter,
    setter: Setter,
}

impl Accessor {
    fn for_key(key: Key) -> Self {
        Self {
            key,
            getter: read_field,
            setter: write_field,
        }
    }

    pub(crate) fn get<'a>(&self, fields: &'a Fields) -> Option<&'a Value> {
        (self.getter)(fields, &self.key)
    }

    pub(crate) fn set(&self, fields: &mut Fields, value: Value) {
        (self.setter)(fields, &self.key, value)
    }
}

fn read_field<'a>(fields: &'a Fields, key: &Key) -> Option<&'a Value> {
    fields.get(key)
}

fn write_field(fields: &mut Fields, key: &Key, value: Value) {
    fields.insert(key.clone(), value);
}

#[derive(Clone, Default)]
pub(crate) struct AccessorRegistry {
    accessors: IndexMap<String, Accessor>,
}

impl AccessorRegistry {
    /// Register an accessor for `key` unless one exists or the key does not
    /// qualify. Returns true when a new accessor was created.
    pub(crate) fn materialize(&mut self, key: &Key) -> bool {
        let Some(name) = key.identifier() else {
            return false;
        };
        if is_reserved(name) {
            tracing::debug!(name, "field name is reserved, no accessor materialized");
            return false;
        }
        if self.accessors.contains_key(name) {
            return false;
        }

        tracing::debug!(name, "materializing field accessor");
        self.accessors
            .insert(name.to_string(), Accessor::for_key(key.clone()));
        true
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Accessor> {
        self.accessors.get(name)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }

    pub(crate) fn remove(&mut self, name: &str) {
        self.accessors.shift_remove(name);
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.accessors.keys().map(String::as_str)
    }
}

/// Result of a reserved nullary built-in, or `None` if `name` is not one
pub(crate) fn builtin(container: &Container, name: &str) -> Option<Value> {
    let value = match name {
        "len" | "length" | "size" => Value::from(container.len()),
        "first" => container.first().cloned().unwrap_or_default(),
        "last" => container.last().cloned().unwrap_or_default(),
        "is_empty" => Value::from(container.is_empty()),
        "to_a" => Value::List(container.to_vec()),
        "sort" => Value::List(container.sorted()),
        "keys" => Value::List(container.keys().map(key_value).collect()),
        "values" => Value::List(container.field_values().cloned().collect()),
        "pairs" => Value::List(
            container
                .pairs()
                .map(|(k, v)| Value::List(vec![key_value(k), v.clone()]))
                .collect(),
        ),
        "describe" | "inspect" => Value::Str(container.describe()),
        _ => return None,
    };
    Some(value)
}

fn key_value(key: &Key) -> Value {
    match key {
        Key::Index(i) => Value::List(vec![Value::Int(*i)]),
        Key::Name(name) => Value::Symbol(name.clone()),
        Key::Opaque(label) => Value::Str(label.clone()),
    }
}

/// Split a dynamic message of the form `name=` into its field name
pub(crate) fn setter_name(message: &str) -> Option<&str> {
    static SETTER: OnceLock<Regex> = OnceLock::new();
    SETTER
        .get_or_init(|| Regex::new(r"^(\w+)=$").expect("setter pattern is valid"))
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
