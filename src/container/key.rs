//! Field keys and lookups
//!
//! Integers are positions in the sequence when used as a [`Lookup`], but a
//! field keyed by an integer is always stored wrapped as [`Key::Index`], so
//! `get(3)` and `get(Key::Index(3))` never address the same slot.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::value::inspect_symbol;

/// Key of an entry in the field mapping
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Integer key, wrapped so it cannot collide with a sequence index
    Index(i64),
    /// Symbol-like key; identifier-shaped names get property accessors
    Name(String),
    /// Any other label, stored as-is and never given an accessor
    Opaque(String),
}

impl Key {
    pub fn name(name: impl Into<String>) -> Self {
        Key::Name(name.into())
    }

    pub fn opaque(label: impl Into<String>) -> Self {
        Key::Opaque(label.into())
    }

    /// The accessor name for this key, if it is an identifier-shaped `Name`
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Key::Name(name) if is_identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Debug rendering used by [`Container::describe`](crate::Container::describe)
    pub fn inspect(&self) -> String {
        match self {
            Key::Index(i) => format!("[{}]", i),
            Key::Name(name) => inspect_symbol(name),
            Key::Opaque(label) => format!("{:?}", label),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Index(i64::from(i))
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Index(i)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

/// Whether `name` consists only of word characters
pub fn is_identifier(name: &str) -> bool {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER
        .get_or_init(|| Regex::new(r"^\w+$").expect("identifier pattern is valid"))
        .is_match(name)
}

/// What an indexed read or write addresses
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// A sequence index; negative values count from the end
    Position(i64),
    /// A field key
    Field(Key),
}

impl From<i32> for Lookup {
    fn from(i: i32) -> Self {
        Lookup::Position(i64::from(i))
    }
}

impl From<i64> for Lookup {
    fn from(i: i64) -> Self {
        Lookup::Position(i)
    }
}

impl From<usize> for Lookup {
    fn from(i: usize) -> Self {
        Lookup::Position(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<Key> for Lookup {
    fn from(key: Key) -> Self {
        Lookup::Field(key)
    }
}

impl From<&Key> for Lookup {
    fn from(key: &Key) -> Self {
        Lookup::Field(key.clone())
    }
}

impl From<&str> for Lookup {
    fn from(name: &str) -> Self {
        Lookup::Field(Key::from(name))
    }
}

impl From<String> for Lookup {
    fn from(name: String) -> Self {
        Lookup::Field(Key::from(name))
    }
}
