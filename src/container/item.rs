//! Construction items
//!
//! A container is built from a list of [`Item`]s. Bundles merge into the
//! field mapping, everything else is appended to the sequence.

use super::key::Key;
use super::types::Container;
use crate::value::Value;

/// Ordered key/value pairs merged into a container's fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldBundle {
    pairs: Vec<(Key, Value)>,
}

impl FieldBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for chaining
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.pairs.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for FieldBundle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for FieldBundle {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// One constructor or append argument
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Value(Value),
    Fields(FieldBundle),
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        Item::Value(value)
    }
}

impl From<FieldBundle> for Item {
    fn from(bundle: FieldBundle) -> Self {
        Item::Fields(bundle)
    }
}

macro_rules! item_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Item {
                fn from(value: $ty) -> Self {
                    Item::Value(Value::from(value))
                }
            }
        )*
    };
}

item_from_value!(bool, i32, i64, usize, f64, &str, String, Container, Vec<Value>);
