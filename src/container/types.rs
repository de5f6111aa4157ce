//! Container struct definition
//!
//! A Container is an ordered sequence of values combined with a keyed field
//! mapping. Identifier-shaped field names are also reachable as properties
//! through a per-instance accessor registry.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Bound, RangeBounds};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::accessor::{builtin, is_reserved, setter_name, AccessorRegistry};
use super::item::Item;
use super::key::{Key, Lookup};
use crate::error::{Result, TableError};
use crate::value::Value;

/// Insertion-ordered field storage
pub type Fields = IndexMap<Key, Value>;

/// Hybrid of an ordered sequence and a keyed mapping
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(from = "ContainerRepr", into = "ContainerRepr")]
pub struct Container {
    sequence: Vec<Value>,
    fields: Fields,
    accessors: AccessorRegistry,
}

/// Serialized shape; deserializing re-runs the field merge so accessors
/// are rebuilt.
#[derive(Serialize, Deserialize)]
struct ContainerRepr {
    values: Vec<Value>,
    fields: Vec<(Key, Value)>,
}

impl From<ContainerRepr> for Container {
    fn from(repr: ContainerRepr) -> Self {
        let mut container = Container {
            sequence: repr.values,
            ..Default::default()
        };
        container.merge_fields(repr.fields);
        container
    }
}

impl From<Container> for ContainerRepr {
    fn from(container: Container) -> Self {
        Self {
            values: container.sequence,
            fields: container.fields.into_iter().collect(),
        }
    }
}

impl Container {
    /// Build a container from a mixed list of values and field bundles,
    /// processed left to right
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut container = Self::default();
        container.extend(items);
        container
    }

    /// Append a value, or merge a field bundle
    pub fn push(&mut self, item: impl Into<Item>) -> &mut Self {
        match item.into() {
            Item::Value(value) => self.sequence.push(value),
            Item::Fields(bundle) => self.merge_fields(bundle),
        }
        self
    }

    /// Merge key/value pairs into the fields, materializing accessors for
    /// identifier-shaped names. Later pairs win on collision.
    pub fn merge_fields(&mut self, bundle: impl IntoIterator<Item = (Key, Value)>) {
        for (key, value) in bundle {
            self.merge_field(key, value);
        }
    }

    fn merge_field(&mut self, key: Key, value: Value) {
        tracing::trace!(key = %key, "merging field");
        self.accessors.materialize(&key);
        self.fields.insert(key, value);
    }

    /// Turn a possibly negative index into an offset from the start
    fn resolve_index(&self, index: i64) -> Option<usize> {
        let offset = if index < 0 {
            index.checked_add(self.sequence.len() as i64)?
        } else {
            index
        };
        usize::try_from(offset).ok()
    }

    // ------------------------------------------------------------------
    // Indexed / keyed access
    // ------------------------------------------------------------------

    /// Read a position or a field; `None` when absent or out of range
    pub fn get(&self, at: impl Into<Lookup>) -> Option<&Value> {
        match at.into() {
            Lookup::Position(index) => self
                .resolve_index(index)
                .and_then(|i| self.sequence.get(i)),
            Lookup::Field(key) => self.fields.get(&key),
        }
    }

    pub fn get_mut(&mut self, at: impl Into<Lookup>) -> Option<&mut Value> {
        match at.into() {
            Lookup::Position(index) => {
                let i = self.resolve_index(index)?;
                self.sequence.get_mut(i)
            }
            Lookup::Field(key) => self.fields.get_mut(&key),
        }
    }

    /// Sub-sequence covered by `range`; negative bounds count from the end.
    /// Out-of-range requests give an empty or truncated result.
    pub fn range<R: RangeBounds<i64>>(&self, range: R) -> Vec<Value> {
        let len = self.sequence.len() as i64;
        let absolute = |i: i64| if i < 0 { i.saturating_add(len) } else { i };

        let start = match range.start_bound() {
            Bound::Included(&s) => absolute(s),
            Bound::Excluded(&s) => absolute(s).saturating_add(1),
            Bound::Unbounded => 0,
        };
        if start < 0 || start > len {
            return Vec::new();
        }

        let end = match range.end_bound() {
            Bound::Included(&e) => absolute(e).saturating_add(1),
            Bound::Excluded(&e) => absolute(e),
            Bound::Unbounded => len,
        };
        let end = end.clamp(start, len);

        self.sequence[start as usize..end as usize].to_vec()
    }

    /// `length` elements starting at `start`
    pub fn slice(&self, start: i64, length: i64) -> Result<Vec<Value>> {
        if length < 0 {
            return Err(TableError::InvalidArgument(format!(
                "negative slice length ({})",
                length
            )));
        }
        let len = self.sequence.len();
        match self.resolve_index(start) {
            Some(start) if start <= len => {
                let end = start.saturating_add(length as usize).min(len);
                Ok(self.sequence[start..end].to_vec())
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Write a position or a field.
    ///
    /// Writing past the end pads the gap with `Value::Nil`. Field writes go
    /// through the field merge and never fail.
    pub fn set(&mut self, at: impl Into<Lookup>, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        match at.into() {
            Lookup::Position(index) => {
                let i = self.resolve_index(index).ok_or_else(|| {
                    TableError::InvalidArgument(format!(
                        "index {} too small for sequence; minimum: -{}",
                        index,
                        self.sequence.len()
                    ))
                })?;
                if i < self.sequence.len() {
                    self.sequence[i] = value;
                } else {
                    self.pad_to(i, 1)?;
                    self.sequence.push(value);
                }
            }
            Lookup::Field(key) => self.merge_field(key, value),
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    /// Property-style read.
    ///
    /// Reserved built-ins answer first, then materialized accessors.
    /// Unknown names read as absent.
    pub fn property(&self, name: &str) -> Option<Value> {
        if let Some(value) = builtin(self, name) {
            return Some(value);
        }
        self.accessors
            .get(name)
            .and_then(|accessor| accessor.get(&self.fields))
            .cloned()
    }

    /// Property-style write; an unknown name falls through to a field merge,
    /// which materializes its accessor
    pub fn set_property(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if let Some(accessor) = self.accessors.get(name) {
            accessor.set(&mut self.fields, value);
        } else {
            self.merge_field(Key::name(name), value);
        }
        self
    }

    /// Dynamic call fallback: `name=` with an argument writes, any other
    /// message reads
    pub fn dispatch(&mut self, message: &str, args: Vec<Value>) -> Option<Value> {
        if let Some(name) = setter_name(message) {
            let value = args.into_iter().next().unwrap_or_default();
            self.set_property(name, value.clone());
            return Some(value);
        }
        self.property(message)
    }

    /// Whether `message` is answered by a built-in or an accessor
    pub fn responds_to(&self, message: &str) -> bool {
        match setter_name(message) {
            Some(name) => self.accessors.contains(name),
            None => is_reserved(message) || self.accessors.contains(message),
        }
    }

    pub fn has_accessor(&self, name: &str) -> bool {
        self.accessors.contains(name)
    }

    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.accessors.names()
    }

    // ------------------------------------------------------------------
    // Combine / insert / remove
    // ------------------------------------------------------------------

    /// New container: sequences concatenated, `other`'s fields win
    pub fn combine(&self, other: &Container) -> Container {
        let mut combined = self.clone();
        combined.sequence.extend(other.sequence.iter().cloned());
        combined.merge_fields(other.pairs().map(|(k, v)| (k.clone(), v.clone())));
        combined
    }

    /// Insert at a position, shifting later elements right, or merge a field
    pub fn insert(&mut self, at: impl Into<Lookup>, value: impl Into<Value>) -> Result<&mut Self> {
        let value: Value = value.into();
        match at.into() {
            Lookup::Position(index) => self.insert_many(index, [value]),
            Lookup::Field(key) => {
                self.merge_field(key, value);
                Ok(self)
            }
        }
    }

    /// Insert several values at `index`. `-1` inserts after the last
    /// element; an index past the end pads with `Value::Nil`.
    pub fn insert_many<I>(&mut self, index: i64, values: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Ok(self);
        }

        let len = self.sequence.len() as i64;
        let position = if index < 0 { index + len + 1 } else { index };
        if position < 0 {
            return Err(TableError::InvalidArgument(format!(
                "index {} too small for sequence; minimum: -{}",
                index,
                len + 1
            )));
        }

        let position = usize::try_from(position)
            .map_err(|_| TableError::InvalidArgument(format!("index {} too big", index)))?;
        if position > self.sequence.len() {
            self.pad_to(position, values.len())?;
        }
        self.sequence.splice(position..position, values);
        Ok(self)
    }

    /// Pad the sequence with nil up to `len`, keeping room for `extra` more
    /// elements. Fails without touching the sequence when that many
    /// elements cannot be allocated.
    fn pad_to(&mut self, len: usize, extra: usize) -> Result<()> {
        let too_big = || TableError::InvalidArgument(format!("index {} too big", len));
        let target = len.checked_add(extra).ok_or_else(too_big)?;
        if target > isize::MAX as usize / std::mem::size_of::<Value>() {
            return Err(too_big());
        }
        let additional = target.saturating_sub(self.sequence.len());
        self.sequence.try_reserve(additional).map_err(|_| too_big())?;

        if len > self.sequence.len() {
            tracing::debug!(from = self.sequence.len(), to = len, "padding sequence with nil");
            self.sequence.resize(len, Value::Nil);
        }
        Ok(())
    }

    /// Remove a position or a field and return its value
    pub fn remove(&mut self, at: impl Into<Lookup>) -> Option<Value> {
        match at.into() {
            Lookup::Position(index) => {
                let i = self.resolve_index(index)?;
                (i < self.sequence.len()).then(|| self.sequence.remove(i))
            }
            Lookup::Field(key) => {
                let value = self.fields.shift_remove(&key)?;
                if let Some(name) = key.identifier() {
                    self.accessors.remove(name);
                }
                Some(value)
            }
        }
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.sequence.pop()
    }

    pub fn shift(&mut self) -> Option<Value> {
        if self.sequence.is_empty() {
            None
        } else {
            Some(self.sequence.remove(0))
        }
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Number of sequence elements; fields are not counted
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn first(&self) -> Option<&Value> {
        self.sequence.first()
    }

    pub fn last(&self) -> Option<&Value> {
        self.sequence.last()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.sequence
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.sequence.clone()
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.fields.keys()
    }

    pub fn field_values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }

    // ------------------------------------------------------------------
    // Iteration & presentation
    // ------------------------------------------------------------------

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.sequence.iter()
    }

    /// Field pairs in insertion order
    pub fn pairs(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.fields.iter()
    }

    /// Sequence values in natural order; the container is not modified
    pub fn sorted(&self) -> Vec<Value> {
        self.sorted_by(Value::natural_cmp)
    }

    pub fn sorted_by<F>(&self, compare: F) -> Vec<Value>
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let mut values = self.sequence.clone();
        values.sort_by(compare);
        values
    }

    /// `Container[v1, v2, key=>value]`, values first, then fields
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = self.sequence.iter().map(Value::inspect).collect();
        parts.extend(
            self.fields
                .iter()
                .map(|(k, v)| format!("{}=>{}", k.inspect(), v.inspect())),
        );
        format!("Container[{}]", parts.join(", "))
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence && self.fields == other.fields
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl<T: Into<Item>> Extend<T> for Container {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push(item);
        }
    }
}

impl<T: Into<Item>> FromIterator<T> for Container {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequence.iter()
    }
}

impl IntoIterator for Container {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequence.into_iter()
    }
}

impl Add<&Container> for &Container {
    type Output = Container;

    fn add(self, other: &Container) -> Container {
        self.combine(other)
    }
}

impl Add for Container {
    type Output = Container;

    fn add(self, other: Container) -> Container {
        self.combine(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::FieldBundle;
    use crate::container;

    fn sample() -> Container {
        container![1, 2, 3, 4, 5, { "k" => 4 }, 7, 8, { "v" => 10 }]
    }

    fn ints(values: &[Value]) -> Vec<i64> {
        values.iter().filter_map(Value::as_int).collect()
    }

    #[test]
    fn test_construction_splits_values_and_fields() {
        let table = sample();
        assert_eq!(ints(table.as_slice()), vec![1, 2, 3, 4, 5, 7, 8]);
        assert_eq!(table.len(), 7);
        assert_eq!(table.get("k"), Some(&Value::from(4)));
        assert_eq!(table.get("v"), Some(&Value::from(10)));
        assert_eq!(table.field_count(), 2);
    }

    #[test]
    fn test_bundle_position_does_not_matter() {
        let front = container![{ "k" => 1 }, "a", "b"];
        let back = container!["a", "b", { "k" => 1 }];
        assert_eq!(front, back);
    }

    #[test]
    fn test_later_bundles_override() {
        let table = container![{ "a" => 1 }, { "a" => 2 }];
        assert_eq!(table.get("a"), Some(&Value::from(2)));
        assert_eq!(table.field_count(), 1);
    }

    #[test]
    fn test_empty_construction() {
        let table = Container::new(Vec::<Item>::new());
        assert!(table.is_empty());
        assert_eq!(table.field_count(), 0);
        assert_eq!(table.describe(), "Container[]");
    }

    #[test]
    fn test_get_by_index() {
        let table = sample();
        assert_eq!(table.get(0), Some(&Value::from(1)));
        assert_eq!(table.get(6), Some(&Value::from(8)));
        assert_eq!(table.get(7), None);
        assert_eq!(table.get(-1), Some(&Value::from(8)));
        assert_eq!(table.get(-7), Some(&Value::from(1)));
        assert_eq!(table.get(-8), None);
    }

    #[test]
    fn test_missing_field_is_absent() {
        assert_eq!(sample().get("missing"), None);
    }

    #[test]
    fn test_integer_keys_do_not_collide_with_positions() {
        let table = container!["zero", { 0 => "field" }];
        assert_eq!(table.get(0), Some(&Value::from("zero")));
        assert_eq!(table.get(Key::Index(0)), Some(&Value::from("field")));
        assert_eq!(table.len(), 1);
        assert_eq!(table.describe(), "Container[\"zero\", [0]=>\"field\"]");
    }

    #[test]
    fn test_range_and_slice() {
        let table = container![2, 23, 54, { "a" => 4 }, 49];
        assert_eq!(ints(&table.range(2..=4)), vec![54, 49]);
        assert_eq!(ints(&table.range(1..3)), vec![23, 54]);
        assert_eq!(ints(&table.range(-2..)), vec![54, 49]);
        assert_eq!(ints(&table.range(..)), vec![2, 23, 54, 49]);
        assert!(table.range(4..).is_empty());
        assert!(table.range(9..12).is_empty());
        assert!(table.range(3..1).is_empty());

        assert_eq!(ints(&table.slice(1, 2).unwrap()), vec![23, 54]);
        assert_eq!(ints(&table.slice(-1, 5).unwrap()), vec![49]);
        assert!(table.slice(10, 2).unwrap().is_empty());
        assert!(matches!(
            table.slice(0, -1),
            Err(TableError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_set_pads_with_nil() {
        let mut table = container![1];
        table.set(4, 100).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(1), Some(&Value::Nil));
        assert_eq!(table.get(3), Some(&Value::Nil));
        assert_eq!(table.get(4), Some(&Value::from(100)));
    }

    #[test]
    fn test_set_overwrites_index() {
        let mut table = sample();
        table.set(3, 34903489034_i64).unwrap();
        assert_eq!(table.get(3), Some(&Value::from(34903489034_i64)));
        table.set(-1, "end").unwrap();
        assert_eq!(table.last(), Some(&Value::from("end")));
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn test_set_negative_out_of_range_fails() {
        let mut table = container![1, 2];
        assert!(matches!(
            table.set(-3, 0),
            Err(TableError::InvalidArgument(_))
        ));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_unreachable_index_is_rejected() {
        let mut table = container![1];
        assert!(matches!(
            table.set(i64::MAX, 5),
            Err(TableError::InvalidArgument(_))
        ));
        assert!(matches!(
            table.insert_many(i64::MAX, [5]),
            Err(TableError::InvalidArgument(_))
        ));
        assert!(matches!(
            table.insert(isize::MAX as i64 / 2, 5),
            Err(TableError::InvalidArgument(_))
        ));
        assert_eq!(ints(table.as_slice()), vec![1]);
    }

    #[test]
    fn test_set_field_round_trip() {
        let mut table = sample();
        table.set("something_long_and_fake", 6).unwrap();
        assert_eq!(table.get("something_long_and_fake"), Some(&Value::from(6)));
        assert_eq!(
            table.property("something_long_and_fake"),
            Some(Value::from(6))
        );

        table.set(Key::opaque("two words"), true).unwrap();
        assert_eq!(table.get(Key::opaque("two words")), Some(&Value::from(true)));
        assert!(!table.has_accessor("two words"));
    }

    #[test]
    fn test_accessor_materialization_is_idempotent() {
        let mut table = container![{ "v" => 10 }];
        table.merge_fields(FieldBundle::new().with("v", 50));
        assert_eq!(table.accessor_names().collect::<Vec<_>>(), vec!["v"]);
        assert_eq!(table.property("v"), Some(Value::from(50)));

        table.set_property("v", 60);
        assert_eq!(table.get("v"), Some(&Value::from(60)));
        assert_eq!(table.field_count(), 1);
    }

    #[test]
    fn test_unknown_property_reads_absent() {
        let table = sample();
        assert_eq!(table.property("nothing_here"), None);
    }

    #[test]
    fn test_set_property_materializes() {
        let mut table = Container::default();
        assert!(!table.responds_to("zeta="));
        table.set_property("zeta", 99);
        assert_eq!(table.get("zeta"), Some(&Value::from(99)));
        assert!(table.responds_to("zeta="));
        assert!(table.responds_to("zeta"));

        table.set_property("zeta", 99);
        assert_eq!(table.property("zeta"), Some(Value::from(99)));
        assert_eq!(table.accessor_names().count(), 1);
    }

    #[test]
    fn test_dispatch_fallback() {
        let mut table = Container::default();
        let written = table.dispatch("super_long_key_name=", vec![Value::from(349348908340_i64)]);
        assert_eq!(written, Some(Value::from(349348908340_i64)));
        assert_eq!(
            table.get("super_long_key_name"),
            Some(&Value::from(349348908340_i64))
        );
        assert_eq!(
            table.dispatch("super_long_key_name", Vec::new()),
            Some(Value::from(349348908340_i64))
        );
        assert_eq!(table.dispatch("unknown", Vec::new()), None);
    }

    #[test]
    fn test_reserved_names_win() {
        let mut table = container![1, 2, { "size" => "huge" }];
        assert_eq!(table.get("size"), Some(&Value::from("huge")));
        assert!(!table.has_accessor("size"));
        assert_eq!(table.property("size"), Some(Value::from(2)));

        table.set_property("size", "tiny");
        assert_eq!(table.get("size"), Some(&Value::from("tiny")));
        assert_eq!(table.property("size"), Some(Value::from(2)));
        assert!(table.responds_to("push"));
        assert_eq!(table.property("push"), None);
    }

    #[test]
    fn test_builtin_properties() {
        let table = container![3, 1, 2, { "a" => 1 }];
        assert_eq!(table.property("first"), Some(Value::from(3)));
        assert_eq!(table.property("last"), Some(Value::from(2)));
        assert_eq!(table.property("sort"), Some(Value::from(vec![1, 2, 3])));
        assert_eq!(table.property("keys"), Some(Value::from(vec![Value::symbol("a")])));
        assert_eq!(table.property("values"), Some(Value::from(vec![1])));
    }

    #[test]
    fn test_push_chains() {
        let mut table = container![1, 2, 3];
        table.push(4000).push(vec![Value::from(5), Value::from(0)]).push("6000");
        assert_eq!(table.last(), Some(&Value::from("6000")));
        assert_eq!(table.len(), 6);

        table.push(FieldBundle::new().with("this", 1).with("was", 2).with("added", 3));
        assert_eq!(table.get("was"), Some(&Value::from(2)));
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn test_combine() {
        let left = container![1, 2, 3, { "a" => 5, "b" => 6 }];
        let right = container![4, 5, { "b" => 7, "c" => 8 }, 6];
        let combined = &left + &right;

        assert_eq!(ints(combined.as_slice()), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(combined.get("a"), Some(&Value::from(5)));
        assert_eq!(combined.get("b"), Some(&Value::from(7)));
        assert_eq!(combined.get("c"), Some(&Value::from(8)));
        assert_eq!(combined.property("c"), Some(Value::from(8)));

        assert_eq!(left.len(), 3);
        assert_eq!(left.get("b"), Some(&Value::from(6)));
        assert_eq!(right.len(), 3);
    }

    #[test]
    fn test_insert() {
        let mut table = container![1, 2, 3, 4];
        table.insert(2, 5).unwrap();
        assert_eq!(table.get(2), Some(&Value::from(5)));
        assert_eq!(table.len(), 5);

        table.insert_many(-1, [9, 10]).unwrap();
        assert_eq!(ints(table.as_slice()), vec![1, 2, 5, 3, 4, 9, 10]);

        table.insert_many(9, ["x"]).unwrap();
        assert_eq!(table.len(), 10);
        assert_eq!(table.get(7), Some(&Value::Nil));

        table.insert("label", "y").unwrap();
        assert_eq!(table.get("label"), Some(&Value::from("y")));
        assert!(table.insert_many(-20, [1]).is_err());
    }

    #[test]
    fn test_remove() {
        let mut table = container![10, 20, 30, { "a" => 1, "b" => 2, "c" => 3 }];
        assert_eq!(table.remove("b"), Some(Value::from(2)));
        assert!(!table.contains_key(&Key::name("b")));
        assert!(!table.has_accessor("b"));
        assert_eq!(
            table.keys().cloned().collect::<Vec<_>>(),
            vec![Key::name("a"), Key::name("c")]
        );

        assert_eq!(table.remove(1), Some(Value::from(20)));
        assert_eq!(ints(table.as_slice()), vec![10, 30]);
        assert_eq!(table.remove(5), None);
        assert_eq!(table.remove("b"), None);
    }

    #[test]
    fn test_pop_and_shift() {
        let mut table = container![1, 2, 3];
        assert_eq!(table.pop(), Some(Value::from(3)));
        assert_eq!(table.shift(), Some(Value::from(1)));
        assert_eq!(table.len(), 1);

        let mut empty = container![{ "a" => 1 }];
        assert_eq!(empty.pop(), None);
        assert_eq!(empty.shift(), None);
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let table = container![1, 2, { "a" => "cat", "b" => "dog" }];
        let first_pass: Vec<&Value> = table.iter().collect();
        let second_pass: Vec<&Value> = (&table).into_iter().collect();
        assert_eq!(first_pass, second_pass);

        let pairs: Vec<String> = table
            .pairs()
            .map(|(k, v)| format!("{}{}", k, v))
            .collect();
        assert_eq!(pairs, vec![":a\"cat\"", ":b\"dog\""]);
    }

    #[test]
    fn test_sorted_does_not_mutate() {
        let table = container![2, 23, 54, { "a" => 4 }, 49];
        assert_eq!(ints(&table.sorted()), vec![2, 23, 49, 54]);
        assert_eq!(ints(table.as_slice()), vec![2, 23, 54, 49]);

        let descending = table.sorted_by(|a, b| b.natural_cmp(a));
        assert_eq!(ints(&descending), vec![54, 49, 23, 2]);
    }

    #[test]
    fn test_describe() {
        let table = container![1, "two", { "b" => 2 }, Value::symbol("three"), { "a" => "1" }];
        assert_eq!(
            table.describe(),
            "Container[1, \"two\", :three, :b=>2, :a=>\"1\"]"
        );
        assert_eq!(format!("{}", table), table.describe());
        assert_eq!(format!("{:?}", table), table.describe());
    }

    #[test]
    fn test_nested_containers() {
        let mut table = container![1, 2, { "b" => container![255, 0, 0, { "color" => "red" }] }];
        let inner = table.get("b").and_then(Value::as_table).unwrap();
        assert_eq!(inner.property("color"), Some(Value::from("red")));

        table
            .get_mut("b")
            .and_then(Value::as_table_mut)
            .unwrap()
            .set_property("color", "blue");
        assert_eq!(
            table.describe(),
            "Container[1, 2, :b=>Container[255, 0, 0, :color=>\"blue\"]]"
        );
    }

    #[test]
    fn test_serde_rebuilds_accessors() {
        let table = container![1, { "k" => 4, 7 => "seven" }];
        let json = serde_json::to_string(&table).unwrap();
        let restored: Container = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, table);
        assert_eq!(restored.property("k"), Some(Value::from(4)));
        assert_eq!(restored.get(Key::Index(7)), Some(&Value::from("seven")));
    }
}
