//! mixtable - an ordered sequence and a keyed mapping in one container
//!
//! A [`Container`] is built from a mixed list of items: plain values are
//! appended to its sequence, field bundles are merged into its field
//! mapping. Field names that are identifiers also become properties.
//!
//! # Example
//!
//! ```
//! use mixtable::{container, Value};
//!
//! let mut t = container![1, 2, 3, 4, { "a" => "1", "b" => "2" }, 7, 8];
//! assert_eq!(t.len(), 6);
//! assert_eq!(t.property("b"), Some(Value::from("2")));
//!
//! t.set_property("c", 3);
//! assert_eq!(t.describe(), r#"Container[1, 2, 3, 4, 7, 8, :a=>"1", :b=>"2", :c=>3]"#);
//! ```

pub mod cli;
pub mod container;
pub mod error;
pub mod output;
pub mod parser;
pub mod value;

pub use container::{Container, FieldBundle, Fields, Item, Key, Lookup};
pub use error::{Result, TableError};
pub use output::{format_lookup, format_output, format_values, OutputFormat};
pub use parser::{parse_item, parse_items, parse_lookup, parse_value};
pub use value::Value;
