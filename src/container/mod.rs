//! Container module: the hybrid sequence / field mapping
//!
//! Containers hold:
//! - an ordered sequence of values, padded with nil on sparse writes
//! - an insertion-ordered mapping of field keys to values
//! - a private registry of property accessors for identifier-shaped keys

mod accessor;
mod item;
mod key;
mod macros;
mod types;

pub use accessor::{is_reserved, RESERVED_NAMES};
pub use item::{FieldBundle, Item};
pub use key::{is_identifier, Key, Lookup};
pub use types::{Container, Fields};
