//! Parser module for item literals

pub mod grammar;

pub use grammar::{parse_item, parse_items, parse_lookup, parse_value};
