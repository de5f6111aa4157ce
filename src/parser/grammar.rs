//! Pest grammar parser for item literals

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::container::{Container, FieldBundle, Item, Key, Lookup};
use crate::error::{Result, TableError};
use crate::value::Value;

#[derive(Parser)]
#[grammar = "../grammar/mixtable.pest"]
pub struct ItemParser;

/// Parse one item literal: a value, `key=value`, or `{key=>value, ...}`
pub fn parse_item(input: &str) -> Result<Item> {
    let inner = parse_rule(Rule::item, input)?;
    match inner.as_rule() {
        Rule::bundle => {
            let mut bundle = FieldBundle::new();
            for entry in inner.into_inner() {
                let (key, value) = build_entry(entry)?;
                bundle.insert(key, value);
            }
            Ok(Item::Fields(bundle))
        }
        Rule::pair => {
            let (key, value) = build_entry(inner)?;
            Ok(Item::Fields(FieldBundle::new().with(key, value)))
        }
        Rule::value => Ok(Item::Value(build_value(inner)?)),
        rule => Err(unexpected(rule)),
    }
}

/// Parse a list of item literals into a container, left to right
pub fn parse_items<S: AsRef<str>>(inputs: &[S]) -> Result<Container> {
    let items = inputs
        .iter()
        .map(|input| parse_item(input.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(Container::new(items))
}

/// Parse a single value literal
pub fn parse_value(input: &str) -> Result<Value> {
    build_value(parse_rule(Rule::value_only, input)?)
}

/// Parse a lookup: an integer is a position, anything else a field key
pub fn parse_lookup(input: &str) -> Result<Lookup> {
    let inner = parse_rule(Rule::lookup, input)?;
    match inner.as_rule() {
        Rule::position => Ok(Lookup::Position(parse_int(inner.as_str())?)),
        Rule::key => Ok(Lookup::Field(build_key(inner)?)),
        rule => Err(unexpected(rule)),
    }
}

/// Run `rule` over the whole input and return its first inner pair
fn parse_rule(rule: Rule, input: &str) -> Result<Pair<'_, Rule>> {
    let mut pairs =
        ItemParser::parse(rule, input).map_err(|e| TableError::ParseError(e.to_string()))?;

    let outer = pairs
        .next()
        .ok_or_else(|| TableError::ParseError("Empty input".to_string()))?;

    outer
        .into_inner()
        .next()
        .ok_or_else(|| TableError::ParseError(format!("Expected item in '{}'", input)))
}

fn build_entry(pair: Pair<Rule>) -> Result<(Key, Value)> {
    let mut inner = pair.into_inner();
    let key = inner
        .next()
        .ok_or_else(|| TableError::ParseError("Expected key".to_string()))?;
    let value = inner
        .next()
        .ok_or_else(|| TableError::ParseError("Expected value".to_string()))?;

    Ok((build_key(key)?, build_value(value)?))
}

fn build_key(pair: Pair<Rule>) -> Result<Key> {
    let inner = first_inner(pair)?;
    match inner.as_rule() {
        Rule::wrapped => Ok(Key::Index(parse_int(first_inner(inner)?.as_str())?)),
        Rule::integer => Ok(Key::Index(parse_int(inner.as_str())?)),
        Rule::symbol => Ok(Key::Name(symbol_name(inner)?)),
        Rule::string => Ok(Key::Opaque(string_contents(inner)?)),
        Rule::ident => Ok(Key::Name(inner.as_str().to_string())),
        rule => Err(unexpected(rule)),
    }
}

fn build_value(pair: Pair<Rule>) -> Result<Value> {
    let inner = first_inner(pair)?;
    match inner.as_rule() {
        Rule::nil => Ok(Value::Nil),
        Rule::boolean => Ok(Value::Bool(inner.as_str() == "true")),
        Rule::float => Ok(Value::Float(parse_float(inner.as_str())?)),
        Rule::integer => Ok(Value::Int(parse_int(inner.as_str())?)),
        Rule::string => Ok(Value::Str(string_contents(inner)?)),
        Rule::symbol => Ok(Value::Symbol(symbol_name(inner)?)),
        Rule::list => inner
            .into_inner()
            .map(build_value)
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        Rule::word => Ok(Value::Str(inner.as_str().to_string())),
        rule => Err(unexpected(rule)),
    }
}

fn first_inner(pair: Pair<Rule>) -> Result<Pair<Rule>> {
    let rule = pair.as_rule();
    pair.into_inner()
        .next()
        .ok_or_else(|| TableError::ParseError(format!("Empty {:?}", rule)))
}

fn symbol_name(pair: Pair<Rule>) -> Result<String> {
    let inner = first_inner(pair)?;
    match inner.as_rule() {
        Rule::string => string_contents(inner),
        _ => Ok(inner.as_str().to_string()),
    }
}

fn string_contents(pair: Pair<Rule>) -> Result<String> {
    Ok(unescape(first_inner(pair)?.as_str()))
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Floats must be finite so the JSON form can be read back
fn parse_float(text: &str) -> Result<f64> {
    let value = text
        .parse::<f64>()
        .map_err(|e| TableError::ParseError(format!("Invalid float '{}': {}", text, e)))?;
    if !value.is_finite() {
        return Err(TableError::ParseError(format!(
            "Float '{}' is out of range",
            text
        )));
    }
    Ok(value)
}

fn parse_int(text: &str) -> Result<i64> {
    text.parse::<i64>()
        .map_err(|e| TableError::ParseError(format!("Invalid integer '{}': {}", text, e)))
}

fn unexpected(rule: Rule) -> TableError {
    TableError::ParseError(format!("Unexpected {:?}", rule))
}
