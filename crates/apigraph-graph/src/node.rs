//! Graph node representation and shape-agnostic helpers.
//!
//! A node is a JSON object keyed by vocabulary IRIs (or their compacted
//! aliases). Values are scalars, nested nodes, or arrays of either. The
//! helpers here never look at vocabulary keys; anything keyed by a
//! vocabulary term goes through [`crate::ApiGraph`] so it is compacted first.

use serde_json::{Map, Value};

/// A graph node: a string-keyed mapping to scalars, nodes, or lists.
pub type Node = Map<String, Value>;

pub const ID: &str = "@id";
pub const TYPE: &str = "@type";
pub const VALUE: &str = "@value";
pub const CONTEXT: &str = "@context";
pub const GRAPH: &str = "@graph";

/// The node's `@id`, if it has a string one.
pub fn node_id(node: &Node) -> Option<&str> {
    node.get(ID).and_then(Value::as_str)
}

/// The node's `@type` list. A bare string is treated as a one-element list.
pub fn node_types(node: &Node) -> Vec<&str> {
    match node.get(TYPE) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        Some(Value::String(s)) => vec![s.as_str()],
        _ => Vec::new(),
    }
}

/// Normalize a value into a list: arrays yield their items, anything else
/// yields itself.
pub fn ensure_array(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

/// The first element of an array, or the value itself.
///
/// Link and reference properties are modeled as singleton arrays, so most
/// single-valued reads start here.
pub fn first(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        other => Some(other),
    }
}

/// First element as a node.
pub fn first_node(value: &Value) -> Option<&Node> {
    first(value).and_then(Value::as_object)
}

/// All object items of a possibly-singleton value.
pub fn nodes(value: &Value) -> Vec<&Node> {
    ensure_array(value)
        .into_iter()
        .filter_map(Value::as_object)
        .collect()
}

/// Unwrap a JSON-LD value object (`{"@value": x}`) to its literal.
///
/// Anything that is not a value object is returned unchanged.
pub fn literal(value: &Value) -> &Value {
    match value {
        Value::Object(obj) => obj.get(VALUE).unwrap_or(value),
        other => other,
    }
}

/// The `@id` a link-valued entry points to (`{"@id": x}` or a bare string).
pub fn link_id(value: &Value) -> Option<&str> {
    match value {
        Value::Object(obj) => obj.get(ID).and_then(Value::as_str),
        Value::String(s) => Some(s.as_str()),
        _ => None,
    }
}

/// Render a scalar literal as a string. Objects, arrays and null yield `None`.
pub fn literal_string(value: &Value) -> Option<String> {
    match literal(value) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// The document root. AMF may wrap the document in a one-element array.
pub fn unwrap_root(value: &Value) -> Option<&Node> {
    match value {
        Value::Object(obj) => Some(obj),
        Value::Array(items) => items.first().and_then(Value::as_object),
        _ => None,
    }
}
