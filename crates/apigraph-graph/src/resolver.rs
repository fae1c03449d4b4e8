//! Link and reference resolution.
//!
//! A shape may stand in for another node through a `link-target` (a
//! declaration in this document or a referenced library) or a
//! `reference-id` (a node encoded by a referenced fragment). Resolving a
//! shape merges the target's data into a copy of the shape and resolves
//! every nested node the same way.
//!
//! The loaded document is never modified. Resolved copies are kept in a
//! side table keyed by `@id`, which also serves as the resolved flag: a
//! node found in the table is returned as-is and never merged twice.
//!
//! A copy whose walk was cut short by a node further up the walk depends on
//! where the walk started, so it is not recorded. Copies that closed a cycle
//! on themselves are recorded but only reused when asked for directly, since
//! nested in another walk the cycle may close somewhere else.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use apigraph_telemetry::{log_cycle_cut, log_link_unresolved, log_self_link};
use apigraph_vocab::{document, source_maps};

use crate::graph::ApiGraph;
use crate::node::{node_id, Node, ID, TYPE};

#[derive(Debug)]
struct Resolution {
    value: Arc<Value>,
    /// No cycle was cut anywhere below this node.
    acyclic: bool,
}

/// Resolved nodes of the loaded document, keyed by `@id`.
#[derive(Debug, Default)]
pub struct ResolutionTable {
    resolved: RwLock<HashMap<String, Resolution>>,
}

impl ResolutionTable {
    fn get(&self, id: &str, nested: bool) -> Option<Arc<Value>> {
        self.resolved
            .read()
            .get(id)
            .filter(|r| r.acyclic || !nested)
            .map(|r| r.value.clone())
    }

    fn insert(&self, id: &str, value: Value, acyclic: bool) {
        self.resolved.write().insert(
            id.to_string(),
            Resolution {
                value: Arc::new(value),
                acyclic,
            },
        );
    }

    /// Whether a node with this `@id` has been resolved.
    pub fn contains(&self, id: &str) -> bool {
        self.resolved.read().contains_key(id)
    }

    /// Number of resolved nodes.
    pub fn len(&self) -> usize {
        self.resolved.read().len()
    }

    /// Whether nothing has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.resolved.read().is_empty()
    }

    /// Forget every resolved node.
    pub fn clear(&self) {
        self.resolved.write().clear();
    }
}

/// State of one resolution walk.
#[derive(Debug, Default)]
struct Walk {
    /// Ids being resolved, outermost first.
    stack: Vec<String>,
    /// Lowest stack position a cycle was cut at in the current subtree.
    lowest_cut: Option<usize>,
    /// Whether any cycle was cut in the current subtree.
    cut: bool,
}

impl Walk {
    fn nested(&self) -> bool {
        !self.stack.is_empty()
    }

    fn cut_at(&mut self, id: &str) -> bool {
        let Some(pos) = self.stack.iter().position(|s| s == id) else {
            return false;
        };
        self.lowest_cut = Some(self.lowest_cut.map_or(pos, |low| low.min(pos)));
        self.cut = true;
        true
    }
}

/// Where the target of an indirection is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Indirection {
    /// `link-target`: declarations, then referenced units.
    Link,
    /// `reference-id`: nodes encoded by referenced units.
    Reference,
}

impl ApiGraph {
    /// Resolve a shape against the loaded document.
    ///
    /// Non-object values (scalars, arrays) come back unchanged. Resolving
    /// an already resolved shape returns the stored result.
    pub fn resolve(&self, shape: &Value) -> Value {
        self.resolve_value(shape, &mut Walk::default())
    }

    /// Resolve a node. See [`ApiGraph::resolve`].
    pub fn resolve_node(&self, node: &Node) -> Node {
        self.resolve_object(node, &mut Walk::default())
    }

    /// Whether the node with this `@id` has already been resolved.
    pub fn is_resolved(&self, id: &str) -> bool {
        self.resolutions.contains(id)
    }

    /// The resolved target of a `link-target` id.
    pub fn link_target(&self, id: &str) -> Option<Value> {
        self.lookup(Indirection::Link, id, &mut Walk::default())
    }

    /// The resolved target of a `reference-id`.
    pub fn reference_target(&self, id: &str) -> Option<Value> {
        self.lookup(Indirection::Reference, id, &mut Walk::default())
    }

    fn resolve_value(&self, value: &Value, walk: &mut Walk) -> Value {
        match value {
            Value::Object(obj) => Value::Object(self.resolve_object(obj, walk)),
            other => other.clone(),
        }
    }

    fn resolve_object(&self, shape: &Node, walk: &mut Walk) -> Node {
        let id = node_id(shape).map(str::to_string);

        // bare `{"@id": ..}` references stay references
        if id.is_some() && shape.len() == 1 {
            return shape.clone();
        }

        if let Some(id) = &id {
            if let Some(done) = self.resolutions.get(id, walk.nested()) {
                if let Value::Object(obj) = done.as_ref() {
                    return obj.clone();
                }
            }
            if walk.cut_at(id) {
                log_cycle_cut!(id = %id, "node is already being resolved");
                return shape.clone();
            }
        }

        let indirection = self
            .link_value(shape, document::LINK_TARGET)
            .map(|target| (Indirection::Link, target))
            .or_else(|| {
                self.link_value(shape, document::REFERENCE_ID)
                    .map(|target| (Indirection::Reference, target))
            });

        if let Some((_, target_id)) = indirection {
            if id.as_deref() == Some(target_id) {
                log_self_link!(id = %target_id, "shape links to itself");
                self.resolutions
                    .insert(target_id, Value::Object(shape.clone()), true);
                return shape.clone();
            }
        }

        // cuts are tracked per subtree; the outer state comes back below
        let depth = walk.stack.len();
        let outer_cut = (walk.lowest_cut.take(), std::mem::take(&mut walk.cut));
        if let Some(id) = &id {
            walk.stack.push(id.clone());
        }

        let mut resolved = shape.clone();
        if let Some((kind, target_id)) = indirection {
            match self.lookup(kind, target_id, walk) {
                Some(Value::Object(target)) => self.merge_target(&mut resolved, target),
                _ => log_link_unresolved!(
                    id = id.as_deref().unwrap_or_default(),
                    target = %target_id,
                    "no node with the target id"
                ),
            }
        }

        let sources_key = self.key(source_maps::SOURCES);
        for (key, value) in resolved.iter_mut() {
            if key == ID || key == TYPE || *key == sources_key {
                continue;
            }
            *value = self.resolve_nested(value, walk);
        }

        if let Some(id) = &id {
            walk.stack.pop();
            // a cut above this node means the copy is truncated for this walk only
            let self_contained = !matches!(walk.lowest_cut, Some(low) if low < depth);
            if self_contained {
                self.resolutions
                    .insert(id, Value::Object(resolved.clone()), !walk.cut);
            }
        }
        walk.lowest_cut = match (outer_cut.0, walk.lowest_cut) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        walk.cut |= outer_cut.1;
        resolved
    }

    fn resolve_nested(&self, value: &Value, walk: &mut Walk) -> Value {
        match value {
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.resolve_value(item, walk))
                    .collect(),
            ),
            other => self.resolve_value(other, walk),
        }
    }

    /// Find the node an indirection points to and resolve it.
    fn lookup(&self, kind: Indirection, id: &str, walk: &mut Walk) -> Option<Value> {
        let target = match kind {
            Indirection::Link => self.declaration(id),
            Indirection::Reference => self.references()?.into_iter().find_map(|unit| {
                self.encodes_of(unit).filter(|n| node_id(n) == Some(id))
            }),
        }?;
        Some(Value::Object(self.resolve_object(target, walk)))
    }

    /// Merge a link target into the shape standing in for it.
    ///
    /// The target's properties win on conflict, except that `@type` lists
    /// are concatenated without duplicates and source maps are merged entry
    /// by entry. The target's own `@id` never replaces the shape's.
    fn merge_target(&self, shape: &mut Node, mut target: Node) {
        target.remove(ID);
        if let Some(target_types) = target.remove(TYPE) {
            let mut types = match shape.remove(TYPE) {
                Some(Value::Array(items)) => items,
                Some(single) => vec![single],
                None => Vec::new(),
            };
            let incoming = match target_types {
                Value::Array(items) => items,
                single => vec![single],
            };
            for t in incoming {
                if !types.contains(&t) {
                    types.push(t);
                }
            }
            shape.insert(TYPE.to_string(), Value::Array(types));
        }

        let sources_key = self.key(source_maps::SOURCES);
        if let (Some(mine), Some(theirs)) = (shape.get(&sources_key), target.get(&sources_key)) {
            let merged = merge_sources(mine, theirs);
            target.insert(sources_key, merged);
        }

        for (key, value) in target {
            shape.insert(key, value);
        }
    }
}

/// Merge two source-map values key by key.
///
/// Entries present on both sides are concatenated when they are lists;
/// otherwise the target's entry wins.
fn merge_sources(mine: &Value, theirs: &Value) -> Value {
    let first_object = |v: &Value| match v {
        Value::Array(items) => items.first().and_then(Value::as_object).cloned(),
        Value::Object(obj) => Some(obj.clone()),
        _ => None,
    };
    let (Some(mut merged), Some(incoming)) = (first_object(mine), first_object(theirs)) else {
        return theirs.clone();
    };

    for (key, value) in incoming {
        if key == ID || key == TYPE {
            merged.entry(key).or_insert(value);
            continue;
        }
        match (merged.get_mut(&key), value) {
            (Some(Value::Array(existing)), Value::Array(items)) => {
                for item in items {
                    if !existing.contains(&item) {
                        existing.push(item);
                    }
                }
            }
            (_, value) => {
                merged.insert(key, value);
            }
        }
    }
    Value::Array(vec![Value::Object(merged)])
}
