//! Graph expansion boundary.
//!
//! The core consumes documents in expanded (embedded) form. Models produced
//! in flattened form (`{"@context": ..., "@graph": [...]}`) are converted by
//! a [`GraphExpander`] before they are loaded.

use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value};

use apigraph_vocab::{document, shapes};

use crate::error::GraphError;
use crate::keys::KeyResolver;
use crate::node::{
    ensure_array, node_id, node_types, unwrap_root, Node, CONTEXT, GRAPH, ID, TYPE,
};

/// Options passed to [`GraphExpander::expand`].
#[derive(Debug, Clone)]
pub struct ExpandOptions {
    /// Replace `{"@id": ...}` references with the referenced node.
    pub embed_links: bool,
    /// Properties whose values are never embedded (full IRIs). Defaults to
    /// the recursive-shape `fixPoint`, which would otherwise inline forever.
    pub skip_embed_keys: Vec<String>,
    /// Compact full-IRI keys and types against the document context.
    pub compact_iris: bool,
    /// Identifier of the root node. Needed when the input has no top-level
    /// `@context` to identify the document unit by.
    pub root_id: Option<String>,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            embed_links: true,
            skip_embed_keys: vec![shapes::FIX_POINT.to_string()],
            compact_iris: true,
            root_id: None,
        }
    }
}

impl ExpandOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable link embedding.
    pub fn with_embed_links(mut self, embed: bool) -> Self {
        self.embed_links = embed;
        self
    }

    /// Add a property that is never embedded.
    pub fn with_skip_embed_key(mut self, iri: impl Into<String>) -> Self {
        self.skip_embed_keys.push(iri.into());
        self
    }

    /// Enable or disable IRI compaction.
    pub fn with_compact_iris(mut self, compact: bool) -> Self {
        self.compact_iris = compact;
        self
    }

    /// Set the root node identifier.
    pub fn with_root_id(mut self, id: impl Into<String>) -> Self {
        self.root_id = Some(id.into());
        self
    }
}

/// Converts a possibly flattened graph into canonical expanded form.
pub trait GraphExpander: Send + Sync {
    /// Whether the model is already in the form the core consumes.
    fn is_expanded_form(&self, model: &Value) -> bool;

    /// Produce the expanded document. Must not have side effects.
    fn expand(&self, model: Value, options: &ExpandOptions) -> Result<Value, GraphError>;
}

/// Expander for flattened JSON-LD (`@graph` + `@context`).
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenedExpander;

/// Types that identify the document unit among flattened nodes.
const UNIT_TYPES: &[&str] = &[
    document::DOCUMENT,
    document::MODULE,
    document::FRAGMENT,
    document::EXTERNAL_FRAGMENT,
    document::UNIT,
];

impl GraphExpander for FlattenedExpander {
    fn is_expanded_form(&self, model: &Value) -> bool {
        match unwrap_root(model) {
            Some(root) => !root.contains_key(GRAPH),
            None => true,
        }
    }

    fn expand(&self, model: Value, options: &ExpandOptions) -> Result<Value, GraphError> {
        let root = unwrap_root(&model)
            .ok_or_else(|| GraphError::Expansion("model root must be an object".into()))?;
        let graph = root
            .get(GRAPH)
            .and_then(Value::as_array)
            .ok_or_else(|| GraphError::Expansion("flattened model has no '@graph' array".into()))?;

        let keys = KeyResolver::from_document(&model);
        let index: HashMap<&str, &Node> = graph
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|node| node_id(node).map(|id| (id, node)))
            .collect();

        let unit = find_unit(graph, &index, &keys, options.root_id.as_deref())?;
        let embedder = Embedder {
            index: &index,
            keys: &keys,
            options,
        };
        let mut expanded = embedder.embed_unit(unit);

        if let Some(context) = root.get(CONTEXT) {
            expanded.insert(CONTEXT.to_string(), context.clone());
        }
        Ok(Value::Object(expanded))
    }
}

fn find_unit<'a>(
    graph: &'a [Value],
    index: &HashMap<&str, &'a Node>,
    keys: &KeyResolver,
    root_id: Option<&str>,
) -> Result<&'a Node, GraphError> {
    if let Some(id) = root_id {
        return index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::Expansion(format!("root node '{}' not in graph", id)));
    }

    let is_unit = |node: &&Node| {
        node_types(node)
            .iter()
            .any(|t| UNIT_TYPES.contains(&keys.expand(t).as_str()))
    };
    graph
        .iter()
        .filter_map(Value::as_object)
        .find(is_unit)
        .or_else(|| graph.iter().find_map(Value::as_object))
        .ok_or_else(|| GraphError::Expansion("'@graph' has no nodes".into()))
}

/// Inlines referenced nodes. Each node is embedded in full once; later
/// references to it stay `{"@id": ...}` references.
struct Embedder<'a> {
    index: &'a HashMap<&'a str, &'a Node>,
    keys: &'a KeyResolver,
    options: &'a ExpandOptions,
}

impl Embedder<'_> {
    /// Embed the document unit. Declarations are embedded in place and
    /// nowhere else, so usages elsewhere refer to them.
    fn embed_unit(&self, unit: &Node) -> Node {
        let mut embedded = HashSet::new();
        if let Some(id) = node_id(unit) {
            embedded.insert(id.to_string());
        }
        let declares = |key: &str| self.keys.expand(key) == document::DECLARES;
        for (_, value) in unit.iter().filter(|(key, _)| declares(key.as_str())) {
            let targets = ensure_array(value)
                .into_iter()
                .filter_map(|item| self.declared_target(item));
            embedded.extend(targets.filter_map(node_id).map(str::to_string));
        }

        let mut out = Map::with_capacity(unit.len());
        for (key, value) in unit {
            if !declares(key.as_str()) {
                let (out_key, out_value) = self.embed_entry(key, value, &mut embedded);
                out.insert(out_key, out_value);
                continue;
            }
            let items = ensure_array(value)
                .into_iter()
                .map(|item| match self.declared_target(item) {
                    Some(target) => Value::Object(self.embed_node(target, &mut embedded)),
                    None => self.embed_value(item, &mut embedded),
                })
                .collect();
            out.insert(self.out_key(key), Value::Array(items));
        }
        out
    }

    fn embed_node(&self, node: &Node, embedded: &mut HashSet<String>) -> Node {
        let mut out = Map::with_capacity(node.len());
        for (key, value) in node {
            let (out_key, out_value) = self.embed_entry(key, value, embedded);
            out.insert(out_key, out_value);
        }
        out
    }

    fn embed_entry(
        &self,
        key: &str,
        value: &Value,
        embedded: &mut HashSet<String>,
    ) -> (String, Value) {
        let out_value = if key == TYPE {
            self.compact_types(value)
        } else if self.options.skip_embed_keys.contains(&self.keys.expand(key)) {
            value.clone()
        } else {
            self.embed_value(value, embedded)
        };
        (self.out_key(key), out_value)
    }

    fn out_key(&self, key: &str) -> String {
        if key.starts_with('@') || !self.options.compact_iris {
            key.to_string()
        } else {
            self.keys.resolve(&self.keys.expand(key))
        }
    }

    fn embed_value(&self, value: &Value, embedded: &mut HashSet<String>) -> Value {
        match value {
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|v| self.embed_value(v, embedded))
                    .collect(),
            ),
            Value::Object(obj) => match self.reference_target(obj, embedded) {
                Some(target) => Value::Object(self.embed_node(target, embedded)),
                None => Value::Object(self.embed_node(obj, embedded)),
            },
            other => other.clone(),
        }
    }

    /// The node a bare `{"@id": ...}` reference points to, unless embedding
    /// is off or the node has been embedded already. Marks it embedded.
    fn reference_target(&self, obj: &Node, embedded: &mut HashSet<String>) -> Option<&Node> {
        if !self.options.embed_links || obj.len() != 1 {
            return None;
        }
        let id = obj.get(ID)?.as_str()?;
        if embedded.contains(id) {
            return None;
        }
        let target = self.index.get(id).copied()?;
        embedded.insert(id.to_string());
        Some(target)
    }

    /// A declaration given by reference, when embedding is on.
    fn declared_target(&self, item: &Value) -> Option<&Node> {
        if !self.options.embed_links {
            return None;
        }
        let obj = item.as_object().filter(|obj| obj.len() == 1)?;
        self.index.get(obj.get(ID)?.as_str()?).copied()
    }

    fn compact_types(&self, types: &Value) -> Value {
        if !self.options.compact_iris {
            return types.clone();
        }
        let compact = |t: &Value| match t {
            Value::String(s) => Value::String(self.keys.resolve(&self.keys.expand(s))),
            other => other.clone(),
        };
        match types {
            Value::Array(items) => Value::Array(items.iter().map(compact).collect()),
            other => compact(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flattened() -> Value {
        json!({
            "@context": {
                "doc": "http://a.ml/vocabularies/document#",
                "shapes": "http://a.ml/vocabularies/shapes#",
                "shacl": "http://www.w3.org/ns/shacl#"
            },
            "@graph": [
                {
                    "@id": "#/shapes/A",
                    "@type": ["shacl:NodeShape"],
                    "shacl:property": [{ "@id": "#/shapes/A/p" }]
                },
                {
                    "@id": "./",
                    "@type": ["doc:Document"],
                    "doc:declares": [{ "@id": "#/shapes/A" }, { "@id": "#/shapes/R" }]
                },
                {
                    "@id": "#/shapes/A/p",
                    "@type": ["shacl:PropertyShape"],
                    "http://a.ml/vocabularies/shapes#range": [{ "@id": "#/shapes/A" }]
                },
                {
                    "@id": "#/shapes/R",
                    "@type": ["shapes:RecursiveShape"],
                    "shapes:fixPoint": [{ "@id": "#/shapes/A" }]
                }
            ]
        })
    }

    #[test]
    fn detects_flattened_form() {
        let expander = FlattenedExpander;
        assert!(!expander.is_expanded_form(&flattened()));
        assert!(expander.is_expanded_form(&json!({"@id": "doc"})));
        assert!(expander.is_expanded_form(&Value::Null));
    }

    #[test]
    fn embeds_declarations_under_document_unit() {
        let expanded = FlattenedExpander
            .expand(flattened(), &ExpandOptions::default())
            .unwrap();
        assert_eq!(expanded["@id"], "./");
        assert!(expanded.get("@context").is_some());

        let shape = &expanded["doc:declares"][0];
        assert_eq!(shape["@type"][0], "shacl:NodeShape");
        let property = &shape["shacl:property"][0];
        assert_eq!(property["@type"][0], "shacl:PropertyShape");
        // full-IRI key is compacted; the cyclic reference back to A stays a reference
        assert_eq!(property["shapes:range"][0], json!({ "@id": "#/shapes/A" }));
    }

    #[test]
    fn fix_point_is_never_embedded() {
        let expanded = FlattenedExpander
            .expand(flattened(), &ExpandOptions::default())
            .unwrap();
        let recursive = &expanded["doc:declares"][1];
        assert_eq!(recursive["shapes:fixPoint"][0], json!({ "@id": "#/shapes/A" }));
    }

    #[test]
    fn explicit_root_id_selects_the_root() {
        let options = ExpandOptions::new().with_root_id("#/shapes/R");
        let expanded = FlattenedExpander.expand(flattened(), &options).unwrap();
        assert_eq!(expanded["@id"], "#/shapes/R");

        let missing = ExpandOptions::new().with_root_id("#/nope");
        assert!(matches!(
            FlattenedExpander.expand(flattened(), &missing),
            Err(GraphError::Expansion(_))
        ));
    }

    #[test]
    fn embedding_can_be_disabled() {
        let options = ExpandOptions::new().with_embed_links(false);
        let expanded = FlattenedExpander.expand(flattened(), &options).unwrap();
        assert_eq!(expanded["doc:declares"][0], json!({ "@id": "#/shapes/A" }));
    }

    #[test]
    fn shared_nodes_are_embedded_once() {
        // every level refers to the next one twice
        let depth = 18;
        let mut graph = vec![json!({
            "@id": "./",
            "@type": ["doc:Document"],
            "doc:encodes": [{ "@id": "#/n0" }]
        })];
        for level in 0..depth {
            let next = json!({ "@id": format!("#/n{}", level + 1) });
            graph.push(json!({
                "@id": format!("#/n{}", level),
                "@type": ["shacl:NodeShape"],
                "shacl:and": [next.clone(), next]
            }));
        }
        graph.push(json!({ "@id": format!("#/n{}", depth), "@type": ["shacl:NodeShape"] }));
        let model = json!({
            "@context": {
                "doc": "http://a.ml/vocabularies/document#",
                "shacl": "http://www.w3.org/ns/shacl#"
            },
            "@graph": graph
        });

        let expanded = FlattenedExpander
            .expand(model, &ExpandOptions::default())
            .unwrap();
        assert!(expanded.to_string().len() < 10_000);

        let n0 = &expanded["doc:encodes"][0];
        assert_eq!(n0["shacl:and"][0]["@id"], "#/n1");
        assert_eq!(n0["shacl:and"][0]["@type"][0], "shacl:NodeShape");
        assert_eq!(n0["shacl:and"][1], json!({ "@id": "#/n1" }));
    }

    #[test]
    fn declarations_own_their_nodes() {
        let model = json!({
            "@context": {
                "doc": "http://a.ml/vocabularies/document#",
                "shapes": "http://a.ml/vocabularies/shapes#",
                "shacl": "http://www.w3.org/ns/shacl#"
            },
            "@graph": [
                {
                    "@id": "./",
                    "@type": ["doc:Document"],
                    "doc:encodes": [{ "@id": "#/api" }],
                    "doc:declares": [{ "@id": "#/declares/Pet" }]
                },
                { "@id": "#/api", "shapes:schema": [{ "@id": "#/declares/Pet" }] },
                { "@id": "#/declares/Pet", "@type": ["shacl:NodeShape"], "shacl:name": "Pet" }
            ]
        });

        let expanded = FlattenedExpander
            .expand(model, &ExpandOptions::default())
            .unwrap();
        // usages come first in the unit but still refer to the declaration
        assert_eq!(
            expanded["doc:encodes"][0]["shapes:schema"][0],
            json!({ "@id": "#/declares/Pet" })
        );
        assert_eq!(expanded["doc:declares"][0]["shacl:name"], "Pet");
    }

    #[test]
    fn missing_graph_is_an_error() {
        let result = FlattenedExpander.expand(json!({"@context": {}}), &ExpandOptions::default());
        assert!(matches!(result, Err(GraphError::Expansion(_))));
    }
}
