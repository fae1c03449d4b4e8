//! Domain query layer.
//!
//! Small side-effect-free accessors over graph nodes. Every accessor takes a
//! vocabulary IRI and compacts it through the graph's key resolver; nothing
//! above this module indexes a node by a raw key.
//!
//! Accessors never fail. Missing properties, wrong value shapes and absent
//! documents all come back as `None` or an empty `Vec`, because documents
//! produced from different API dialects are inconsistently populated.

use serde_json::Value;

use apigraph_vocab::{api_contract, document};

use crate::graph::ApiGraph;
use crate::node::{self, first, link_id, literal_string, node_id, node_types, Node, ID, VALUE};

impl ApiGraph {
    /// Raw value of a property.
    pub fn property<'a>(&self, node: &'a Node, iri: &str) -> Option<&'a Value> {
        node.get(&self.key(iri))
    }

    /// Whether the node carries the property.
    pub fn has_property(&self, node: &Node, iri: &str) -> bool {
        node.contains_key(&self.key(iri))
    }

    /// Whether the compacted type IRI is one of the node's `@type`s.
    pub fn has_type(&self, node: &Node, type_iri: &str) -> bool {
        let key = self.key(type_iri);
        node_types(node).contains(&key.as_str())
    }

    /// The scalar value of a property.
    ///
    /// Reads the first element of the property and returns its `@value`, or
    /// the element itself when it is a bare literal. `false`, `0` and `""`
    /// are values, not absence.
    pub fn value<'a>(&self, node: &'a Node, iri: &str) -> Option<&'a Value> {
        let item = first(self.property(node, iri)?)?;
        match item {
            Value::Object(obj) => obj.get(VALUE).filter(|v| !v.is_null()),
            Value::Null | Value::Array(_) => None,
            scalar => Some(scalar),
        }
    }

    /// The value of a property as a string slice, when it is a string.
    pub fn value_str<'a>(&self, node: &'a Node, iri: &str) -> Option<&'a str> {
        self.value(node, iri).and_then(Value::as_str)
    }

    /// The value of a property rendered as a string (numbers and booleans
    /// included).
    pub fn value_string(&self, node: &Node, iri: &str) -> Option<String> {
        self.value(node, iri).and_then(literal_string)
    }

    /// The value of a property as a boolean. Accepts `"true"`/`"false"`.
    pub fn value_bool(&self, node: &Node, iri: &str) -> Option<bool> {
        match self.value(node, iri)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// The value of a property as a number. Accepts numeric strings.
    pub fn value_f64(&self, node: &Node, iri: &str) -> Option<f64> {
        match self.value(node, iri)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// The value of a property as an integer. Accepts integral numbers and
    /// numeric strings.
    pub fn value_i64(&self, node: &Node, iri: &str) -> Option<i64> {
        match self.value(node, iri)? {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// All scalar values of a property, in order.
    pub fn values<'a>(&self, node: &'a Node, iri: &str) -> Vec<&'a Value> {
        let Some(value) = self.property(node, iri) else {
            return Vec::new();
        };
        node::ensure_array(value)
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(obj) => obj.get(VALUE),
                Value::Null | Value::Array(_) => None,
                scalar => Some(scalar),
            })
            .collect()
    }

    /// All scalar values of a property rendered as strings.
    pub fn value_strings(&self, node: &Node, iri: &str) -> Vec<String> {
        self.values(node, iri)
            .into_iter()
            .filter_map(literal_string)
            .collect()
    }

    /// The `@id` an IRI-valued property points to.
    pub fn link_value<'a>(&self, node: &'a Node, iri: &str) -> Option<&'a str> {
        first(self.property(node, iri)?).and_then(link_id)
    }

    /// All `@id`s an IRI-valued property points to.
    pub fn link_values<'a>(&self, node: &'a Node, iri: &str) -> Vec<&'a str> {
        self.property(node, iri)
            .map(|value| {
                node::ensure_array(value)
                    .into_iter()
                    .filter_map(link_id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A property normalized into a list. `None` when the property is absent.
    pub fn property_array<'a>(&self, node: &'a Node, iri: &str) -> Option<Vec<&'a Value>> {
        self.property(node, iri).map(node::ensure_array)
    }

    /// The object items of a property.
    pub fn property_nodes<'a>(&self, node: &'a Node, iri: &str) -> Vec<&'a Node> {
        self.property(node, iri).map(node::nodes).unwrap_or_default()
    }

    /// The first object item of a property.
    pub fn property_node<'a>(&self, node: &'a Node, iri: &str) -> Option<&'a Node> {
        self.property(node, iri).and_then(node::first_node)
    }

    /// The node a unit encodes.
    pub fn encodes_of<'a>(&self, unit: &'a Node) -> Option<&'a Node> {
        self.property_node(unit, document::ENCODES)
    }

    /// The nodes a unit declares. `None` when the unit declares nothing.
    pub fn declares_of<'a>(&self, unit: &'a Node) -> Option<Vec<&'a Node>> {
        self.property(unit, document::DECLARES).map(node::nodes)
    }

    /// The units a unit references. `None` when it references nothing.
    pub fn references_of<'a>(&self, unit: &'a Node) -> Option<Vec<&'a Node>> {
        self.property(unit, document::REFERENCES).map(node::nodes)
    }

    /// The node the loaded document encodes.
    pub fn encodes(&self) -> Option<&Node> {
        self.encodes_of(self.document()?)
    }

    /// The loaded document's declarations.
    pub fn declares(&self) -> Option<Vec<&Node>> {
        self.declares_of(self.document()?)
    }

    /// The loaded document's references.
    pub fn references(&self) -> Option<Vec<&Node>> {
        self.references_of(self.document()?)
    }

    /// Whether the node is a WebAPI.
    pub fn is_web_api(&self, node: &Node) -> bool {
        self.has_type(node, api_contract::WEB_API)
    }

    /// Whether the node is an AsyncAPI.
    pub fn is_async_api(&self, node: &Node) -> bool {
        self.has_type(node, api_contract::ASYNC_API)
    }

    /// Whether the node is an API of any kind.
    pub fn is_api(&self, node: &Node) -> bool {
        self.has_type(node, api_contract::API)
            || self.is_web_api(node)
            || self.is_async_api(node)
    }

    /// The encoded API, if the document encodes one.
    pub fn api(&self) -> Option<&Node> {
        self.encodes().filter(|api| self.is_api(api))
    }

    /// The encoded API when it is a WebAPI.
    pub fn web_api(&self) -> Option<&Node> {
        self.encodes().filter(|api| self.is_web_api(api))
    }

    /// The encoded API when it is an AsyncAPI.
    pub fn async_api(&self) -> Option<&Node> {
        self.encodes().filter(|api| self.is_async_api(api))
    }

    /// Depth-first search of the whole loaded document for a node by `@id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        find_in(self.raw(), id)
    }

    /// A declaration by `@id`: the document's own declarations first, then
    /// each reference's encoded node and declarations.
    pub fn declaration(&self, id: &str) -> Option<&Node> {
        if let Some(found) = self
            .declares()
            .and_then(|decls| decls.into_iter().find(|n| node_id(n) == Some(id)))
        {
            return Some(found);
        }
        self.references()?.into_iter().find_map(|unit| {
            self.encodes_of(unit)
                .filter(|n| node_id(n) == Some(id))
                .or_else(|| {
                    self.declares_of(unit)?
                        .into_iter()
                        .find(|n| node_id(n) == Some(id))
                })
        })
    }
}

fn find_in<'a>(value: &'a Value, id: &str) -> Option<&'a Node> {
    match value {
        Value::Object(obj) => {
            if obj.get(ID).and_then(Value::as_str) == Some(id) && obj.len() > 1 {
                return Some(obj);
            }
            obj.values().find_map(|v| find_in(v, id))
        }
        Value::Array(items) => items.iter().find_map(|v| find_in(v, id)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigraph_vocab::{core, shacl};
    use serde_json::json;

    fn graph() -> ApiGraph {
        ApiGraph::from_value(json!([{
            "@id": "amf://id",
            "@context": {
                "doc": "http://a.ml/vocabularies/document#",
                "core": "http://a.ml/vocabularies/core#",
                "apiContract": "http://a.ml/vocabularies/apiContract#",
                "shacl": "http://www.w3.org/ns/shacl#"
            },
            "@type": ["doc:Document"],
            "doc:encodes": [{
                "@id": "#/web-api",
                "@type": ["apiContract:WebAPI", "apiContract:API", "doc:RootDomainElement"],
                "core:name": [{ "@value": "Demo" }],
                "core:version": "v1"
            }],
            "doc:declares": [
                { "@id": "#/declares/A", "@type": ["shacl:NodeShape"], "shacl:closed": [{ "@value": false }] }
            ],
            "doc:references": [
                {
                    "@id": "#/lib",
                    "doc:declares": [{ "@id": "#/lib/B", "@type": ["shacl:NodeShape"] }]
                },
                {
                    "@id": "#/fragment",
                    "doc:encodes": [{ "@id": "#/fragment/C", "@type": ["shacl:NodeShape"] }]
                }
            ]
        }]))
        .unwrap()
    }

    #[test]
    fn value_reads_value_objects_and_bare_literals_alike() {
        let g = graph();
        let wrapped = json!({ "core:name": [{ "@value": "x" }] });
        let bare = json!({ "core:name": "x" });
        let api = g.encodes().unwrap();
        assert_eq!(g.value_str(api, core::NAME), Some("Demo"));
        assert_eq!(g.value_str(api, core::VERSION), Some("v1"));
        assert_eq!(g.value(wrapped.as_object().unwrap(), core::NAME), Some(&json!("x")));
        assert_eq!(g.value(bare.as_object().unwrap(), core::NAME), Some(&json!("x")));
    }

    #[test]
    fn falsy_values_pass_through() {
        let g = graph();
        let decl = g.declaration("#/declares/A").unwrap();
        assert_eq!(g.value(decl, shacl::CLOSED), Some(&json!(false)));
        assert_eq!(g.value_bool(decl, shacl::CLOSED), Some(false));

        let zero = json!({ "shacl:minCount": [{ "@value": 0 }] });
        assert_eq!(g.value_i64(zero.as_object().unwrap(), shacl::MIN_COUNT), Some(0));
    }

    #[test]
    fn missing_or_malformed_values_are_none() {
        let g = graph();
        let node = json!({
            "core:name": [{ "@id": "#/not-a-value" }],
            "core:description": [],
            "core:summary": null
        });
        let node = node.as_object().unwrap();
        assert_eq!(g.value(node, core::NAME), None);
        assert_eq!(g.value(node, core::DESCRIPTION), None);
        assert_eq!(g.value(node, core::SUMMARY), None);
        assert_eq!(g.value(node, core::TITLE), None);
        assert!(g.property_array(node, core::TITLE).is_none());
    }

    #[test]
    fn value_arrays_and_links() {
        let g = graph();
        let node = json!({
            "apiContract:scheme": [{ "@value": "HTTPS" }, "HTTP"],
            "shacl:datatype": [{ "@id": "http://www.w3.org/2001/XMLSchema#string" }],
            "apiContract:server": [{ "@id": "#/s1" }, { "@id": "#/s2" }]
        });
        let node = node.as_object().unwrap();
        assert_eq!(g.value_strings(node, api_contract::SCHEME), vec!["HTTPS", "HTTP"]);
        assert_eq!(
            g.link_value(node, shacl::DATATYPE),
            Some("http://www.w3.org/2001/XMLSchema#string")
        );
        assert_eq!(g.link_values(node, api_contract::SERVER_PROP), vec!["#/s1", "#/s2"]);
    }

    #[test]
    fn property_array_normalizes_singletons() {
        let g = graph();
        let node = json!({ "core:name": "single" });
        let items = g.property_array(node.as_object().unwrap(), core::NAME).unwrap();
        assert_eq!(items, vec![&json!("single")]);
    }

    #[test]
    fn structural_accessors_handle_wrapped_documents() {
        let g = graph();
        assert_eq!(g.encodes().and_then(node_id), Some("#/web-api"));
        assert_eq!(g.declares().unwrap().len(), 1);
        assert_eq!(g.references().unwrap().len(), 2);
    }

    #[test]
    fn api_classification() {
        let g = graph();
        let api = g.api().unwrap();
        assert!(g.is_web_api(api));
        assert!(g.is_api(api));
        assert!(!g.is_async_api(api));
        assert!(g.web_api().is_some());
        assert!(g.async_api().is_none());
    }

    #[test]
    fn has_type_uses_compacted_iris() {
        let g = graph();
        let decl = g.declaration("#/declares/A").unwrap();
        assert!(g.has_type(decl, shacl::NODE_SHAPE));
        assert!(!g.has_type(decl, shacl::PROPERTY_SHAPE));
    }

    #[test]
    fn declaration_searches_references() {
        let g = graph();
        assert!(g.declaration("#/lib/B").is_some());
        assert!(g.declaration("#/fragment/C").is_some());
        assert!(g.declaration("#/nope").is_none());
    }

    #[test]
    fn find_by_id_searches_the_whole_tree() {
        let g = graph();
        assert_eq!(
            g.find_by_id("#/lib/B").and_then(node_id),
            Some("#/lib/B")
        );
        assert!(g.find_by_id("#/missing").is_none());
    }

    #[test]
    fn accessors_on_empty_graph() {
        let g = ApiGraph::new();
        assert!(g.encodes().is_none());
        assert!(g.declares().is_none());
        assert!(g.api().is_none());
        assert!(g.find_by_id("x").is_none());
    }
}
