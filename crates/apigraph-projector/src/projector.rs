//! The projector and the fields every projection shares.

use serde_json::Value;

use apigraph_graph::node::{first_node, node_id, node_types, nodes, Node};
use apigraph_graph::ApiGraph;
use apigraph_vocab::{core, document, rdfs, source_maps};

use crate::model::{
    ApiCustomDomainProperty, ApiDocumentSourceMaps, ApiDomainProperty, ApiSynthesizedField,
};

/// Renders graph nodes of one loaded document as typed projections.
///
/// Public entry points resolve their input first (links merged, nested
/// nodes resolved); everything below them works on resolved nodes.
#[derive(Debug, Clone, Copy)]
pub struct Projector<'g> {
    graph: &'g ApiGraph,
}

impl<'g> Projector<'g> {
    pub fn new(graph: &'g ApiGraph) -> Self {
        Self { graph }
    }

    /// The graph this projector reads from.
    pub fn graph(&self) -> &'g ApiGraph {
        self.graph
    }

    pub(crate) fn resolved(&self, node: &Node) -> Node {
        self.graph.resolve_node(node)
    }

    /// Identity, types, custom properties and source maps of a node.
    pub(crate) fn element(&self, node: &Node) -> ApiDomainProperty {
        ApiDomainProperty {
            id: node_id(node).unwrap_or_default().to_string(),
            types: node_types(node).into_iter().map(String::from).collect(),
            custom_domain_properties: self.custom_domain_properties(node),
            source_maps: self.source_maps(node),
        }
    }

    /// Custom domain properties (annotations) applied to a node.
    ///
    /// The node lists the applied extension ids; each id is also a key on
    /// the node holding the extension's data node.
    pub fn custom_domain_properties(&self, node: &Node) -> Vec<ApiCustomDomainProperty> {
        self.graph
            .link_values(node, document::CUSTOM_DOMAIN_PROPERTIES)
            .into_iter()
            .map(|id| {
                let value = node
                    .get(id)
                    .or_else(|| node.get(&self.graph.key(id)))
                    .and_then(first_node);
                let name = value.and_then(|v| {
                    self.graph
                        .value_string(v, core::EXTENSION_NAME)
                        .or_else(|| self.graph.value_string(v, core::NAME))
                });
                ApiCustomDomainProperty {
                    id: id.to_string(),
                    name,
                    extension: value.map(|v| self.data_node_resolved(v)),
                }
            })
            .collect()
    }

    /// Source maps of a node. `None` when the node carries none.
    pub fn source_maps(&self, node: &Node) -> Option<ApiDocumentSourceMaps> {
        let sources = self.graph.property_node(node, source_maps::SOURCES)?;
        let fields = |iri: &str| -> Vec<ApiSynthesizedField> {
            self.graph
                .property_nodes(sources, iri)
                .into_iter()
                .map(|entry| self.synthesized_field(entry))
                .collect()
        };
        let single = |iri: &str| {
            self.graph
                .property_node(sources, iri)
                .map(|entry| self.synthesized_field(entry))
        };

        let maps = ApiDocumentSourceMaps {
            id: node_id(sources).map(String::from),
            synthesized_field: fields(source_maps::SYNTHESIZED_FIELD),
            lexical: fields(source_maps::LEXICAL),
            tracked_element: single(source_maps::TRACKED_ELEMENT),
            auto_generated_name: fields(source_maps::AUTO_GENERATED_NAME),
            parsed_json_schema: single(source_maps::PARSED_JSON_SCHEMA),
            declared_element: fields(source_maps::DECLARED_ELEMENT),
        };
        (!maps.is_empty()).then_some(maps)
    }

    fn synthesized_field(&self, entry: &Node) -> ApiSynthesizedField {
        ApiSynthesizedField {
            id: node_id(entry).unwrap_or_default().to_string(),
            element: self.graph.value_string(entry, source_maps::ELEMENT),
            value: self.graph.value_string(entry, source_maps::VALUE),
        }
    }

    /// Members of an RDF container: `rdfs:member` entries, or the numbered
    /// `rdfs:_1`, `rdfs:_2`, ... entries of a sequence.
    pub(crate) fn container_members<'a>(&self, node: &'a Node) -> Vec<&'a Value> {
        if let Some(members) = self.graph.property_array(node, rdfs::MEMBER) {
            return members;
        }
        let mut members = Vec::new();
        for index in 1.. {
            let key = self.graph.key(&format!("{}_{}", rdfs::NS, index));
            match node.get(&key) {
                Some(Value::Array(items)) => members.extend(items.iter()),
                Some(value) => members.push(value),
                None => break,
            }
        }
        members
    }

    /// Member nodes of a list property that may be written inline or as a
    /// single RDF sequence node.
    pub(crate) fn list_nodes<'a>(&self, node: &'a Node, iri: &str) -> Vec<&'a Node> {
        let items = self
            .graph
            .property(node, iri)
            .map(nodes)
            .unwrap_or_default();
        match items.as_slice() {
            [single] if self.is_container(single) => self
                .container_members(single)
                .into_iter()
                .flat_map(nodes)
                .collect(),
            _ => items,
        }
    }

    fn is_container(&self, node: &Node) -> bool {
        self.graph.has_type(node, apigraph_vocab::rdf::SEQ)
            || self.graph.has_property(node, rdfs::MEMBER)
            || node.contains_key(&self.graph.key(&format!("{}_1", rdfs::NS)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn graph(extra: Value) -> ApiGraph {
        let mut root = json!({
            "@id": "amf://id",
            "@context": {
                "doc": "http://a.ml/vocabularies/document#",
                "core": "http://a.ml/vocabularies/core#",
                "data": "http://a.ml/vocabularies/data#",
                "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
                "sourcemaps": "http://a.ml/vocabularies/document-source-maps#"
            }
        });
        if let (Some(root), Value::Object(extra)) = (root.as_object_mut(), extra) {
            root.extend(extra);
        }
        ApiGraph::from_value(root).unwrap()
    }

    #[test]
    fn source_maps_collect_every_field() {
        let g = graph(json!({}));
        let node = json!({
            "@id": "#/shape",
            "sourcemaps:sources": [{
                "@id": "#/shape/source-map",
                "sourcemaps:lexical": [
                    { "@id": "#/l/1", "sourcemaps:element": "core:name", "sourcemaps:value": "[(1,0)-(1,4)]" },
                    { "@id": "#/l/2", "sourcemaps:element": "core:description", "sourcemaps:value": "[(2,0)-(2,9)]" }
                ],
                "sourcemaps:tracked-element": [{ "@id": "#/t", "sourcemaps:element": "#/shape", "sourcemaps:value": "#/payload" }],
                "sourcemaps:declared-element": [{ "@id": "#/d", "sourcemaps:element": "#/shape", "sourcemaps:value": "" }]
            }]
        });
        let maps = Projector::new(&g)
            .source_maps(node.as_object().unwrap())
            .unwrap();
        assert_eq!(maps.id.as_deref(), Some("#/shape/source-map"));
        assert_eq!(maps.lexical.len(), 2);
        assert_eq!(maps.lexical[1].element.as_deref(), Some("core:description"));
        assert_eq!(
            maps.tracked_element.unwrap().value.as_deref(),
            Some("#/payload")
        );
        assert_eq!(maps.declared_element.len(), 1);
        assert!(maps.synthesized_field.is_empty());
        assert!(maps.parsed_json_schema.is_none());
    }

    #[test]
    fn nodes_without_source_maps_have_none() {
        let g = graph(json!({}));
        let p = Projector::new(&g);
        assert!(p.source_maps(json!({ "@id": "x" }).as_object().unwrap()).is_none());
        let empty = json!({ "@id": "x", "sourcemaps:sources": [{ "@id": "x/sm" }] });
        assert!(p.source_maps(empty.as_object().unwrap()).is_none());
    }

    #[test]
    fn custom_domain_properties_read_extension_values() {
        let g = graph(json!({}));
        let node = json!({
            "@id": "#/api",
            "doc:customDomainProperties": [{ "@id": "#/ext/rating" }],
            "#/ext/rating": [{
                "@id": "#/ext/rating/value",
                "@type": ["data:Scalar"],
                "core:extensionName": "rating",
                "data:value": "5"
            }]
        });
        let props = Projector::new(&g).custom_domain_properties(node.as_object().unwrap());
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].id, "#/ext/rating");
        assert_eq!(props[0].name.as_deref(), Some("rating"));
        assert_eq!(
            props[0].extension.as_ref().and_then(|e| e.as_scalar_value()),
            Some("5")
        );
    }

    #[test]
    fn container_members_read_numbered_entries() {
        let g = graph(json!({}));
        let seq = json!({ "rdfs:_1": [{ "@id": "a" }], "rdfs:_2": [{ "@id": "b" }], "rdfs:_4": [{ "@id": "d" }] });
        let members = Projector::new(&g).container_members(seq.as_object().unwrap());
        assert_eq!(members, vec![&json!({ "@id": "a" }), &json!({ "@id": "b" })]);
    }
}
