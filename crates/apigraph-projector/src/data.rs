//! Data nodes: example values, default values and annotation values.

use std::collections::BTreeMap;

use apigraph_graph::node::{first_node, nodes, Node, ID, TYPE};
use apigraph_vocab::{core, data, local_name, shacl};

use crate::model::{ApiArrayNode, ApiDataNode, ApiDataNodeUnion, ApiObjectNode, ApiScalarNode};
use crate::projector::Projector;

impl Projector<'_> {
    /// Project a data node.
    pub fn data_node(&self, node: &Node) -> ApiDataNodeUnion {
        self.data_node_resolved(&self.resolved(node))
    }

    pub(crate) fn data_node_resolved(&self, node: &Node) -> ApiDataNodeUnion {
        let graph = self.graph();
        if graph.has_type(node, data::SCALAR) {
            ApiDataNodeUnion::Scalar(self.scalar_node(node))
        } else if graph.has_type(node, data::ARRAY) {
            ApiDataNodeUnion::Array(self.array_node(node))
        } else if graph.has_type(node, data::OBJECT) {
            ApiDataNodeUnion::Object(self.object_node(node))
        } else if graph.has_property(node, data::VALUE) {
            ApiDataNodeUnion::Scalar(self.scalar_node(node))
        } else if !self.container_members(node).is_empty() {
            ApiDataNodeUnion::Array(self.array_node(node))
        } else {
            ApiDataNodeUnion::Object(self.object_node(node))
        }
    }

    fn data_base(&self, node: &Node) -> ApiDataNode {
        ApiDataNode {
            element: self.element(node),
            name: self.graph().value_string(node, core::NAME),
        }
    }

    fn scalar_node(&self, node: &Node) -> ApiScalarNode {
        let graph = self.graph();
        ApiScalarNode {
            node: self.data_base(node),
            value: graph.value_string(node, data::VALUE),
            data_type: graph
                .link_value(node, shacl::DATATYPE)
                .map(|iri| graph.key(iri)),
        }
    }

    fn array_node(&self, node: &Node) -> ApiArrayNode {
        ApiArrayNode {
            node: self.data_base(node),
            members: self
                .container_members(node)
                .into_iter()
                .flat_map(nodes)
                .map(|member| self.data_node_resolved(member))
                .collect(),
        }
    }

    /// Object properties are the node's keys in the data namespace, named
    /// by their local name.
    fn object_node(&self, node: &Node) -> ApiObjectNode {
        let keys = self.graph().keys();
        let mut properties = BTreeMap::new();
        for (key, value) in node {
            if key == ID || key == TYPE {
                continue;
            }
            let iri = keys.expand(key);
            if !iri.starts_with(data::NS) {
                continue;
            }
            if let Some(child) = first_node(value) {
                properties.insert(
                    local_name(&iri).to_string(),
                    self.data_node_resolved(child),
                );
            }
        }
        ApiObjectNode {
            node: self.data_base(node),
            properties,
        }
    }

    /// Scalar values of an enumeration (`shacl:in`) list.
    pub(crate) fn enum_values(&self, node: &Node) -> Vec<ApiDataNodeUnion> {
        let Some(list) = self.graph().property(node, shacl::IN) else {
            return Vec::new();
        };
        nodes(list)
            .into_iter()
            .flat_map(|item| {
                let members = self.container_members(item);
                if members.is_empty() {
                    vec![self.data_node_resolved(item)]
                } else {
                    members
                        .into_iter()
                        .flat_map(nodes)
                        .map(|member| self.data_node_resolved(member))
                        .collect()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigraph_graph::ApiGraph;
    use serde_json::{json, Value};

    fn graph() -> ApiGraph {
        ApiGraph::from_value(json!({
            "@id": "amf://id",
            "@context": {
                "core": "http://a.ml/vocabularies/core#",
                "data": "http://a.ml/vocabularies/data#",
                "shacl": "http://www.w3.org/ns/shacl#",
                "rdf": "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
                "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
                "xsd": "http://www.w3.org/2001/XMLSchema#"
            }
        }))
        .unwrap()
    }

    fn obj(value: &Value) -> &Node {
        value.as_object().unwrap()
    }

    #[test]
    fn scalar_nodes_compact_their_datatype() {
        let g = graph();
        let node = json!({
            "@id": "#/v",
            "@type": ["data:Scalar"],
            "data:value": "42",
            "shacl:datatype": [{ "@id": "http://www.w3.org/2001/XMLSchema#integer" }]
        });
        let ApiDataNodeUnion::Scalar(scalar) = Projector::new(&g).data_node(obj(&node)) else {
            panic!("expected a scalar node");
        };
        assert_eq!(scalar.value.as_deref(), Some("42"));
        assert_eq!(scalar.data_type.as_deref(), Some("xsd:integer"));
    }

    #[test]
    fn object_nodes_name_properties_by_local_name() {
        let g = graph();
        let node = json!({
            "@id": "#/o",
            "@type": ["data:Object"],
            "core:name": "address",
            "data:street": [{ "@id": "#/o/street", "@type": ["data:Scalar"], "data:value": "Main St" }],
            "data:number": [{ "@id": "#/o/number", "@type": ["data:Scalar"], "data:value": 5 }]
        });
        let ApiDataNodeUnion::Object(object) = Projector::new(&g).data_node(obj(&node)) else {
            panic!("expected an object node");
        };
        assert_eq!(object.node.name.as_deref(), Some("address"));
        assert_eq!(
            object.properties.keys().collect::<Vec<_>>(),
            vec!["number", "street"]
        );
        assert_eq!(object.properties["number"].as_scalar_value(), Some("5"));
    }

    #[test]
    fn array_nodes_keep_member_order() {
        let g = graph();
        let node = json!({
            "@id": "#/a",
            "@type": ["data:Array", "rdf:Seq"],
            "rdfs:_1": [{ "@id": "#/a/1", "@type": ["data:Scalar"], "data:value": "b" }],
            "rdfs:_2": [{ "@id": "#/a/2", "@type": ["data:Scalar"], "data:value": "a" }]
        });
        let ApiDataNodeUnion::Array(array) = Projector::new(&g).data_node(obj(&node)) else {
            panic!("expected an array node");
        };
        let values: Vec<_> = array.members.iter().filter_map(|m| m.as_scalar_value()).collect();
        assert_eq!(values, vec!["b", "a"]);
    }

    #[test]
    fn untyped_nodes_are_classified_by_content() {
        let g = graph();
        let p = Projector::new(&g);
        let scalar = json!({ "data:value": "x" });
        assert!(matches!(p.data_node(obj(&scalar)), ApiDataNodeUnion::Scalar(_)));
        let array = json!({ "rdfs:member": [{ "data:value": "x" }] });
        assert!(matches!(p.data_node(obj(&array)), ApiDataNodeUnion::Array(_)));
        let object = json!({});
        assert!(matches!(p.data_node(obj(&object)), ApiDataNodeUnion::Object(_)));
    }

    #[test]
    fn enum_values_read_sequence_members() {
        let g = graph();
        let shape = json!({
            "@id": "#/s",
            "shacl:in": [{
                "@id": "#/s/in",
                "@type": ["rdf:Seq"],
                "rdfs:_1": [{ "@type": ["data:Scalar"], "data:value": "red" }],
                "rdfs:_2": [{ "@type": ["data:Scalar"], "data:value": "green" }]
            }]
        });
        let values = Projector::new(&g).enum_values(obj(&shape));
        let values: Vec<_> = values.iter().filter_map(|v| v.as_scalar_value()).collect();
        assert_eq!(values, vec!["red", "green"]);
    }
}
