//! Examples and the tracked-element example filters.
//!
//! Examples written for a payload carry a `tracked-element` source map
//! listing the payload ids (comma separated) they belong to. When a shape is
//! projected for a payload, only the examples tracked to that payload, plus
//! every untracked example, are kept.

use apigraph_graph::node::Node;
use apigraph_vocab::{core, document, source_maps, AMF_ID_PREFIX};

use crate::model::ApiExample;
use crate::projector::Projector;

fn normalize_id(id: &str) -> &str {
    id.strip_prefix(AMF_ID_PREFIX).unwrap_or(id)
}

impl Projector<'_> {
    /// Project an example.
    pub fn example(&self, node: &Node) -> ApiExample {
        self.example_resolved(&self.resolved(node))
    }

    pub(crate) fn example_resolved(&self, node: &Node) -> ApiExample {
        let graph = self.graph();
        ApiExample {
            element: self.element(node),
            name: graph.value_string(node, core::NAME),
            display_name: graph.value_string(node, core::DISPLAY_NAME),
            description: graph.value_string(node, core::DESCRIPTION),
            value: graph.value_string(node, document::RAW),
            structured_value: graph
                .property_node(node, document::STRUCTURED_VALUE)
                .map(|value| self.data_node_resolved(value)),
            strict: graph.value_bool(node, document::STRICT).unwrap_or(false),
            media_type: graph.value_string(node, core::MEDIA_TYPE),
        }
    }

    /// The ids an example is tracked to. `None` for untracked examples.
    pub fn tracked_ids(&self, example: &Node) -> Option<Vec<String>> {
        let graph = self.graph();
        let sources = graph.property_node(example, source_maps::SOURCES)?;
        let tracked = graph.property_node(sources, source_maps::TRACKED_ELEMENT)?;
        let value = graph.value_string(tracked, source_maps::VALUE)?;
        Some(
            value
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Whether an example belongs to the node with `id`.
    ///
    /// Untracked examples belong everywhere. Ids match with or without the
    /// `amf://id` prefix.
    pub fn is_tracked_to(&self, example: &Node, id: &str) -> bool {
        match self.tracked_ids(example) {
            None => true,
            Some(ids) => {
                let wanted = normalize_id(id);
                ids.iter().any(|tracked| normalize_id(tracked) == wanted)
            }
        }
    }

    /// Examples that belong to the node with `id`.
    pub fn filter_tracked_examples<'a>(&self, examples: Vec<&'a Node>, id: &str) -> Vec<&'a Node> {
        examples
            .into_iter()
            .filter(|example| self.is_tracked_to(example, id))
            .collect()
    }

    /// Examples that are not tracked to any node.
    pub fn filter_non_tracked_examples<'a>(&self, examples: Vec<&'a Node>) -> Vec<&'a Node> {
        examples
            .into_iter()
            .filter(|example| self.tracked_ids(example).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigraph_graph::node::node_id;
    use apigraph_graph::ApiGraph;
    use serde_json::{json, Value};

    fn graph() -> ApiGraph {
        ApiGraph::from_value(json!({
            "@id": "amf://id",
            "@context": {
                "doc": "http://a.ml/vocabularies/document#",
                "core": "http://a.ml/vocabularies/core#",
                "sourcemaps": "http://a.ml/vocabularies/document-source-maps#"
            }
        }))
        .unwrap()
    }

    fn tracked(id: &str, to: &str) -> Value {
        json!({
            "@id": id,
            "sourcemaps:sources": [{
                "sourcemaps:tracked-element": [{ "sourcemaps:element": id, "sourcemaps:value": to }]
            }]
        })
    }

    fn ids<'a>(nodes: &[&'a Node]) -> Vec<&'a str> {
        nodes.iter().filter_map(|n| node_id(*n)).collect()
    }

    #[test]
    fn untracked_examples_pass_both_filters() {
        let g = graph();
        let p = Projector::new(&g);
        let x = json!({ "@id": "#/x", "doc:raw": "{}" });
        let x = x.as_object().unwrap();

        assert_eq!(ids(&p.filter_tracked_examples(vec![x], "#/any")), vec!["#/x"]);
        assert_eq!(ids(&p.filter_non_tracked_examples(vec![x])), vec!["#/x"]);
    }

    #[test]
    fn tracked_examples_match_their_payload_only() {
        let g = graph();
        let p = Projector::new(&g);
        let y = tracked("#/y", "p1");
        let y = y.as_object().unwrap();

        assert!(p.is_tracked_to(y, "p1"));
        assert!(!p.is_tracked_to(y, "p2"));
        assert!(p.is_tracked_to(y, "amf://idp1"));
        assert!(p.filter_non_tracked_examples(vec![y]).is_empty());
    }

    #[test]
    fn prefixed_tracking_matches_bare_ids() {
        let g = graph();
        let p = Projector::new(&g);
        let z = tracked("#/z", "amf://id#/payload/a, amf://id#/payload/b");
        let z = z.as_object().unwrap();

        assert_eq!(
            p.tracked_ids(z).unwrap(),
            vec!["amf://id#/payload/a", "amf://id#/payload/b"]
        );
        assert!(p.is_tracked_to(z, "#/payload/b"));
        assert!(p.is_tracked_to(z, "amf://id#/payload/a"));
        assert!(!p.is_tracked_to(z, "#/payload/c"));
    }

    #[test]
    fn examples_project_raw_and_structured_values() {
        let g = graph();
        let example = json!({
            "@id": "#/ex",
            "core:name": "sample",
            "doc:strict": true,
            "doc:raw": "name: Ada",
            "doc:structuredValue": [{ "@id": "#/ex/v", "http://a.ml/vocabularies/data#value": "Ada" }]
        });
        let projected = Projector::new(&g).example(example.as_object().unwrap());
        assert_eq!(projected.name.as_deref(), Some("sample"));
        assert!(projected.strict);
        assert_eq!(projected.value.as_deref(), Some("name: Ada"));
        assert_eq!(
            projected.structured_value.and_then(|v| v.as_scalar_value().map(String::from)),
            Some("Ada".to_string())
        );
    }
}
