//! ModelBuilder: expanded API graph models for tests.

use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};
use tempfile::TempDir;
use thiserror::Error;

use apigraph_graph::{ApiGraph, GraphError};

/// Errors from fixture helpers.
#[derive(Debug, Error)]
pub enum TestError {
    #[error("fixture not found: {0}")]
    FixtureNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Prefixes every built model declares.
fn context() -> Value {
    json!({
        "@base": "amf://id",
        "doc": "http://a.ml/vocabularies/document#",
        "core": "http://a.ml/vocabularies/core#",
        "apiContract": "http://a.ml/vocabularies/apiContract#",
        "shacl": "http://www.w3.org/ns/shacl#",
        "shapes": "http://a.ml/vocabularies/shapes#",
        "security": "http://a.ml/vocabularies/security#",
        "data": "http://a.ml/vocabularies/data#",
        "sourcemaps": "http://a.ml/vocabularies/document-source-maps#",
        "rdfs": "http://www.w3.org/2000/01/rdf-schema#"
    })
}

/// Builds an expanded model (`[{ "@id": "amf://id", ... }]`).
///
/// Endpoints get ids under `#/api/end-points/<n>` and their operations
/// `<endpoint>/<method>`, so tests can address them without reading the
/// model back.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    api: Option<Map<String, Value>>,
    endpoints: Vec<Value>,
    servers: Vec<Value>,
    declares: Vec<Value>,
    references: Vec<Value>,
}

impl ModelBuilder {
    /// A document encoding a WebAPI.
    pub fn web_api(name: &str) -> Self {
        Self::with_api(name, &["apiContract:WebAPI", "apiContract:API", "doc:RootDomainElement"])
    }

    /// A document encoding an AsyncAPI.
    pub fn async_api(name: &str) -> Self {
        Self::with_api(name, &["apiContract:AsyncAPI", "apiContract:API", "doc:RootDomainElement"])
    }

    /// A document that encodes nothing, only declarations.
    pub fn library() -> Self {
        Self::default()
    }

    fn with_api(name: &str, types: &[&str]) -> Self {
        let mut api = Map::new();
        api.insert("@id".into(), json!("#/api"));
        api.insert("@type".into(), json!(types));
        api.insert("core:name".into(), json!(name));
        Self {
            api: Some(api),
            ..Self::default()
        }
    }

    /// Set a property on the encoded API. Ignored for libraries.
    pub fn api_property(mut self, key: &str, value: Value) -> Self {
        if let Some(api) = self.api.as_mut() {
            api.insert(key.to_string(), value);
        }
        self
    }

    /// Set the API version.
    pub fn version(self, version: &str) -> Self {
        self.api_property("core:version", json!(version))
    }

    /// Add a root-level server.
    pub fn server(mut self, url: &str) -> Self {
        let id = format!("#/api/server/{}", self.servers.len());
        self.servers.push(json!({
            "@id": id,
            "@type": ["apiContract:Server", "doc:DomainElement"],
            "core:urlTemplate": url
        }));
        self
    }

    /// Add an endpoint with one bare operation per method.
    pub fn endpoint(self, path: &str, methods: &[&str]) -> Self {
        self.endpoint_with(path, methods, Map::new())
    }

    /// Add an endpoint with one bare operation per method plus extra
    /// endpoint properties.
    pub fn endpoint_with(mut self, path: &str, methods: &[&str], extra: Map<String, Value>) -> Self {
        let id = format!("#/api/end-points/{}", self.endpoints.len());
        let operations: Vec<Value> = methods
            .iter()
            .map(|method| {
                json!({
                    "@id": format!("{}/{}", id, method),
                    "@type": ["apiContract:Operation", "doc:DomainElement"],
                    "apiContract:method": method
                })
            })
            .collect();

        let mut endpoint = Map::new();
        endpoint.insert("@id".into(), json!(id));
        endpoint.insert("@type".into(), json!(["apiContract:EndPoint", "doc:DomainElement"]));
        endpoint.insert("apiContract:path".into(), json!(path));
        endpoint.insert("apiContract:supportedOperation".into(), Value::Array(operations));
        endpoint.extend(extra);
        self.endpoints.push(Value::Object(endpoint));
        self
    }

    /// Add a node to the document's declarations.
    pub fn declare(mut self, node: Value) -> Self {
        self.declares.push(node);
        self
    }

    /// Add a referenced unit (library or fragment).
    pub fn reference(mut self, unit: Value) -> Self {
        self.references.push(unit);
        self
    }

    /// The expanded model.
    pub fn build(self) -> Value {
        let mut root = Map::new();
        root.insert("@id".into(), json!("amf://id"));
        let unit_types = if self.api.is_some() {
            json!(["doc:Document", "doc:Fragment", "doc:Module", "doc:Unit"])
        } else {
            json!(["doc:Module", "doc:Unit"])
        };
        root.insert("@type".into(), unit_types);

        if let Some(mut api) = self.api {
            if !self.servers.is_empty() {
                api.insert("apiContract:server".into(), Value::Array(self.servers));
            }
            api.insert("apiContract:endpoint".into(), Value::Array(self.endpoints));
            root.insert("doc:encodes".into(), Value::Array(vec![Value::Object(api)]));
        }
        if !self.declares.is_empty() {
            root.insert("doc:declares".into(), Value::Array(self.declares));
        }
        if !self.references.is_empty() {
            root.insert("doc:references".into(), Value::Array(self.references));
        }
        root.insert("@context".into(), context());
        Value::Array(vec![Value::Object(root)])
    }

    /// Build and load into a graph.
    pub fn load(self) -> Result<ApiGraph, GraphError> {
        ApiGraph::from_value(self.build())
    }
}

/// Absolute path to a file in the shared fixtures directory.
pub fn fixture_path(name: &str) -> PathBuf {
    // CARGO_MANIFEST_DIR = .../crates/apigraph-test
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

/// Load a fixture model into a graph.
pub fn load_fixture(name: &str) -> Result<ApiGraph, TestError> {
    let path = fixture_path(name);
    if !path.exists() {
        return Err(TestError::FixtureNotFound(name.to_string()));
    }
    Ok(ApiGraph::from_path(&path)?)
}

/// Write a model to a temporary file. The directory is removed when the
/// returned guard drops.
pub fn write_model(model: &Value) -> Result<(TempDir, PathBuf), TestError> {
    let dir = TempDir::new()?;
    let path = dir.path().join("model.json");
    std::fs::write(&path, serde_json::to_string_pretty(model)?)?;
    Ok((dir, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigraph_graph::node::node_id;
    use apigraph_projector::{Projector, ShapeKind};
    use apigraph_vocab::api_contract;

    #[test]
    fn built_models_load_with_endpoints_in_order() {
        let graph = ModelBuilder::web_api("Orders")
            .version("v1")
            .server("https://orders.example.com/{version}")
            .endpoint("/orders", &["get", "post"])
            .endpoint("/orders/{id}", &["get"])
            .load()
            .unwrap();

        assert!(graph.web_api().is_some());
        let paths: Vec<_> = graph
            .endpoints()
            .into_iter()
            .filter_map(|e| graph.value_string(e, api_contract::PATH))
            .collect();
        assert_eq!(paths, vec!["/orders", "/orders/{id}"]);
        assert!(graph.operation("#/api/end-points/0/post").is_some());
        assert_eq!(graph.api_version().as_deref(), Some("v1"));
    }

    #[test]
    fn async_models_project_as_async() {
        let graph = ModelBuilder::async_api("Events")
            .endpoint("user/signedup", &["subscribe"])
            .load()
            .unwrap();
        let projected = Projector::new(&graph).async_api().unwrap();
        assert_eq!(projected.api.summary.name.as_deref(), Some("Events"));
        assert_eq!(projected.api.end_points[0].operations[0].method, "subscribe");
        assert!(Projector::new(&graph).web_api().is_none());
    }

    #[test]
    fn libraries_have_no_api() {
        let graph = ModelBuilder::library()
            .declare(json!({ "@id": "#/declares/A", "@type": ["shacl:NodeShape"], "shacl:name": "A" }))
            .load()
            .unwrap();
        assert!(graph.api().is_none());
        assert!(graph.declaration("#/declares/A").is_some());
    }

    #[test]
    fn expanded_fixture_projects_linked_schemas() {
        let graph = load_fixture("petstore.json").unwrap();
        let web = Projector::new(&graph).web_api().unwrap();

        assert_eq!(web.api.summary.name.as_deref(), Some("Pet Store"));
        assert_eq!(web.api.end_points.len(), 2);
        assert_eq!(web.api.servers[0].url, "https://api.petstore.example.com/v1");

        let create = &web.api.end_points[0].operations[1];
        assert_eq!(create.method, "post");
        let schema = create.request.as_ref().unwrap().payloads[0]
            .schema
            .as_ref()
            .unwrap();
        assert_eq!(schema.kind(), ShapeKind::Node);
        assert_eq!(schema.shape().name.as_deref(), Some("Pet"));
        assert_eq!(schema.shape().link_label.as_deref(), Some("Pet"));

        let scheme = web.api.security[0].schemes[0].scheme.as_ref().unwrap();
        assert_eq!(scheme.scheme_type.as_deref(), Some("Api Key"));
    }

    #[test]
    fn flattened_fixture_is_expanded_on_load() {
        let graph = load_fixture("todo-flattened.json").unwrap();
        let api = graph.api().unwrap();
        assert_eq!(node_id(api), Some("#/web-api"));
        assert_eq!(graph.endpoints().len(), 2);
        let item = graph.endpoint_by_path("/todos/{id}").unwrap();
        assert_eq!(graph.operations(item).len(), 2);
    }

    #[test]
    fn invalid_fixtures_fail_to_load() {
        assert!(matches!(
            load_fixture("not-json.json"),
            Err(TestError::Graph(GraphError::Json(_)))
        ));
        assert!(matches!(
            load_fixture("does-not-exist.json"),
            Err(TestError::FixtureNotFound(_))
        ));
    }

    #[test]
    fn written_models_round_trip_through_files() {
        let model = ModelBuilder::web_api("Files").endpoint("/f", &["get"]).build();
        let (_dir, path) = write_model(&model).unwrap();
        let graph = ApiGraph::from_path(&path).unwrap();
        assert_eq!(graph.endpoints().len(), 1);
    }
}
