//! The loaded API graph and its load boundary.

use std::path::Path;

use serde_json::Value;

use apigraph_telemetry::{log_model_cleared, log_model_expanded, log_model_loaded};

use crate::error::GraphError;
use crate::expander::{ExpandOptions, FlattenedExpander, GraphExpander};
use crate::keys::KeyResolver;
use crate::node::{node_id, unwrap_root, Node, CONTEXT};
use crate::resolver::ResolutionTable;

/// Identifier AMF gives the root node when the model carries no context.
pub const DEFAULT_ROOT_ID: &str = "amf://id";

/// Receives the new document every time a model is loaded or cleared.
pub trait ModelObserver: Send + Sync {
    /// Called after the model has been replaced. `document` is `Null` when
    /// the model was cleared.
    fn model_changed(&self, document: &Value);
}

/// An API graph document loaded in memory.
///
/// Owns the expanded document plus everything scoped to its lifetime: the
/// key cache and the resolution side table. Both are discarded wholesale
/// whenever a new model is loaded. The document itself is never mutated
/// after loading.
pub struct ApiGraph {
    document: Value,
    keys: KeyResolver,
    pub(crate) resolutions: ResolutionTable,
    expander: Box<dyn GraphExpander>,
    observers: Vec<Box<dyn ModelObserver>>,
}

impl Default for ApiGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ApiGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiGraph")
            .field("document_id", &self.document().and_then(node_id))
            .field("cached_keys", &self.keys.cached_len())
            .field("resolved", &self.resolutions.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ApiGraph {
    /// An empty graph using the flattened JSON-LD expander.
    pub fn new() -> Self {
        Self::with_expander(FlattenedExpander)
    }

    /// An empty graph using a custom expander.
    pub fn with_expander(expander: impl GraphExpander + 'static) -> Self {
        Self {
            document: Value::Null,
            keys: KeyResolver::new(),
            resolutions: ResolutionTable::default(),
            expander: Box::new(expander),
            observers: Vec::new(),
        }
    }

    /// Load a model into a new graph.
    pub fn from_value(model: Value) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        graph.load(model)?;
        Ok(graph)
    }

    /// Parse and load a JSON model.
    pub fn from_json_str(input: &str) -> Result<Self, GraphError> {
        let model: Value = serde_json::from_str(input)?;
        Self::from_value(model)
    }

    /// Read, parse and load a JSON model file.
    pub fn from_path(path: &Path) -> Result<Self, GraphError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Register a change hook.
    pub fn subscribe(&mut self, observer: impl ModelObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replace the loaded model.
    ///
    /// Models in expanded form are adopted as-is; anything else goes
    /// through the expander first. `Null` clears the graph. Either way the
    /// key cache and resolution table are reset and observers notified.
    pub fn load(&mut self, model: Value) -> Result<(), GraphError> {
        if model.is_null() {
            self.replace(Value::Null);
            log_model_cleared!("model cleared");
            return Ok(());
        }

        let document = if self.expander.is_expanded_form(&model) {
            model
        } else {
            let options = expand_options_for(&model);
            let expanded = self.expander.expand(model, &options)?;
            log_model_expanded!(root_id = ?options.root_id, "expanded flattened model");
            expanded
        };

        if unwrap_root(&document).is_none() {
            return Err(GraphError::InvalidModel(
                "document root must be an object or a one-element array of objects".into(),
            ));
        }

        self.replace(document);
        log_model_loaded!(
            document_id = self.document().and_then(node_id).unwrap_or_default(),
            has_context = !self.keys.is_empty(),
            "model loaded"
        );
        Ok(())
    }

    fn replace(&mut self, document: Value) {
        self.keys = KeyResolver::from_document(&document);
        self.resolutions.clear();
        self.document = document;
        for observer in &self.observers {
            observer.model_changed(&self.document);
        }
    }

    /// The raw loaded value, possibly a one-element array.
    pub fn raw(&self) -> &Value {
        &self.document
    }

    /// The document root node.
    pub fn document(&self) -> Option<&Node> {
        unwrap_root(&self.document)
    }

    /// Whether a model is loaded.
    pub fn is_loaded(&self) -> bool {
        self.document().is_some()
    }

    /// The key resolver of the loaded document.
    pub fn keys(&self) -> &KeyResolver {
        &self.keys
    }

    /// Compact a vocabulary IRI against the loaded document's context.
    pub fn key(&self, iri: &str) -> String {
        self.keys.resolve(iri)
    }

    /// Compact a vocabulary IRI, optionally against an explicit context
    /// instead of the loaded document's.
    pub fn resolve_key(&self, iri: &str, context: Option<&KeyResolver>) -> String {
        context.unwrap_or(&self.keys).resolve(iri)
    }
}

/// Options used for models that need expansion.
///
/// Without a top-level context the root cannot be recognized by type, so
/// the AMF default root id is requested explicitly.
fn expand_options_for(model: &Value) -> ExpandOptions {
    let options = ExpandOptions::default();
    let has_context = unwrap_root(model).is_some_and(|root| root.contains_key(CONTEXT));
    if has_context {
        options
    } else {
        options.with_root_id(DEFAULT_ROOT_ID)
    }
}
