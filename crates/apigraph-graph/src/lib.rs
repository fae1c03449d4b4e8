//! In-memory AMF API graph.
//!
//! Loads a JSON-LD document produced by the AMF parser (expanding flattened
//! documents first), compacts vocabulary IRIs against the document's
//! `@context`, answers typed queries about APIs, endpoints, operations and
//! servers, and resolves `link-target`/`reference-id` indirections without
//! mutating the loaded document.

pub mod error;
pub mod expander;
pub mod graph;
pub mod keys;
pub mod navigate;
pub mod node;
pub mod query;
pub mod resolver;

pub use error::GraphError;
pub use expander::{ExpandOptions, FlattenedExpander, GraphExpander};
pub use graph::{ApiGraph, ModelObserver, DEFAULT_ROOT_ID};
pub use keys::KeyResolver;
pub use navigate::UriOptions;
pub use node::Node;
pub use resolver::ResolutionTable;
