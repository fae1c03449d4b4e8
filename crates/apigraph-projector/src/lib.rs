//! Typed projections of AMF API graph nodes.
//!
//! A [`Projector`] reads a loaded [`apigraph_graph::ApiGraph`] and renders
//! nodes as plain, serializable structures: APIs and their endpoints,
//! operations, messages and servers; shapes of every kind; security
//! schemes; data nodes; source maps. Absent data is left out of the
//! projection; projecting never fails.

#![recursion_limit = "256"]

pub mod model;
pub mod project;
pub mod projector;
pub mod shapes;

mod api;
mod data;
mod examples;
mod security;

pub use model::*;
pub use project::{NodeKind, Projection};
pub use projector::Projector;
pub use shapes::ShapeOptions;
