//! Projection types.
//!
//! Plain data structures, serialized with camelCase field names. Absent
//! optional fields and empty lists are left out of the output.

pub mod api;
pub mod data;
pub mod security;
pub mod shapes;
pub mod source_maps;

pub use api::*;
pub use data::*;
pub use security::*;
pub use shapes::*;
pub use source_maps::*;

use serde::Serialize;

/// Fields every projected model element carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDomainProperty {
    /// The node's `@id`.
    pub id: String,
    /// The node's `@type` list.
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_domain_properties: Vec<ApiCustomDomainProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_maps: Option<ApiDocumentSourceMaps>,
}

/// A custom domain property (annotation / extension) applied to a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCustomDomainProperty {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<ApiDataNodeUnion>,
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
