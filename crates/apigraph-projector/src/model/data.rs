use std::collections::BTreeMap;

use serde::Serialize;

use super::ApiDomainProperty;

/// Fields shared by every data node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDataNode {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An object data node. Properties are keyed by their local name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiObjectNode {
    #[serde(flatten)]
    pub node: ApiDataNode,
    pub properties: BTreeMap<String, ApiDataNodeUnion>,
}

/// A scalar data node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiScalarNode {
    #[serde(flatten)]
    pub node: ApiDataNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

/// An array data node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiArrayNode {
    #[serde(flatten)]
    pub node: ApiDataNode,
    pub members: Vec<ApiDataNodeUnion>,
}

/// Any data node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiDataNodeUnion {
    Object(ApiObjectNode),
    Scalar(ApiScalarNode),
    Array(ApiArrayNode),
}

impl ApiDataNodeUnion {
    /// Fields shared by every variant.
    pub fn node(&self) -> &ApiDataNode {
        match self {
            Self::Object(n) => &n.node,
            Self::Scalar(n) => &n.node,
            Self::Array(n) => &n.node,
        }
    }

    /// The value of a scalar node.
    pub fn as_scalar_value(&self) -> Option<&str> {
        match self {
            Self::Scalar(n) => n.value.as_deref(),
            _ => None,
        }
    }
}
