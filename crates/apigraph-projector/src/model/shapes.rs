use serde::Serialize;

use super::{is_false, ApiDataNodeUnion, ApiDocumentation, ApiDomainProperty, ApiExample};

/// Fields shared by every shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiShape {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value_str: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ApiDataNodeUnion>,
    /// Enumerated values from an `in` restriction.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<ApiDataNodeUnion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inherits: Vec<ApiShapeUnion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub or: Vec<ApiShapeUnion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub and: Vec<ApiShapeUnion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub xone: Vec<ApiShapeUnion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<ApiShapeUnion>>,
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub read_only: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub write_only: bool,
    /// Label of the link this shape was reached through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_label: Option<String>,
}

/// Any shape: the common base of concrete shapes and the generic fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAnyShape {
    #[serde(flatten)]
    pub shape: ApiShape,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ApiExample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<ApiDocumentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml_serialization: Option<ApiXmlSerializer>,
}

/// XML serialization hints of a shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiXmlSerializer {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// Scalar shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiScalarShape {
    #[serde(flatten)]
    pub any: ApiAnyShape,
    /// Datatype IRI, compacted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
}

/// Node (object) shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNodeShape {
    #[serde(flatten)]
    pub any: ApiAnyShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator_value: Option<String>,
    pub properties: Vec<ApiPropertyShape>,
}

/// A property of a node shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPropertyShape {
    #[serde(flatten)]
    pub shape: ApiShape,
    /// Property path IRI, compacted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Box<ApiShapeUnion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_name: Option<String>,
}

/// Union shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUnionShape {
    #[serde(flatten)]
    pub any: ApiAnyShape,
    pub any_of: Vec<ApiShapeUnion>,
}

/// File shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFileShape {
    #[serde(flatten)]
    pub any: ApiAnyShape,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
}

/// Schema shape carrying a raw schema document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSchemaShape {
    #[serde(flatten)]
    pub any: ApiAnyShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// Fields shared by array and tuple shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDataArrangeShape {
    #[serde(flatten)]
    pub any: ApiAnyShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
}

/// Array shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiArrayShape {
    #[serde(flatten)]
    pub arrange: ApiDataArrangeShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ApiShapeUnion>>,
}

/// Tuple shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTupleShape {
    #[serde(flatten)]
    pub arrange: ApiDataArrangeShape,
    pub items: Vec<ApiShapeUnion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closure_items: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_items: Option<Box<ApiShapeUnion>>,
}

/// Recursive shape: closes over a shape already being rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecursiveShape {
    #[serde(flatten)]
    pub shape: ApiShape,
    /// `@id` of the shape this one recurses into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_point: Option<String>,
}

/// Shape kinds, in projection dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Scalar,
    Node,
    Union,
    File,
    Schema,
    Tuple,
    Array,
    Recursive,
    Any,
}

/// Any projected shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiShapeUnion {
    Scalar(ApiScalarShape),
    Node(ApiNodeShape),
    Union(ApiUnionShape),
    File(ApiFileShape),
    Schema(ApiSchemaShape),
    Tuple(ApiTupleShape),
    Array(ApiArrayShape),
    Recursive(ApiRecursiveShape),
    Any(ApiAnyShape),
}

impl ApiShapeUnion {
    /// Which variant this is.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Scalar(_) => ShapeKind::Scalar,
            Self::Node(_) => ShapeKind::Node,
            Self::Union(_) => ShapeKind::Union,
            Self::File(_) => ShapeKind::File,
            Self::Schema(_) => ShapeKind::Schema,
            Self::Tuple(_) => ShapeKind::Tuple,
            Self::Array(_) => ShapeKind::Array,
            Self::Recursive(_) => ShapeKind::Recursive,
            Self::Any(_) => ShapeKind::Any,
        }
    }

    /// Fields shared by every variant.
    pub fn shape(&self) -> &ApiShape {
        match self {
            Self::Scalar(s) => &s.any.shape,
            Self::Node(s) => &s.any.shape,
            Self::Union(s) => &s.any.shape,
            Self::File(s) => &s.any.shape,
            Self::Schema(s) => &s.any.shape,
            Self::Tuple(s) => &s.arrange.any.shape,
            Self::Array(s) => &s.arrange.any.shape,
            Self::Recursive(s) => &s.shape,
            Self::Any(s) => &s.shape,
        }
    }

    /// The any-shape fields, for every variant but recursive shapes.
    pub fn any(&self) -> Option<&ApiAnyShape> {
        match self {
            Self::Scalar(s) => Some(&s.any),
            Self::Node(s) => Some(&s.any),
            Self::Union(s) => Some(&s.any),
            Self::File(s) => Some(&s.any),
            Self::Schema(s) => Some(&s.any),
            Self::Tuple(s) => Some(&s.arrange.any),
            Self::Array(s) => Some(&s.arrange.any),
            Self::Recursive(_) => None,
            Self::Any(s) => Some(s),
        }
    }

    /// The shape's `@id`.
    pub fn id(&self) -> &str {
        &self.shape().element.id
    }
}
