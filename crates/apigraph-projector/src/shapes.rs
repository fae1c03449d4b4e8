//! Shape projection.
//!
//! Shapes are classified by `@type` membership, checked in a fixed order:
//! scalar, node, union, file, schema, tuple, array, recursive. Tuples come
//! before arrays because some dialects also type a tuple as an array.
//! Anything else is projected as a generic any shape.

use apigraph_graph::node::{node_types, Node};
use apigraph_telemetry::log_projection_fallback;
use apigraph_vocab::{api_contract, core, document, shacl, shapes};

use crate::model::{
    ApiAnyShape, ApiArrayShape, ApiDataArrangeShape, ApiFileShape, ApiNodeShape,
    ApiPropertyShape, ApiRecursiveShape, ApiScalarShape, ApiSchemaShape, ApiShape,
    ApiShapeUnion, ApiTupleShape, ApiUnionShape, ApiXmlSerializer, ShapeKind,
};
use crate::projector::Projector;

/// Options for shape projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeOptions {
    /// Keep only the examples tracked to this node (usually a payload),
    /// plus untracked ones. Without it only untracked examples are kept.
    pub tracked_id: Option<String>,
}

impl ShapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter examples for the node with `id`.
    pub fn tracked_to(id: impl Into<String>) -> Self {
        Self {
            tracked_id: Some(id.into()),
        }
    }
}

const DISPATCH: [(ShapeKind, &str); 8] = [
    (ShapeKind::Scalar, shapes::SCALAR_SHAPE),
    (ShapeKind::Node, shacl::NODE_SHAPE),
    (ShapeKind::Union, shapes::UNION_SHAPE),
    (ShapeKind::File, shapes::FILE_SHAPE),
    (ShapeKind::Schema, shapes::SCHEMA_SHAPE),
    (ShapeKind::Tuple, shapes::TUPLE_SHAPE),
    (ShapeKind::Array, shapes::ARRAY_SHAPE),
    (ShapeKind::Recursive, shapes::RECURSIVE_SHAPE),
];

impl Projector<'_> {
    /// Project a shape. The shape is resolved first.
    pub fn shape(&self, node: &Node, options: &ShapeOptions) -> ApiShapeUnion {
        self.shape_resolved(&self.resolved(node), options)
    }

    /// The projection variant a shape dispatches to.
    pub fn shape_kind(&self, node: &Node) -> ShapeKind {
        let graph = self.graph();
        DISPATCH
            .iter()
            .find(|(_, type_iri)| graph.has_type(node, type_iri))
            .map(|(kind, _)| *kind)
            .or_else(|| graph.has_type(node, shapes::MATRIX_SHAPE).then_some(ShapeKind::Array))
            .unwrap_or(ShapeKind::Any)
    }

    /// Whether the node is typed as any kind of shape.
    pub fn is_shape(&self, node: &Node) -> bool {
        let graph = self.graph();
        self.shape_kind(node) != ShapeKind::Any
            || [shapes::ANY_SHAPE, shapes::SHAPE, shacl::SHAPE, shapes::MATRIX_SHAPE]
                .iter()
                .any(|iri| graph.has_type(node, iri))
    }

    pub(crate) fn shape_resolved(&self, node: &Node, options: &ShapeOptions) -> ApiShapeUnion {
        match self.shape_kind(node) {
            ShapeKind::Scalar => ApiShapeUnion::Scalar(self.scalar_shape(node, options)),
            ShapeKind::Node => ApiShapeUnion::Node(self.node_shape(node, options)),
            ShapeKind::Union => ApiShapeUnion::Union(self.union_shape(node, options)),
            ShapeKind::File => ApiShapeUnion::File(self.file_shape(node, options)),
            ShapeKind::Schema => ApiShapeUnion::Schema(self.schema_shape(node, options)),
            ShapeKind::Tuple => ApiShapeUnion::Tuple(self.tuple_shape(node, options)),
            ShapeKind::Array => ApiShapeUnion::Array(self.array_shape(node, options)),
            ShapeKind::Recursive => ApiShapeUnion::Recursive(self.recursive_shape(node, options)),
            ShapeKind::Any => {
                if !self.graph().has_type(node, shapes::ANY_SHAPE) {
                    log_projection_fallback!(
                        types = ?node_types(node),
                        "projecting untyped shape as any shape"
                    );
                }
                ApiShapeUnion::Any(self.any_shape(node, options))
            }
        }
    }

    pub(crate) fn shape_of(
        &self,
        node: &Node,
        iri: &str,
        options: &ShapeOptions,
    ) -> Option<ApiShapeUnion> {
        self.graph()
            .property_node(node, iri)
            .map(|shape| self.shape_resolved(shape, options))
    }

    fn shapes_of(&self, node: &Node, iri: &str, options: &ShapeOptions) -> Vec<ApiShapeUnion> {
        self.list_nodes(node, iri)
            .into_iter()
            .map(|shape| self.shape_resolved(shape, options))
            .collect()
    }

    fn base_shape(&self, node: &Node, options: &ShapeOptions) -> ApiShape {
        let graph = self.graph();
        ApiShape {
            element: self.element(node),
            name: graph
                .value_string(node, shacl::NAME)
                .or_else(|| graph.value_string(node, core::NAME)),
            display_name: graph.value_string(node, core::DISPLAY_NAME),
            description: graph.value_string(node, core::DESCRIPTION),
            default_value_str: graph.value_string(node, shacl::DEFAULT_VALUE_STR),
            default_value: graph
                .property_node(node, shacl::DEFAULT_VALUE)
                .map(|value| self.data_node_resolved(value)),
            values: self.enum_values(node),
            inherits: self.shapes_of(node, shapes::INHERITS, options),
            or: self.shapes_of(node, shacl::OR, options),
            and: self.shapes_of(node, shacl::AND, options),
            xone: self.shapes_of(node, shacl::XONE, options),
            not: self.shape_of(node, shacl::NOT, options).map(Box::new),
            deprecated: graph.value_bool(node, shapes::DEPRECATED).unwrap_or(false),
            read_only: graph.value_bool(node, shapes::READ_ONLY).unwrap_or(false),
            write_only: graph.value_bool(node, shapes::WRITE_ONLY).unwrap_or(false),
            link_label: graph.value_string(node, document::LINK_LABEL),
        }
    }

    fn any_shape(&self, node: &Node, options: &ShapeOptions) -> ApiAnyShape {
        let graph = self.graph();
        let examples = graph.property_nodes(node, api_contract::EXAMPLES);
        let examples = match &options.tracked_id {
            Some(id) => self.filter_tracked_examples(examples, id),
            None => self.filter_non_tracked_examples(examples),
        };
        ApiAnyShape {
            shape: self.base_shape(node, options),
            examples: examples
                .into_iter()
                .map(|example| self.example_resolved(example))
                .collect(),
            documentation: graph
                .property_node(node, core::DOCUMENTATION)
                .map(|doc| self.documentation_resolved(doc)),
            xml_serialization: graph
                .property_node(node, shapes::XML_SERIALIZATION)
                .map(|xml| self.xml_serializer(xml)),
        }
    }

    fn xml_serializer(&self, node: &Node) -> ApiXmlSerializer {
        let graph = self.graph();
        ApiXmlSerializer {
            element: self.element(node),
            attribute: graph.value_bool(node, shapes::XML_ATTRIBUTE),
            wrapped: graph.value_bool(node, shapes::XML_WRAPPED),
            name: graph.value_string(node, shapes::XML_NAME),
            namespace: graph.value_string(node, shapes::XML_NAMESPACE),
            prefix: graph.value_string(node, shapes::XML_PREFIX),
        }
    }

    fn scalar_shape(&self, node: &Node, options: &ShapeOptions) -> ApiScalarShape {
        let graph = self.graph();
        ApiScalarShape {
            any: self.any_shape(node, options),
            data_type: graph
                .link_value(node, shacl::DATATYPE)
                .map(|iri| graph.key(iri)),
            pattern: graph.value_string(node, shacl::PATTERN),
            min_length: graph.value_i64(node, shacl::MIN_LENGTH),
            max_length: graph.value_i64(node, shacl::MAX_LENGTH),
            minimum: graph.value_f64(node, shacl::MIN_INCLUSIVE),
            maximum: graph.value_f64(node, shacl::MAX_INCLUSIVE),
            exclusive_minimum: graph.value_f64(node, shacl::MIN_EXCLUSIVE),
            exclusive_maximum: graph.value_f64(node, shacl::MAX_EXCLUSIVE),
            format: graph.value_string(node, shapes::FORMAT),
            multiple_of: graph.value_f64(node, shapes::MULTIPLE_OF),
        }
    }

    fn node_shape(&self, node: &Node, options: &ShapeOptions) -> ApiNodeShape {
        let graph = self.graph();
        ApiNodeShape {
            any: self.any_shape(node, options),
            closed: graph.value_bool(node, shacl::CLOSED),
            min_properties: graph.value_i64(node, shapes::MIN_PROPERTIES),
            max_properties: graph.value_i64(node, shapes::MAX_PROPERTIES),
            discriminator: graph.value_string(node, shapes::DISCRIMINATOR),
            discriminator_value: graph.value_string(node, shapes::DISCRIMINATOR_VALUE),
            properties: graph
                .property_nodes(node, shacl::PROPERTY)
                .into_iter()
                .map(|property| self.property_shape(property, options))
                .collect(),
        }
    }

    fn property_shape(&self, node: &Node, options: &ShapeOptions) -> ApiPropertyShape {
        let graph = self.graph();
        ApiPropertyShape {
            shape: self.base_shape(node, options),
            path: graph.link_value(node, shacl::PATH).map(|iri| graph.key(iri)),
            range: self
                .shape_of(node, shapes::RANGE, options)
                .map(Box::new),
            min_count: graph.value_i64(node, shacl::MIN_COUNT),
            max_count: graph.value_i64(node, shacl::MAX_COUNT),
            pattern_name: graph.value_string(node, shapes::PATTERN_NAME),
        }
    }

    fn union_shape(&self, node: &Node, options: &ShapeOptions) -> ApiUnionShape {
        ApiUnionShape {
            any: self.any_shape(node, options),
            any_of: self.shapes_of(node, shapes::ANY_OF, options),
        }
    }

    fn file_shape(&self, node: &Node, options: &ShapeOptions) -> ApiFileShape {
        let graph = self.graph();
        ApiFileShape {
            any: self.any_shape(node, options),
            file_types: graph.value_strings(node, shapes::FILE_TYPE),
            pattern: graph.value_string(node, shacl::PATTERN),
            min_length: graph.value_i64(node, shacl::MIN_LENGTH),
            max_length: graph.value_i64(node, shacl::MAX_LENGTH),
            minimum: graph.value_f64(node, shacl::MIN_INCLUSIVE),
            maximum: graph.value_f64(node, shacl::MAX_INCLUSIVE),
            exclusive_minimum: graph.value_f64(node, shacl::MIN_EXCLUSIVE),
            exclusive_maximum: graph.value_f64(node, shacl::MAX_EXCLUSIVE),
            format: graph.value_string(node, shapes::FORMAT),
            multiple_of: graph.value_f64(node, shapes::MULTIPLE_OF),
        }
    }

    fn schema_shape(&self, node: &Node, options: &ShapeOptions) -> ApiSchemaShape {
        let graph = self.graph();
        ApiSchemaShape {
            any: self.any_shape(node, options),
            media_type: graph.value_string(node, core::MEDIA_TYPE),
            raw: graph
                .value_string(node, document::RAW)
                .or_else(|| graph.value_string(node, shacl::RAW)),
        }
    }

    fn data_arrange(&self, node: &Node, options: &ShapeOptions) -> ApiDataArrangeShape {
        let graph = self.graph();
        ApiDataArrangeShape {
            any: self.any_shape(node, options),
            min_items: graph.value_i64(node, shacl::MIN_COUNT),
            max_items: graph.value_i64(node, shacl::MAX_COUNT),
            unique_items: graph.value_bool(node, shapes::UNIQUE_ITEMS),
        }
    }

    fn array_shape(&self, node: &Node, options: &ShapeOptions) -> ApiArrayShape {
        ApiArrayShape {
            arrange: self.data_arrange(node, options),
            items: self.shape_of(node, shapes::ITEMS, options).map(Box::new),
        }
    }

    fn tuple_shape(&self, node: &Node, options: &ShapeOptions) -> ApiTupleShape {
        ApiTupleShape {
            arrange: self.data_arrange(node, options),
            items: self.shapes_of(node, shapes::ITEMS, options),
            closure_items: self.graph().value_bool(node, shapes::CLOSURE_ITEMS),
            additional_items: self
                .shape_of(node, shapes::ADDITIONAL_ITEMS_SCHEMA, options)
                .map(Box::new),
        }
    }

    fn recursive_shape(&self, node: &Node, options: &ShapeOptions) -> ApiRecursiveShape {
        ApiRecursiveShape {
            shape: self.base_shape(node, options),
            fix_point: self
                .graph()
                .link_value(node, shapes::FIX_POINT)
                .map(String::from),
        }
    }
}
