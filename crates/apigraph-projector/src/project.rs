//! Generic projection of any node.

use serde::Serialize;

use apigraph_graph::node::Node;
use apigraph_vocab::{api_contract, core, data, document, security};

use crate::model::{
    ApiAsync, ApiDataNodeUnion, ApiDocumentation, ApiEndPoint, ApiExample,
    ApiOperation, ApiParameter, ApiParametrizedSecurityScheme, ApiPayload, ApiRequest,
    ApiResponse, ApiSecurityRequirement, ApiSecurityScheme, ApiSecuritySettingsUnion, ApiServer,
    ApiShapeUnion, ApiWeb,
};
use crate::projector::Projector;
use crate::shapes::ShapeOptions;

/// Node kinds the generic projection recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    WebApi,
    AsyncApi,
    EndPoint,
    Operation,
    Request,
    Response,
    Payload,
    Parameter,
    Server,
    Example,
    Documentation,
    SecurityRequirement,
    ParametrizedSecurityScheme,
    SecurityScheme,
    SecuritySettings,
    DataNode,
    Shape,
}

impl NodeKind {
    /// Parse a kind name as used on the command line (`endpoint`,
    /// `security-scheme`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "web-api" | "webapi" | "api" => Some(Self::WebApi),
            "async-api" | "asyncapi" => Some(Self::AsyncApi),
            "endpoint" | "end-point" => Some(Self::EndPoint),
            "operation" => Some(Self::Operation),
            "request" => Some(Self::Request),
            "response" => Some(Self::Response),
            "payload" => Some(Self::Payload),
            "parameter" => Some(Self::Parameter),
            "server" => Some(Self::Server),
            "example" => Some(Self::Example),
            "documentation" => Some(Self::Documentation),
            "security-requirement" => Some(Self::SecurityRequirement),
            "parametrized-security-scheme" => Some(Self::ParametrizedSecurityScheme),
            "security-scheme" => Some(Self::SecurityScheme),
            "security-settings" | "settings" => Some(Self::SecuritySettings),
            "data" | "data-node" => Some(Self::DataNode),
            "shape" => Some(Self::Shape),
            _ => None,
        }
    }
}

/// Type IRIs recognizing each kind, checked in this order.
const KIND_TYPES: &[(NodeKind, &str)] = &[
    (NodeKind::WebApi, api_contract::WEB_API),
    (NodeKind::AsyncApi, api_contract::ASYNC_API),
    (NodeKind::WebApi, api_contract::API),
    (NodeKind::EndPoint, api_contract::END_POINT),
    (NodeKind::Operation, api_contract::OPERATION),
    (NodeKind::Request, api_contract::REQUEST),
    (NodeKind::Response, api_contract::RESPONSE),
    (NodeKind::Payload, api_contract::PAYLOAD),
    (NodeKind::Parameter, api_contract::PARAMETER),
    (NodeKind::Server, api_contract::SERVER),
    (NodeKind::Example, api_contract::EXAMPLE),
    (NodeKind::Example, document::EXAMPLE),
    (NodeKind::Documentation, core::CREATIVE_WORK),
    (NodeKind::SecurityRequirement, security::SECURITY_REQUIREMENT),
    (NodeKind::ParametrizedSecurityScheme, security::PARAMETRIZED_SECURITY_SCHEME),
    (NodeKind::SecurityScheme, security::SECURITY_SCHEME),
    (NodeKind::SecuritySettings, security::SETTINGS),
    (NodeKind::SecuritySettings, security::OAUTH1_SETTINGS),
    (NodeKind::SecuritySettings, security::OAUTH2_SETTINGS),
    (NodeKind::SecuritySettings, security::API_KEY_SETTINGS),
    (NodeKind::SecuritySettings, security::HTTP_SETTINGS),
    (NodeKind::SecuritySettings, security::OPEN_ID_CONNECT_SETTINGS),
    (NodeKind::DataNode, data::OBJECT),
    (NodeKind::DataNode, data::SCALAR),
    (NodeKind::DataNode, data::ARRAY),
];

/// A projection of any node kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Projection {
    Web(ApiWeb),
    Async(ApiAsync),
    EndPoint(ApiEndPoint),
    Operation(ApiOperation),
    Request(ApiRequest),
    Response(ApiResponse),
    Payload(ApiPayload),
    Parameter(ApiParameter),
    Server(ApiServer),
    Example(ApiExample),
    Documentation(ApiDocumentation),
    SecurityRequirement(ApiSecurityRequirement),
    ParametrizedSecurityScheme(ApiParametrizedSecurityScheme),
    SecurityScheme(ApiSecurityScheme),
    SecuritySettings(ApiSecuritySettingsUnion),
    DataNode(ApiDataNodeUnion),
    Shape(ApiShapeUnion),
}

impl Projector<'_> {
    /// Classify a node by its `@type`. `None` when nothing matches.
    pub fn node_kind(&self, node: &Node) -> Option<NodeKind> {
        let graph = self.graph();
        KIND_TYPES
            .iter()
            .find(|(_, type_iri)| graph.has_type(node, type_iri))
            .map(|(kind, _)| *kind)
            .or_else(|| self.is_shape(node).then_some(NodeKind::Shape))
    }

    /// Project any node.
    ///
    /// `hint` overrides classification. Nodes that match no kind are
    /// projected as a generic any shape.
    pub fn project(&self, node: &Node, hint: Option<NodeKind>) -> Projection {
        let resolved = self.resolved(node);
        let node = &resolved;
        let kind = hint
            .or_else(|| self.node_kind(node))
            .unwrap_or(NodeKind::Shape);

        match kind {
            NodeKind::WebApi => Projection::Web(ApiWeb {
                api: self.api_base(node),
            }),
            NodeKind::AsyncApi => Projection::Async(ApiAsync {
                api: self.api_base(node),
            }),
            NodeKind::EndPoint => Projection::EndPoint(self.endpoint_resolved(node)),
            NodeKind::Operation => Projection::Operation(self.operation_resolved(node)),
            NodeKind::Request => Projection::Request(self.request_resolved(node)),
            NodeKind::Response => Projection::Response(self.response_resolved(node)),
            NodeKind::Payload => Projection::Payload(self.payload_resolved(node)),
            NodeKind::Parameter => Projection::Parameter(self.parameter_resolved(node)),
            NodeKind::Server => Projection::Server(self.server_resolved(node)),
            NodeKind::Example => Projection::Example(self.example_resolved(node)),
            NodeKind::Documentation => {
                Projection::Documentation(self.documentation_resolved(node))
            }
            NodeKind::SecurityRequirement => {
                Projection::SecurityRequirement(self.security_requirement_resolved(node))
            }
            NodeKind::ParametrizedSecurityScheme => {
                Projection::ParametrizedSecurityScheme(self.parametrized_scheme(node))
            }
            NodeKind::SecurityScheme => {
                Projection::SecurityScheme(self.security_scheme_resolved(node))
            }
            NodeKind::SecuritySettings => {
                Projection::SecuritySettings(self.settings_resolved(node))
            }
            NodeKind::DataNode => Projection::DataNode(self.data_node_resolved(node)),
            NodeKind::Shape => {
                Projection::Shape(self.shape_resolved(node, &ShapeOptions::default()))
            }
        }
    }

    /// Project a node by `@id`, searched across the whole loaded document.
    pub fn project_id(&self, id: &str, hint: Option<NodeKind>) -> Option<Projection> {
        let node = self.graph().find_by_id(id)?;
        Some(self.project(node, hint))
    }
}
