//! APIs, endpoints, operations and their messages.

use apigraph_graph::node::{node_id, Node};
use apigraph_vocab::{api_contract, core, shapes};

use crate::model::{
    ApiAsync, ApiBase, ApiCallback, ApiDocumentation, ApiEncoding, ApiEndPoint,
    ApiIriTemplateMapping, ApiLicense, ApiOperation, ApiOrganization, ApiParameter, ApiPayload,
    ApiRequest, ApiResponse, ApiServer, ApiSummary, ApiTag, ApiTemplatedLink, ApiWeb,
};
use crate::projector::Projector;
use crate::shapes::ShapeOptions;

impl Projector<'_> {
    /// Summary of the loaded document's API.
    pub fn api_summary(&self) -> Option<ApiSummary> {
        let api = self.graph().api()?;
        Some(self.summary(&self.resolved(api)))
    }

    /// The loaded document's API, when it is a WebAPI.
    pub fn web_api(&self) -> Option<ApiWeb> {
        let api = self.graph().web_api()?;
        Some(ApiWeb {
            api: self.api_base(&self.resolved(api)),
        })
    }

    /// The loaded document's API, when it is an AsyncAPI.
    pub fn async_api(&self) -> Option<ApiAsync> {
        let api = self.graph().async_api()?;
        Some(ApiAsync {
            api: self.api_base(&self.resolved(api)),
        })
    }

    pub(crate) fn summary(&self, api: &Node) -> ApiSummary {
        let graph = self.graph();
        ApiSummary {
            element: self.element(api),
            name: graph.value_string(api, core::NAME),
            description: graph.value_string(api, core::DESCRIPTION),
            version: graph.value_string(api, core::VERSION),
            terms_of_service: graph.value_string(api, core::TERMS_OF_SERVICE),
            schemes: graph.value_strings(api, api_contract::SCHEME),
            accepts: graph.value_strings(api, api_contract::ACCEPTS),
            content_type: graph.value_strings(api, api_contract::CONTENT_TYPE),
            provider: graph
                .property_node(api, core::PROVIDER)
                .map(|org| self.organization(org)),
            license: graph
                .property_node(api, core::LICENSE)
                .map(|license| self.license(license)),
            documentations: graph
                .property_nodes(api, core::DOCUMENTATION)
                .into_iter()
                .map(|doc| self.documentation_resolved(doc))
                .collect(),
            tags: self.tags(api),
        }
    }

    pub(crate) fn api_base(&self, api: &Node) -> ApiBase {
        let graph = self.graph();
        ApiBase {
            summary: self.summary(api),
            end_points: graph
                .property_nodes(api, api_contract::ENDPOINT)
                .into_iter()
                .map(|endpoint| self.endpoint_resolved(endpoint))
                .collect(),
            servers: self.servers_of(api),
            security: self.security_requirements(api),
        }
    }

    fn organization(&self, node: &Node) -> ApiOrganization {
        let graph = self.graph();
        ApiOrganization {
            element: self.element(node),
            url: self.url(node),
            name: graph.value_string(node, core::NAME),
            email: graph.value_string(node, core::EMAIL),
        }
    }

    fn license(&self, node: &Node) -> ApiLicense {
        ApiLicense {
            element: self.element(node),
            url: self.url(node),
            name: self.graph().value_string(node, core::NAME),
        }
    }

    /// `core:url` is written either as a literal or as an IRI reference.
    fn url(&self, node: &Node) -> Option<String> {
        let graph = self.graph();
        graph
            .value_string(node, core::URL)
            .or_else(|| graph.link_value(node, core::URL).map(String::from))
    }

    /// Project external documentation.
    pub fn documentation(&self, node: &Node) -> ApiDocumentation {
        self.documentation_resolved(&self.resolved(node))
    }

    pub(crate) fn documentation_resolved(&self, node: &Node) -> ApiDocumentation {
        let graph = self.graph();
        ApiDocumentation {
            element: self.element(node),
            url: self.url(node),
            description: graph.value_string(node, core::DESCRIPTION),
            title: graph.value_string(node, core::TITLE),
        }
    }

    fn tags(&self, node: &Node) -> Vec<ApiTag> {
        let graph = self.graph();
        graph
            .property_nodes(node, api_contract::TAG_PROP)
            .into_iter()
            .map(|tag| ApiTag {
                element: self.element(tag),
                name: graph.value_string(tag, core::NAME).unwrap_or_default(),
                description: graph.value_string(tag, core::DESCRIPTION),
                documentation: graph
                    .property_node(tag, core::DOCUMENTATION)
                    .map(|doc| self.documentation_resolved(doc)),
            })
            .collect()
    }

    /// Project a server.
    pub fn server(&self, node: &Node) -> ApiServer {
        self.server_resolved(&self.resolved(node))
    }

    pub(crate) fn server_resolved(&self, node: &Node) -> ApiServer {
        let graph = self.graph();
        ApiServer {
            element: self.element(node),
            url: graph.base_uri(node).unwrap_or_default(),
            description: graph.value_string(node, core::DESCRIPTION),
            variables: self.parameters(node, api_contract::VARIABLE),
            protocol: graph.value_string(node, api_contract::PROTOCOL),
            protocol_version: graph.value_string(node, api_contract::PROTOCOL_VERSION),
            security: self.security_requirements(node),
        }
    }

    fn servers_of(&self, node: &Node) -> Vec<ApiServer> {
        self.graph()
            .property_nodes(node, api_contract::SERVER_PROP)
            .into_iter()
            .map(|server| self.server_resolved(server))
            .collect()
    }

    /// Project an endpoint.
    pub fn endpoint(&self, node: &Node) -> ApiEndPoint {
        self.endpoint_resolved(&self.resolved(node))
    }

    pub(crate) fn endpoint_resolved(&self, node: &Node) -> ApiEndPoint {
        let graph = self.graph();
        ApiEndPoint {
            element: self.element(node),
            path: graph
                .value_string(node, api_contract::PATH)
                .unwrap_or_default(),
            name: graph.value_string(node, core::NAME),
            description: graph.value_string(node, core::DESCRIPTION),
            summary: graph.value_string(node, core::SUMMARY),
            operations: graph
                .operations(node)
                .into_iter()
                .map(|operation| self.operation_resolved(operation))
                .collect(),
            parameters: self.parameters(node, api_contract::PARAMETER_PROP),
            payloads: self.payloads(node),
            servers: self.servers_of(node),
            security: self.security_requirements(node),
        }
    }

    /// Project an operation.
    pub fn operation(&self, node: &Node) -> ApiOperation {
        self.operation_resolved(&self.resolved(node))
    }

    pub(crate) fn operation_resolved(&self, node: &Node) -> ApiOperation {
        let graph = self.graph();
        ApiOperation {
            element: self.element(node),
            method: graph
                .value_string(node, api_contract::METHOD)
                .unwrap_or_default(),
            name: graph.value_string(node, core::NAME),
            description: graph.value_string(node, core::DESCRIPTION),
            summary: graph.value_string(node, core::SUMMARY),
            operation_id: graph.value_string(node, api_contract::OPERATION_ID),
            deprecated: graph
                .value_bool(node, api_contract::DEPRECATED)
                .unwrap_or(false),
            schemes: graph.value_strings(node, api_contract::SCHEME),
            accepts: graph.value_strings(node, api_contract::ACCEPTS),
            content_type: graph.value_strings(node, api_contract::CONTENT_TYPE),
            request: graph
                .expects(node)
                .map(|request| self.request_resolved(request)),
            responses: graph
                .returns(node)
                .into_iter()
                .map(|response| self.response_resolved(response))
                .collect(),
            security: self.security_requirements(node),
            callbacks: graph
                .property_nodes(node, api_contract::CALLBACK_PROP)
                .into_iter()
                .map(|callback| self.callback(callback))
                .collect(),
            servers: self.servers_of(node),
            tags: self.tags(node),
        }
    }

    /// Project a request.
    pub fn request(&self, node: &Node) -> ApiRequest {
        self.request_resolved(&self.resolved(node))
    }

    pub(crate) fn request_resolved(&self, node: &Node) -> ApiRequest {
        let graph = self.graph();
        ApiRequest {
            element: self.element(node),
            description: graph.value_string(node, core::DESCRIPTION),
            required: graph
                .value_bool(node, api_contract::REQUIRED)
                .unwrap_or(false),
            query_parameters: self.parameters(node, api_contract::PARAMETER_PROP),
            headers: self.parameters(node, api_contract::HEADER),
            uri_parameters: self.parameters(node, api_contract::URI_PARAMETER),
            cookie_parameters: self.parameters(node, api_contract::COOKIE_PARAMETER),
            payloads: self.payloads(node),
            query_string: self.shape_of(node, api_contract::QUERY_STRING, &ShapeOptions::default()),
        }
    }

    /// Project a response.
    pub fn response(&self, node: &Node) -> ApiResponse {
        self.response_resolved(&self.resolved(node))
    }

    pub(crate) fn response_resolved(&self, node: &Node) -> ApiResponse {
        let graph = self.graph();
        ApiResponse {
            element: self.element(node),
            name: graph.value_string(node, core::NAME),
            description: graph.value_string(node, core::DESCRIPTION),
            status_code: graph.value_string(node, api_contract::STATUS_CODE),
            headers: self.parameters(node, api_contract::HEADER),
            payloads: self.payloads(node),
            examples: graph
                .property_nodes(node, api_contract::EXAMPLES)
                .into_iter()
                .map(|example| self.example_resolved(example))
                .collect(),
            links: graph
                .property_nodes(node, api_contract::LINK)
                .into_iter()
                .map(|link| self.templated_link(link))
                .collect(),
        }
    }

    /// Project a payload. Its schema keeps only the examples tracked to this
    /// payload, plus untracked ones.
    pub fn payload(&self, node: &Node) -> ApiPayload {
        self.payload_resolved(&self.resolved(node))
    }

    pub(crate) fn payload_resolved(&self, node: &Node) -> ApiPayload {
        let graph = self.graph();
        let options = ShapeOptions {
            tracked_id: node_id(node).map(String::from),
        };
        ApiPayload {
            element: self.element(node),
            name: graph.value_string(node, core::NAME),
            media_type: graph.value_string(node, core::MEDIA_TYPE),
            schema: self.shape_of(node, shapes::SCHEMA, &options),
            examples: graph
                .property_nodes(node, api_contract::EXAMPLES)
                .into_iter()
                .map(|example| self.example_resolved(example))
                .collect(),
            encoding: graph
                .property_nodes(node, api_contract::ENCODING_PROP)
                .into_iter()
                .map(|encoding| self.encoding(encoding))
                .collect(),
        }
    }

    fn payloads(&self, node: &Node) -> Vec<ApiPayload> {
        self.graph()
            .property_nodes(node, api_contract::PAYLOAD_PROP)
            .into_iter()
            .map(|payload| self.payload_resolved(payload))
            .collect()
    }

    /// Project a parameter.
    pub fn parameter(&self, node: &Node) -> ApiParameter {
        self.parameter_resolved(&self.resolved(node))
    }

    pub(crate) fn parameter_resolved(&self, node: &Node) -> ApiParameter {
        let graph = self.graph();
        ApiParameter {
            element: self.element(node),
            name: graph.value_string(node, core::NAME),
            param_name: graph.value_string(node, api_contract::PARAM_NAME),
            description: graph.value_string(node, core::DESCRIPTION),
            required: graph
                .value_bool(node, api_contract::REQUIRED)
                .unwrap_or(false),
            allow_empty_value: graph
                .value_bool(node, api_contract::ALLOW_EMPTY_VALUE)
                .unwrap_or(false),
            deprecated: graph
                .value_bool(node, api_contract::DEPRECATED)
                .unwrap_or(false),
            explode: graph.value_bool(node, api_contract::EXPLODE),
            allow_reserved: graph.value_bool(node, api_contract::ALLOW_RESERVED),
            style: graph.value_string(node, api_contract::STYLE),
            binding: graph.value_string(node, api_contract::BINDING),
            schema: self.shape_of(node, shapes::SCHEMA, &ShapeOptions::default()),
            payloads: self.payloads(node),
            examples: graph
                .property_nodes(node, api_contract::EXAMPLES)
                .into_iter()
                .map(|example| self.example_resolved(example))
                .collect(),
        }
    }

    pub(crate) fn parameters(&self, node: &Node, iri: &str) -> Vec<ApiParameter> {
        self.graph()
            .property_nodes(node, iri)
            .into_iter()
            .map(|parameter| self.parameter_resolved(parameter))
            .collect()
    }

    fn templated_link(&self, node: &Node) -> ApiTemplatedLink {
        let graph = self.graph();
        ApiTemplatedLink {
            element: self.element(node),
            name: graph.value_string(node, core::NAME),
            description: graph.value_string(node, core::DESCRIPTION),
            template: graph.value_string(node, api_contract::TEMPLATE),
            operation_id: graph.value_string(node, api_contract::OPERATION_ID),
            request_body: graph.value_string(node, api_contract::REQUEST_BODY),
            mapping: graph
                .property_nodes(node, api_contract::MAPPING)
                .into_iter()
                .map(|mapping| ApiIriTemplateMapping {
                    element: self.element(mapping),
                    template_variable: graph
                        .value_string(mapping, api_contract::TEMPLATE_VARIABLE),
                    link_expression: graph.value_string(mapping, api_contract::LINK_EXPRESSION),
                })
                .collect(),
            server: graph
                .property_node(node, api_contract::SERVER_PROP)
                .map(|server| self.server_resolved(server)),
        }
    }

    fn callback(&self, node: &Node) -> ApiCallback {
        let graph = self.graph();
        ApiCallback {
            element: self.element(node),
            name: graph.value_string(node, core::NAME),
            expression: graph.value_string(node, api_contract::EXPRESSION),
            endpoint: graph
                .property_node(node, api_contract::ENDPOINT)
                .map(|endpoint| Box::new(self.endpoint_resolved(endpoint))),
        }
    }

    fn encoding(&self, node: &Node) -> ApiEncoding {
        let graph = self.graph();
        ApiEncoding {
            element: self.element(node),
            property_name: graph.value_string(node, api_contract::PROPERTY_NAME),
            content_type: graph.value_string(node, api_contract::CONTENT_TYPE),
            headers: self.parameters(node, api_contract::HEADERS),
            style: graph.value_string(node, api_contract::STYLE),
            explode: graph.value_bool(node, api_contract::EXPLODE),
            allow_reserved: graph.value_bool(node, api_contract::ALLOW_RESERVED),
        }
    }
}
