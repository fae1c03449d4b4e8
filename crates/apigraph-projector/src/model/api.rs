use serde::Serialize;

use super::{
    is_false, ApiDataNodeUnion, ApiDomainProperty, ApiSecurityRequirement, ApiShapeUnion,
};

/// Descriptive API metadata, without endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSummary {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accepts: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content_type: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ApiOrganization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<ApiLicense>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documentations: Vec<ApiDocumentation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<ApiTag>,
}

/// Summary plus endpoints, servers and security.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBase {
    #[serde(flatten)]
    pub summary: ApiSummary,
    pub end_points: Vec<ApiEndPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<ApiServer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<ApiSecurityRequirement>,
}

/// A web API (RAML, OAS).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiWeb {
    #[serde(flatten)]
    pub api: ApiBase,
}

/// An asynchronous API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiAsync {
    #[serde(flatten)]
    pub api: ApiBase,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOrganization {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLicense {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// External documentation (creative work).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocumentation {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTag {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<ApiDocumentation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiServer {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<ApiParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<ApiSecurityRequirement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndPoint {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub operations: Vec<ApiOperation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ApiParameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payloads: Vec<ApiPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<ApiServer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<ApiSecurityRequirement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOperation {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accepts: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content_type: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<ApiRequest>,
    pub responses: Vec<ApiResponse>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<ApiSecurityRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub callbacks: Vec<ApiCallback>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<ApiServer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<ApiTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub query_parameters: Vec<ApiParameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<ApiParameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uri_parameters: Vec<ApiParameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cookie_parameters: Vec<ApiParameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payloads: Vec<ApiPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_string: Option<ApiShapeUnion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<ApiParameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payloads: Vec<ApiPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ApiExample>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ApiTemplatedLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPayload {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<ApiShapeUnion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ApiExample>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub encoding: Vec<ApiEncoding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParameter {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub allow_empty_value: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_reserved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<ApiShapeUnion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payloads: Vec<ApiPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ApiExample>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiExample {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The example as written in the source document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_value: Option<ApiDataNodeUnion>,
    #[serde(skip_serializing_if = "is_false")]
    pub strict: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTemplatedLink {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mapping: Vec<ApiIriTemplateMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ApiServer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIriTemplateMapping {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_variable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_expression: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCallback {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Box<ApiEndPoint>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEncoding {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<ApiParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_reserved: Option<bool>,
}
