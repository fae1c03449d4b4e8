use serde::Serialize;

use super::{ApiDataNodeUnion, ApiDomainProperty, ApiParameter, ApiResponse, ApiShapeUnion};

/// A set of security schemes that together satisfy a requirement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityRequirement {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub schemes: Vec<ApiParametrizedSecurityScheme>,
}

/// A security scheme applied with requirement-specific settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParametrizedSecurityScheme {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ApiSecuritySettingsUnion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<ApiSecurityScheme>,
}

/// A declared security scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityScheme {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scheme_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ApiSecuritySettingsUnion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<ApiParameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub query_parameters: Vec<ApiParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_string: Option<ApiShapeUnion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<ApiResponse>,
}

/// Settings fields shared by every settings variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecuritySettings {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<ApiDataNodeUnion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityOAuth1Settings {
    #[serde(flatten)]
    pub settings: ApiSecuritySettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_token_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_credentials_uri: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityOAuth2Settings {
    #[serde(flatten)]
    pub settings: ApiSecuritySettings,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authorization_grants: Vec<String>,
    pub flows: Vec<ApiSecurityOAuth2Flow>,
}

/// One OAuth 2 flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityOAuth2Flow {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_uri: Option<String>,
    pub scopes: Vec<ApiSecurityScope>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityScope {
    #[serde(flatten)]
    pub element: ApiDomainProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityApiKeySettings {
    #[serde(flatten)]
    pub settings: ApiSecuritySettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityHttpSettings {
    #[serde(flatten)]
    pub settings: ApiSecuritySettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecurityOpenIdConnectSettings {
    #[serde(flatten)]
    pub settings: ApiSecuritySettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Settings of a security scheme, by settings type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiSecuritySettingsUnion {
    OAuth1(ApiSecurityOAuth1Settings),
    OAuth2(ApiSecurityOAuth2Settings),
    ApiKey(ApiSecurityApiKeySettings),
    Http(ApiSecurityHttpSettings),
    OpenIdConnect(ApiSecurityOpenIdConnectSettings),
    Generic(ApiSecuritySettings),
}
