//! Security requirements, schemes and settings.

use apigraph_graph::node::Node;
use apigraph_vocab::{api_contract, core, security};

use crate::model::{
    ApiParametrizedSecurityScheme, ApiSecurityApiKeySettings, ApiSecurityHttpSettings,
    ApiSecurityOAuth1Settings, ApiSecurityOAuth2Flow, ApiSecurityOAuth2Settings,
    ApiSecurityOpenIdConnectSettings, ApiSecurityRequirement, ApiSecurityScheme,
    ApiSecurityScope, ApiSecuritySettings, ApiSecuritySettingsUnion,
};
use crate::projector::Projector;
use crate::shapes::ShapeOptions;

impl Projector<'_> {
    /// Project a security requirement.
    pub fn security_requirement(&self, node: &Node) -> ApiSecurityRequirement {
        self.security_requirement_resolved(&self.resolved(node))
    }

    pub(crate) fn security_requirement_resolved(&self, node: &Node) -> ApiSecurityRequirement {
        ApiSecurityRequirement {
            element: self.element(node),
            name: self.graph().value_string(node, core::NAME),
            schemes: self
                .graph()
                .property_nodes(node, security::SCHEMES)
                .into_iter()
                .map(|scheme| self.parametrized_scheme(scheme))
                .collect(),
        }
    }

    pub(crate) fn security_requirements(&self, node: &Node) -> Vec<ApiSecurityRequirement> {
        self.graph()
            .security(node)
            .into_iter()
            .map(|requirement| self.security_requirement_resolved(requirement))
            .collect()
    }

    /// Project a parametrized security scheme.
    pub fn parametrized_security_scheme(&self, node: &Node) -> ApiParametrizedSecurityScheme {
        self.parametrized_scheme(&self.resolved(node))
    }

    pub(crate) fn parametrized_scheme(&self, node: &Node) -> ApiParametrizedSecurityScheme {
        let graph = self.graph();
        ApiParametrizedSecurityScheme {
            element: self.element(node),
            name: graph.value_string(node, core::NAME),
            settings: graph
                .property_node(node, security::SETTINGS_PROP)
                .map(|settings| self.settings_resolved(settings)),
            scheme: graph
                .property_node(node, security::SCHEME)
                .map(|scheme| self.security_scheme_resolved(scheme)),
        }
    }

    /// Project a security scheme.
    pub fn security_scheme(&self, node: &Node) -> ApiSecurityScheme {
        self.security_scheme_resolved(&self.resolved(node))
    }

    pub(crate) fn security_scheme_resolved(&self, node: &Node) -> ApiSecurityScheme {
        let graph = self.graph();
        ApiSecurityScheme {
            element: self.element(node),
            name: graph.value_string(node, core::NAME),
            scheme_type: graph.value_string(node, security::TYPE),
            display_name: graph.value_string(node, core::DISPLAY_NAME),
            description: graph.value_string(node, core::DESCRIPTION),
            settings: graph
                .property_node(node, security::SETTINGS_PROP)
                .map(|settings| self.settings_resolved(settings)),
            headers: self.parameters(node, api_contract::HEADER),
            query_parameters: self.parameters(node, api_contract::PARAMETER_PROP),
            query_string: self.shape_of(node, api_contract::QUERY_STRING, &ShapeOptions::default()),
            responses: graph
                .property_nodes(node, api_contract::RESPONSE_PROP)
                .into_iter()
                .map(|response| self.response_resolved(response))
                .collect(),
        }
    }

    /// Project security settings. Dispatches on the settings type; unknown
    /// types get the generic settings projection.
    pub fn security_settings(&self, node: &Node) -> ApiSecuritySettingsUnion {
        self.settings_resolved(&self.resolved(node))
    }

    pub(crate) fn settings_resolved(&self, node: &Node) -> ApiSecuritySettingsUnion {
        let graph = self.graph();
        if graph.has_type(node, security::OAUTH1_SETTINGS) {
            ApiSecuritySettingsUnion::OAuth1(self.oauth1_settings(node))
        } else if graph.has_type(node, security::OAUTH2_SETTINGS) {
            ApiSecuritySettingsUnion::OAuth2(self.oauth2_settings(node))
        } else if graph.has_type(node, security::API_KEY_SETTINGS) {
            ApiSecuritySettingsUnion::ApiKey(ApiSecurityApiKeySettings {
                settings: self.settings_base(node),
                name: graph.value_string(node, core::NAME),
                location: graph.value_string(node, security::IN),
            })
        } else if graph.has_type(node, security::HTTP_SETTINGS) {
            ApiSecuritySettingsUnion::Http(ApiSecurityHttpSettings {
                settings: self.settings_base(node),
                scheme: graph.value_string(node, security::SCHEME),
                bearer_format: graph.value_string(node, security::BEARER_FORMAT),
            })
        } else if graph.has_type(node, security::OPEN_ID_CONNECT_SETTINGS) {
            ApiSecuritySettingsUnion::OpenIdConnect(ApiSecurityOpenIdConnectSettings {
                settings: self.settings_base(node),
                url: graph.value_string(node, security::OPEN_ID_CONNECT_URL),
            })
        } else {
            ApiSecuritySettingsUnion::Generic(self.settings_base(node))
        }
    }

    fn settings_base(&self, node: &Node) -> ApiSecuritySettings {
        ApiSecuritySettings {
            element: self.element(node),
            additional_properties: self
                .graph()
                .property_node(node, security::ADDITIONAL_PROPERTIES)
                .map(|value| self.data_node_resolved(value)),
        }
    }

    fn oauth1_settings(&self, node: &Node) -> ApiSecurityOAuth1Settings {
        let graph = self.graph();
        ApiSecurityOAuth1Settings {
            settings: self.settings_base(node),
            request_token_uri: graph.value_string(node, security::REQUEST_TOKEN_URI),
            authorization_uri: graph.value_string(node, security::AUTHORIZATION_URI),
            token_credentials_uri: graph.value_string(node, security::TOKEN_CREDENTIALS_URI),
            signatures: graph.value_strings(node, security::SIGNATURE),
        }
    }

    fn oauth2_settings(&self, node: &Node) -> ApiSecurityOAuth2Settings {
        let graph = self.graph();
        ApiSecurityOAuth2Settings {
            settings: self.settings_base(node),
            authorization_grants: graph.value_strings(node, security::AUTHORIZATION_GRANT),
            flows: graph
                .property_nodes(node, security::FLOWS)
                .into_iter()
                .map(|flow| self.oauth2_flow(flow))
                .collect(),
        }
    }

    fn oauth2_flow(&self, node: &Node) -> ApiSecurityOAuth2Flow {
        let graph = self.graph();
        ApiSecurityOAuth2Flow {
            element: self.element(node),
            authorization_uri: graph.value_string(node, security::AUTHORIZATION_URI),
            access_token_uri: graph.value_string(node, security::ACCESS_TOKEN_URI),
            flow: graph.value_string(node, security::FLOW),
            refresh_uri: graph.value_string(node, security::REFRESH_URI),
            scopes: graph
                .property_nodes(node, security::SCOPE_PROP)
                .into_iter()
                .map(|scope| ApiSecurityScope {
                    element: self.element(scope),
                    name: graph.value_string(scope, core::NAME),
                    description: graph.value_string(scope, core::DESCRIPTION),
                })
                .collect(),
        }
    }
}
