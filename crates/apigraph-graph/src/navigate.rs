//! API navigation: endpoints, operations, servers and URIs.

use apigraph_vocab::{api_contract, core};

use crate::graph::ApiGraph;
use crate::node::{node_id, Node};

/// Inputs for [`ApiGraph::endpoint_uri`].
#[derive(Debug, Clone, Default)]
pub struct UriOptions<'a> {
    /// Server whose URL is the base. Ignored when `base_uri` is set.
    pub server: Option<&'a Node>,
    /// Explicit base URI.
    pub base_uri: Option<String>,
    /// Value substituted for `{version}`. Defaults to the API version.
    pub version: Option<String>,
    /// Protocols used to add a missing scheme. Defaults to the API's.
    pub protocols: Vec<String>,
    /// Leave the base out.
    pub ignore_base: bool,
    /// Leave the endpoint path out.
    pub ignore_path: bool,
}

impl ApiGraph {
    /// The API's endpoints, in document order.
    pub fn endpoints(&self) -> Vec<&Node> {
        self.api()
            .map(|api| self.property_nodes(api, api_contract::ENDPOINT))
            .unwrap_or_default()
    }

    /// An endpoint by `@id`.
    pub fn endpoint(&self, id: &str) -> Option<&Node> {
        self.endpoints().into_iter().find(|e| node_id(e) == Some(id))
    }

    /// An endpoint by its path template.
    pub fn endpoint_by_path(&self, path: &str) -> Option<&Node> {
        self.endpoints()
            .into_iter()
            .find(|e| self.value_str(e, api_contract::PATH) == Some(path))
    }

    /// The operations an endpoint supports.
    pub fn operations<'a>(&self, endpoint: &'a Node) -> Vec<&'a Node> {
        self.property_nodes(endpoint, api_contract::SUPPORTED_OPERATION)
    }

    /// An operation by `@id`, searched across every endpoint.
    pub fn operation(&self, id: &str) -> Option<&Node> {
        self.endpoints()
            .into_iter()
            .flat_map(|e| self.operations(e))
            .find(|op| node_id(op) == Some(id))
    }

    /// The endpoint owning an operation.
    pub fn endpoint_of_operation(&self, operation_id: &str) -> Option<&Node> {
        self.endpoints().into_iter().find(|e| {
            self.operations(e)
                .iter()
                .any(|op| node_id(op) == Some(operation_id))
        })
    }

    /// The request an operation expects.
    pub fn expects<'a>(&self, operation: &'a Node) -> Option<&'a Node> {
        self.property_node(operation, api_contract::EXPECTS)
    }

    /// The responses an operation returns.
    pub fn returns<'a>(&self, operation: &'a Node) -> Vec<&'a Node> {
        self.property_nodes(operation, api_contract::RETURNS)
    }

    /// Servers that apply to an operation or endpoint.
    ///
    /// Falls back from operation servers to endpoint servers to the API's
    /// root servers; the first non-empty level wins. When only the
    /// operation is given, its owning endpoint is looked up.
    pub fn servers(&self, endpoint_id: Option<&str>, operation_id: Option<&str>) -> Vec<&Node> {
        let Some(api) = self.api() else {
            return Vec::new();
        };
        let mut endpoint = endpoint_id.and_then(|id| self.endpoint(id));

        if let Some(op_id) = operation_id {
            if endpoint.is_none() {
                endpoint = self.endpoint_of_operation(op_id);
            }
            let operation = endpoint
                .and_then(|e| {
                    self.operations(e)
                        .into_iter()
                        .find(|op| node_id(op) == Some(op_id))
                })
                .or_else(|| self.operation(op_id));
            if let Some(operation) = operation {
                let servers = self.property_nodes(operation, api_contract::SERVER_PROP);
                if !servers.is_empty() {
                    return servers;
                }
            }
        }

        if let Some(endpoint) = endpoint {
            let servers = self.property_nodes(endpoint, api_contract::SERVER_PROP);
            if !servers.is_empty() {
                return servers;
            }
        }

        self.property_nodes(api, api_contract::SERVER_PROP)
    }

    /// One server from [`ApiGraph::servers`]: the one with `server_id` when
    /// given, otherwise the first.
    pub fn server(
        &self,
        endpoint_id: Option<&str>,
        operation_id: Option<&str>,
        server_id: Option<&str>,
    ) -> Option<&Node> {
        let servers = self.servers(endpoint_id, operation_id);
        match server_id {
            Some(id) => servers.into_iter().find(|s| node_id(s) == Some(id)),
            None => servers.into_iter().next(),
        }
    }

    /// The URL template of a server.
    pub fn base_uri(&self, server: &Node) -> Option<String> {
        self.value_string(server, core::URL_TEMPLATE)
            .or_else(|| self.value_string(server, core::URL))
    }

    /// Variables declared for a server URL template.
    pub fn server_variables<'a>(&self, server: &'a Node) -> Vec<&'a Node> {
        self.property_nodes(server, api_contract::VARIABLE)
    }

    /// Protocols (schemes) declared on the API.
    pub fn protocols(&self) -> Vec<String> {
        self.api()
            .map(|api| self.value_strings(api, api_contract::SCHEME))
            .unwrap_or_default()
    }

    /// The API version.
    pub fn api_version(&self) -> Option<String> {
        self.api()
            .and_then(|api| self.value_string(api, core::VERSION))
    }

    /// Full URI of an endpoint: server base plus endpoint path.
    ///
    /// A trailing `/` on the base is dropped before joining. `{version}` in
    /// the base is replaced with the API version. A base without an `http`
    /// scheme gets the first protocol's scheme (or `http`).
    pub fn endpoint_uri(&self, endpoint: &Node, options: &UriOptions<'_>) -> String {
        let mut base = String::new();
        if !options.ignore_base {
            if let Some(uri) = &options.base_uri {
                base = uri.clone();
            } else if let Some(uri) = options.server.and_then(|s| self.base_uri(s)) {
                base = uri;
            }
        }
        if base.ends_with('/') {
            base.pop();
        }
        if let Some(version) = options.version.clone().or_else(|| self.api_version()) {
            base = base.replace("{version}", &version);
        }
        let base = self.ensure_url_scheme(&base, &options.protocols);

        if options.ignore_path {
            return base;
        }
        let path = self
            .value_string(endpoint, api_contract::PATH)
            .unwrap_or_default();
        format!("{}{}", base, path)
    }

    fn ensure_url_scheme(&self, value: &str, protocols: &[String]) -> String {
        if value.is_empty() || value.starts_with("http") {
            return value.to_string();
        }
        let scheme = protocols
            .first()
            .cloned()
            .or_else(|| self.protocols().into_iter().next())
            .map(|p| p.to_lowercase())
            .unwrap_or_else(|| "http".to_string());
        format!("{}://{}", scheme, value)
    }

    /// Security requirements attached to an API, endpoint or operation.
    pub fn security<'a>(&self, node: &'a Node) -> Vec<&'a Node> {
        self.property_nodes(node, api_contract::SECURITY)
    }
}
