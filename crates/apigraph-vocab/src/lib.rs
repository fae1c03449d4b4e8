//! Vocabulary IRIs for the AML/AMF API graph model.
//!
//! The graph documents consumed by `apigraph-graph` use a closed set of
//! vocabularies. Every property or type the core reads is named here by its
//! full IRI; the key resolver compacts it against the document `@context`
//! before the node is indexed.
//!
//! # Organization
//!
//! - `document` - document units and link markers (`http://a.ml/vocabularies/document#`)
//! - `source_maps` - provenance metadata (`http://a.ml/vocabularies/document-source-maps#`)
//! - `core` - shared descriptive terms (`http://a.ml/vocabularies/core#`)
//! - `api_contract` - APIs, endpoints, operations (`http://a.ml/vocabularies/apiContract#`)
//! - `shapes` - AMF shape extensions (`http://a.ml/vocabularies/shapes#`)
//! - `data` - data nodes (`http://a.ml/vocabularies/data#`)
//! - `security` - security schemes (`http://a.ml/vocabularies/security#`)
//! - `shacl`, `rdf`, `rdfs`, `xsd` - W3C vocabularies

/// Declares a vocabulary module: a namespace IRI plus one constant per term.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident = $ns:literal {
            $( $(#[$tmeta:meta])* $term:ident = $local:literal; )*
        }
    ) => {
        $(#[$meta])*
        pub mod $name {
            /// Namespace IRI.
            pub const NS: &str = $ns;
            $(
                $(#[$tmeta])*
                pub const $term: &str = concat!($ns, $local);
            )*
        }
    };
}

vocabulary! {
    /// Document units, declarations and link markers.
    document = "http://a.ml/vocabularies/document#" {
        DOCUMENT = "Document";
        FRAGMENT = "Fragment";
        MODULE = "Module";
        UNIT = "Unit";
        EXTERNAL_FRAGMENT = "ExternalFragment";
        DOMAIN_ELEMENT = "DomainElement";
        ENCODES = "encodes";
        DECLARES = "declares";
        REFERENCES = "references";
        /// Marks a node as a link to the node with the given `@id`.
        LINK_TARGET = "link-target";
        /// Marks a node as a reference to a node encoded by another unit.
        REFERENCE_ID = "reference-id";
        LINK_LABEL = "link-label";
        CUSTOM_DOMAIN_PROPERTIES = "customDomainProperties";
        /// Example node type.
        EXAMPLE = "Example";
        RAW = "raw";
        STRICT = "strict";
        STRUCTURED_VALUE = "structuredValue";
        VALUE = "value";
        EXTENDS = "extends";
        VERSION = "version";
        ROOT = "root";
    }
}

vocabulary! {
    /// Source maps: lexical and synthesized provenance of model elements.
    source_maps = "http://a.ml/vocabularies/document-source-maps#" {
        SOURCE_MAP = "SourceMap";
        SOURCES = "sources";
        ELEMENT = "element";
        VALUE = "value";
        SYNTHESIZED_FIELD = "synthesized-field";
        LEXICAL = "lexical";
        TRACKED_ELEMENT = "tracked-element";
        AUTO_GENERATED_NAME = "auto-generated-name";
        PARSED_JSON_SCHEMA = "parsed-json-schema";
        DECLARED_ELEMENT = "declared-element";
    }
}

vocabulary! {
    /// Descriptive terms shared by every model element.
    core = "http://a.ml/vocabularies/core#" {
        NAME = "name";
        DESCRIPTION = "description";
        DISPLAY_NAME = "displayName";
        SUMMARY = "summary";
        TITLE = "title";
        VERSION = "version";
        URL = "url";
        URL_TEMPLATE = "urlTemplate";
        EMAIL = "email";
        MEDIA_TYPE = "mediaType";
        TERMS_OF_SERVICE = "termsOfService";
        PROVIDER = "provider";
        LICENSE = "license";
        DOCUMENTATION = "documentation";
        EXTENSION_NAME = "extensionName";
        ORGANIZATION = "Organization";
        LICENSE_TYPE = "License";
        CREATIVE_WORK = "CreativeWork";
    }
}

vocabulary! {
    /// API contract vocabulary: APIs, endpoints, operations and messages.
    api_contract = "http://a.ml/vocabularies/apiContract#" {
        API = "API";
        WEB_API = "WebAPI";
        ASYNC_API = "AsyncAPI";
        END_POINT = "EndPoint";
        OPERATION = "Operation";
        REQUEST = "Request";
        RESPONSE = "Response";
        MESSAGE = "Message";
        PAYLOAD = "Payload";
        PARAMETER = "Parameter";
        SERVER = "Server";
        EXAMPLE = "Example";
        TAG = "Tag";
        TEMPLATED_LINK = "TemplatedLink";
        IRI_TEMPLATE_MAPPING = "IriTemplateMapping";
        CALLBACK = "Callback";
        ENCODING = "Encoding";

        ENDPOINT = "endpoint";
        SUPPORTED_OPERATION = "supportedOperation";
        SERVER_PROP = "server";
        PARAMETER_PROP = "parameter";
        PAYLOAD_PROP = "payload";
        RETURNS = "returns";
        RESPONSE_PROP = "response";
        EXPECTS = "expects";
        PATH = "path";
        METHOD = "method";
        SCHEME = "scheme";
        ACCEPTS = "accepts";
        CONTENT_TYPE = "contentType";
        STATUS_CODE = "statusCode";
        HEADER = "header";
        URI_PARAMETER = "uriParameter";
        COOKIE_PARAMETER = "cookieParameter";
        QUERY_STRING = "queryString";
        PARAM_NAME = "paramName";
        REQUIRED = "required";
        DEPRECATED = "deprecated";
        ALLOW_EMPTY_VALUE = "allowEmptyValue";
        STYLE = "style";
        EXPLODE = "explode";
        ALLOW_RESERVED = "allowReserved";
        BINDING = "binding";
        EXAMPLES = "examples";
        OPERATION_ID = "operationId";
        PROTOCOL = "protocol";
        PROTOCOL_VERSION = "protocolVersion";
        VARIABLE = "variable";
        SECURITY = "security";
        TAG_PROP = "tag";
        CALLBACK_PROP = "callback";
        EXPRESSION = "expression";
        LINK = "link";
        TEMPLATE = "template";
        MAPPING = "mapping";
        TEMPLATE_VARIABLE = "templateVariable";
        LINK_EXPRESSION = "linkExpression";
        REQUEST_BODY = "requestBody";
        ENCODING_PROP = "encoding";
        PROPERTY_NAME = "propertyName";
        HEADERS = "headers";
    }
}

vocabulary! {
    /// AMF shape extensions on top of SHACL.
    shapes = "http://a.ml/vocabularies/shapes#" {
        SHAPE = "Shape";
        ANY_SHAPE = "AnyShape";
        SCALAR_SHAPE = "ScalarShape";
        ARRAY_SHAPE = "ArrayShape";
        MATRIX_SHAPE = "MatrixShape";
        TUPLE_SHAPE = "TupleShape";
        UNION_SHAPE = "UnionShape";
        FILE_SHAPE = "FileShape";
        SCHEMA_SHAPE = "SchemaShape";
        RECURSIVE_SHAPE = "RecursiveShape";
        DATA_ARRANGEMENT_SHAPE = "DataArrangementShape";

        RANGE = "range";
        ITEMS = "items";
        ANY_OF = "anyOf";
        FILE_TYPE = "fileType";
        /// Points back to the declaration a recursive shape closes over.
        FIX_POINT = "fixPoint";
        FORMAT = "format";
        MULTIPLE_OF = "multipleOf";
        UNIQUE_ITEMS = "uniqueItems";
        CLOSURE_ITEMS = "closureItems";
        ADDITIONAL_ITEMS_SCHEMA = "additionalItemsSchema";
        INHERITS = "inherits";
        READ_ONLY = "readOnly";
        WRITE_ONLY = "writeOnly";
        DEPRECATED = "deprecated";
        DISCRIMINATOR = "discriminator";
        DISCRIMINATOR_VALUE = "discriminatorValue";
        MIN_PROPERTIES = "minProperties";
        MAX_PROPERTIES = "maxProperties";
        PATTERN_NAME = "patternName";
        SCHEMA = "schema";
        XML_SERIALIZATION = "xmlSerialization";
        XML_ATTRIBUTE = "xmlAttribute";
        XML_WRAPPED = "xmlWrapped";
        XML_NAME = "xmlName";
        XML_NAMESPACE = "xmlNamespace";
        XML_PREFIX = "xmlPrefix";
    }
}

vocabulary! {
    /// SHACL terms used by shapes.
    shacl = "http://www.w3.org/ns/shacl#" {
        SHAPE = "Shape";
        NODE_SHAPE = "NodeShape";
        PROPERTY_SHAPE = "PropertyShape";
        NAME = "name";
        DATATYPE = "datatype";
        PATH = "path";
        PROPERTY = "property";
        MIN_COUNT = "minCount";
        MAX_COUNT = "maxCount";
        MIN_LENGTH = "minLength";
        MAX_LENGTH = "maxLength";
        PATTERN = "pattern";
        MIN_INCLUSIVE = "minInclusive";
        MAX_INCLUSIVE = "maxInclusive";
        MIN_EXCLUSIVE = "minExclusive";
        MAX_EXCLUSIVE = "maxExclusive";
        IN = "in";
        OR = "or";
        AND = "and";
        XONE = "xone";
        NOT = "not";
        DEFAULT_VALUE = "defaultValue";
        DEFAULT_VALUE_STR = "defaultValueStr";
        CLOSED = "closed";
        RAW = "raw";
    }
}

vocabulary! {
    /// Data nodes: examples, default values and annotation values.
    data = "http://a.ml/vocabularies/data#" {
        OBJECT = "Object";
        SCALAR = "Scalar";
        ARRAY = "Array";
        NODE = "Node";
        VALUE = "value";
    }
}

vocabulary! {
    /// Security schemes, requirements and settings.
    security = "http://a.ml/vocabularies/security#" {
        SECURITY_SCHEME = "SecurityScheme";
        PARAMETRIZED_SECURITY_SCHEME = "ParametrizedSecurityScheme";
        SECURITY_REQUIREMENT = "SecurityRequirement";
        SETTINGS = "Settings";
        OAUTH1_SETTINGS = "OAuth1Settings";
        OAUTH2_SETTINGS = "OAuth2Settings";
        API_KEY_SETTINGS = "ApiKeySettings";
        HTTP_SETTINGS = "HttpSettings";
        OPEN_ID_CONNECT_SETTINGS = "OpenIdConnectSettings";
        OAUTH2_FLOW = "OAuth2Flow";
        SCOPE = "Scope";

        SCHEMES = "schemes";
        SCHEME = "scheme";
        SETTINGS_PROP = "settings";
        TYPE = "type";
        REQUEST_TOKEN_URI = "requestTokenUri";
        AUTHORIZATION_URI = "authorizationUri";
        TOKEN_CREDENTIALS_URI = "tokenCredentialsUri";
        SIGNATURE = "signature";
        AUTHORIZATION_GRANT = "authorizationGrant";
        FLOWS = "flows";
        FLOW = "flow";
        ACCESS_TOKEN_URI = "accessTokenUri";
        REFRESH_URI = "refreshUri";
        SCOPE_PROP = "scope";
        IN = "in";
        BEARER_FORMAT = "bearerFormat";
        OPEN_ID_CONNECT_URL = "openIdConnectUrl";
        ADDITIONAL_PROPERTIES = "additionalProperties";
    }
}

vocabulary! {
    /// RDF vocabulary.
    rdf = "http://www.w3.org/1999/02/22-rdf-syntax-ns#" {
        TYPE = "type";
        SEQ = "Seq";
    }
}

vocabulary! {
    /// RDFS vocabulary. Container members are `rdfs:_1`, `rdfs:_2`, ...
    rdfs = "http://www.w3.org/2000/01/rdf-schema#" {
        MEMBER = "member";
        LABEL = "label";
    }
}

vocabulary! {
    /// XML Schema datatypes.
    xsd = "http://www.w3.org/2001/XMLSchema#" {
        STRING = "string";
        BOOLEAN = "boolean";
        INTEGER = "integer";
        LONG = "long";
        FLOAT = "float";
        DOUBLE = "double";
        NUMBER = "number";
        DATE = "date";
        DATE_TIME = "dateTime";
        TIME = "time";
        NIL = "nil";
        BASE64_BINARY = "base64Binary";
    }
}

/// Prefix used by AMF for generated node identifiers.
pub const AMF_ID_PREFIX: &str = "amf://id";

/// Local name of a vocabulary IRI: the part after `#`, or after the last `/`
/// or `:` when the IRI has no fragment.
pub fn local_name(iri: &str) -> &str {
    if let Some(idx) = iri.rfind('#') {
        return &iri[idx + 1..];
    }
    match iri.rfind(['/', ':']) {
        Some(idx) => &iri[idx + 1..],
        None => iri,
    }
}
