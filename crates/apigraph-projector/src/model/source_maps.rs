use serde::Serialize;

/// One source-map entry: the element it describes and its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSynthesizedField {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Provenance metadata attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocumentSourceMaps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub synthesized_field: Vec<ApiSynthesizedField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lexical: Vec<ApiSynthesizedField>,
    /// Back-reference to the payloads an example was written for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked_element: Option<ApiSynthesizedField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub auto_generated_name: Vec<ApiSynthesizedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_json_schema: Option<ApiSynthesizedField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub declared_element: Vec<ApiSynthesizedField>,
}

impl ApiDocumentSourceMaps {
    /// Whether no sub-field is present.
    pub fn is_empty(&self) -> bool {
        self.synthesized_field.is_empty()
            && self.lexical.is_empty()
            && self.tracked_element.is_none()
            && self.auto_generated_name.is_empty()
            && self.parsed_json_schema.is_none()
            && self.declared_element.is_empty()
    }
}
