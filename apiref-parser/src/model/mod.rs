//! The API reference model recovered from a document.
//!
//! Ownership is strictly hierarchical: a [`Document`] owns its
//! [`EndpointRef`]s, which own their [`MethodBlock`]s, which own their
//! [`Parameter`]s and [`Response`]s. Everything is assembled while scanning and
//! never mutated once the parser hands the document back.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod location;
mod method;
mod section;

pub use location::Location;
pub use method::HttpMethod;
pub use section::{Section, Subsection};

/// A parsed API reference document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Document {
    /// Title from the `= Title [...]` header line.
    pub title: String,
    /// Published URL of the document this model was parsed from.
    pub url: String,
    /// The `== API endpoints` index, in document order.
    pub summary: IndexMap<String, Vec<SummaryMethod>>,
    /// One entry per `=== /api...` section, in document order.
    pub items: Vec<EndpointRef>,
}

/// An entry of the summary index: one method available on an endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMethod {
    pub method: HttpMethod,
    pub description: String,
}

/// One `=== /api...` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct EndpointRef {
    /// Path template, e.g. `/api/v1/namespaces/{namespace}/pods`.
    pub endpoint: String,
    #[serde(default)]
    pub global_path_parameters: Vec<Parameter>,
    #[serde(default)]
    pub global_query_parameters: Vec<Parameter>,
    #[serde(default)]
    pub methods: Vec<MethodBlock>,
}

impl EndpointRef {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Parameters of one of the global sections.
    ///
    /// [`Section::HttpMethod`] has no parameters of its own and yields an empty slice.
    #[must_use]
    pub fn global_parameters(&self, section: Section) -> &[Parameter] {
        match section {
            Section::GlobalPathParameters => &self.global_path_parameters,
            Section::GlobalQueryParameters => &self.global_query_parameters,
            Section::HttpMethod => &[],
        }
    }
}

/// A parameter row: name, type and description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: TypeRef,
    pub description: String,
}

/// A type name, linked to its own reference page when the source cell was a
/// cross-reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<String>,
}

impl TypeRef {
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            hyperlink: None,
        }
    }

    #[must_use]
    pub fn linked(value: impl Into<String>, hyperlink: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            hyperlink: Some(hyperlink.into()),
        }
    }
}

/// One HTTP method of an endpoint with its parameters and responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MethodBlock {
    pub method: HttpMethod,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub query_parameters: Vec<Parameter>,
    #[serde(default)]
    pub body_parameters: Vec<Parameter>,
    #[serde(default)]
    pub responses: Vec<Response>,
}

impl MethodBlock {
    #[must_use]
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            description: String::new(),
            query_parameters: Vec::new(),
            body_parameters: Vec::new(),
            responses: Vec::new(),
        }
    }

    /// Parameters of the query or body subsection.
    ///
    /// [`Subsection::HttpResponses`] holds responses, not parameters, and yields an empty slice.
    #[must_use]
    pub fn parameters(&self, subsection: Subsection) -> &[Parameter] {
        match subsection {
            Subsection::QueryParameters => &self.query_parameters,
            Subsection::BodyParameters => &self.body_parameters,
            Subsection::HttpResponses => &[],
        }
    }
}

/// A row of the `.HTTP responses` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub http_code: String,
    pub response_body: TypeRef,
}
