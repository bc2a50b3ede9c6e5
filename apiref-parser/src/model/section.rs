//! Section kinds of an endpoint and of an HTTP method block.
//!
//! The labels double as the marker text in the source (`.Global path
//! parameters`, `.Query parameters`, ...) and as the captions used by the
//! renderers.

/// Top-level sections of an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    GlobalPathParameters,
    GlobalQueryParameters,
    HttpMethod,
}

impl Section {
    /// The endpoint-wide parameter tables, in document order.
    pub const GLOBAL: [Section; 2] = [Section::GlobalPathParameters, Section::GlobalQueryParameters];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::GlobalPathParameters => "Global path parameters",
            Self::GlobalQueryParameters => "Global query parameters",
            Self::HttpMethod => "HTTP method",
        }
    }

    /// Match a `.Global path parameters` / `.Global query parameters` title line.
    #[must_use]
    pub fn from_global_marker(line: &str) -> Option<Self> {
        Self::GLOBAL
            .into_iter()
            .find(|section| is_block_title(line, section.label()))
    }
}

/// Subsections of an HTTP method block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subsection {
    QueryParameters,
    BodyParameters,
    HttpResponses,
}

impl Subsection {
    pub const ALL: [Subsection; 3] = [
        Subsection::QueryParameters,
        Subsection::BodyParameters,
        Subsection::HttpResponses,
    ];

    /// The parameter tables of a method block, in document order.
    pub const PARAMETERS: [Subsection; 2] = [Subsection::QueryParameters, Subsection::BodyParameters];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::QueryParameters => "Query parameters",
            Self::BodyParameters => "Body parameters",
            Self::HttpResponses => "HTTP responses",
        }
    }

    /// Match a `.Query parameters` / `.Body parameters` / `.HTTP responses` title line.
    #[must_use]
    pub fn from_marker(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|subsection| is_block_title(line, subsection.label()))
    }
}

fn is_block_title(line: &str, label: &str) -> bool {
    line.strip_prefix('.')
        .is_some_and(|rest| rest.starts_with(label))
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for Subsection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
