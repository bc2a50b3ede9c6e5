//! Resolution of cross-reference targets to published documentation URLs.

use crate::{
    error::{Detail, Error},
    markers,
    model::TypeRef,
};

/// Default host and product path of the published documentation.
pub const DEFAULT_URL_PREFIX: &str = "https://docs.openshift.com/container-platform";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResolver {
    url_prefix: String,
    version: Option<String>,
}

impl LinkResolver {
    #[must_use]
    pub fn new(url_prefix: impl Into<String>, version: Option<String>) -> Self {
        Self {
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
            version,
        }
    }

    /// Build the URL of an xref target, relative to the `rest_api` directory.
    ///
    /// A leading `../` is dropped and `.adoc` pages become `.html` pages, so
    /// `../objects/index.adoc#pod` resolves to
    /// `<prefix>/<version>/rest_api/objects/index.html#pod`.
    ///
    /// Returns `None` when the resolver has no documentation version.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<String> {
        let version = self.version.as_deref()?;
        let path = path.strip_prefix("../").unwrap_or(path);
        Some(format!(
            "{}/{version}/rest_api/{}",
            self.url_prefix,
            path.replace(".adoc", ".html")
        ))
    }

    /// Turn a type cell into a [`TypeRef`].
    ///
    /// Cells starting with `xref:` must be complete cross-references and are
    /// linked; any other cell is a literal with one pair of surrounding
    /// backticks removed.
    pub(crate) fn type_ref(&self, cell: &str, detail: Detail) -> Result<TypeRef, Error> {
        let cell = cell.trim();
        if !cell.starts_with("xref:") {
            return Ok(TypeRef::literal(unquote(cell)));
        }
        let Some((path, label)) = markers::xref(cell) else {
            return Err(Error::InvalidCrossReference(detail, cell.to_string()));
        };
        let Some(hyperlink) = self.resolve(path) else {
            return Err(Error::MissingVersion(detail, cell.to_string()));
        };
        tracing::trace!(label, %hyperlink, "resolved cross-reference");
        Ok(TypeRef::linked(label, hyperlink))
    }
}

/// Remove one pair of surrounding backticks, if present.
pub(crate) fn unquote(cell: &str) -> &str {
    cell.strip_prefix('`')
        .and_then(|inner| inner.strip_suffix('`'))
        .unwrap_or(cell)
}
