use crate::xref::{DEFAULT_URL_PREFIX, LinkResolver};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Options {
    /// Host and product path that cross-references resolve against.
    pub url_prefix: String,
    /// Documentation version (`major.minor`) used in resolved links.
    ///
    /// When unset, [`crate::parse_file`] reads it from the repository the
    /// document lives in. [`crate::parse`] leaves it unset, and any
    /// cross-reference then fails with [`crate::Error::MissingVersion`].
    pub version: Option<String>,
    /// Published URL of the document itself, stored as [`crate::Document::url`].
    pub source_url: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            version: None,
            source_url: None,
        }
    }
}

impl Options {
    /// Create a new `OptionsBuilder` for fluent configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use apiref_parser::Options;
    ///
    /// let options = Options::builder()
    ///     .with_version("4.8")
    ///     .with_url_prefix("https://docs.example.com/platform")
    ///     .build();
    /// assert_eq!(options.version.as_deref(), Some("4.8"));
    /// ```
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn link_resolver(&self) -> LinkResolver {
        LinkResolver::new(self.url_prefix.as_str(), self.version.clone())
    }
}

/// Builder for [`Options`], created with [`Options::builder()`].
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    url_prefix: Option<String>,
    version: Option<String>,
    source_url: Option<String>,
}

impl OptionsBuilder {
    /// Override the documentation host, `https://docs.openshift.com/container-platform` by default.
    #[must_use]
    pub fn with_url_prefix(mut self, url_prefix: impl Into<String>) -> Self {
        self.url_prefix = Some(url_prefix.into());
        self
    }

    /// Set the documentation version instead of reading it from `.git/HEAD`.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = Some(source_url.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Options {
        Options {
            url_prefix: self
                .url_prefix
                .unwrap_or_else(|| DEFAULT_URL_PREFIX.to_string()),
            version: self.version,
            source_url: self.source_url,
        }
    }
}
