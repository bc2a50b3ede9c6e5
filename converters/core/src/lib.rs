//! Core traits and options shared by the API reference renderers.
//!
//! - [`Converter`] - trait that all renderers implement
//! - [`Options`] - configuration for conversion
//! - [`Format`] - the output formats
//!
//! # Example
//!
//! ```
//! use apiref_converters_core::{GeneratorMetadata, Options};
//!
//! let options = Options::builder()
//!     .generator_metadata(GeneratorMetadata::new("adoc2xlsx", "0.1.0"))
//!     .revision("3f9c2d0")
//!     .build();
//! assert_eq!(options.revision(), Some("3f9c2d0"));
//! ```

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use apiref_parser::Document;

mod error;
mod format;

pub use error::Error;
pub use format::Format;

/// Output path meaning "write to stdout".
pub const STDOUT_PATH: &str = "-";

/// Converter options.
///
/// Use [`Options::builder()`] to construct an instance. This struct is marked
/// `#[non_exhaustive]` to allow adding new fields in future minor versions.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct Options {
    generator_metadata: GeneratorMetadata,
    revision: Option<String>,
}

impl Options {
    /// Create a new builder with default values.
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Get the generator metadata.
    #[must_use]
    pub fn generator_metadata(&self) -> &GeneratorMetadata {
        &self.generator_metadata
    }

    /// Commit id of the documentation checkout the document was read from.
    #[must_use]
    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }
}

/// Builder for [`Options`].
///
/// Use [`Options::builder()`] to create a new builder.
#[derive(Debug, Default, Clone)]
pub struct OptionsBuilder {
    generator_metadata: GeneratorMetadata,
    revision: Option<String>,
}

impl OptionsBuilder {
    /// Set the generator metadata (name and version).
    #[must_use]
    pub fn generator_metadata(mut self, meta: GeneratorMetadata) -> Self {
        self.generator_metadata = meta;
        self
    }

    /// Set the source revision recorded by renderers that carry metadata.
    #[must_use]
    pub fn revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// Build the [`Options`] instance.
    #[must_use]
    pub fn build(self) -> Options {
        Options {
            generator_metadata: self.generator_metadata,
            revision: self.revision,
        }
    }
}

/// Generator metadata for tracking which tool produced the output.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GeneratorMetadata {
    name: String,
    version: String,
}

impl GeneratorMetadata {
    /// Create new generator metadata.
    #[must_use]
    pub fn new<S: AsRef<str>>(name: S, version: S) -> Self {
        Self {
            name: name.as_ref().to_string(),
            version: version.as_ref().to_string(),
        }
    }

    /// Get the generator name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the generator version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl std::fmt::Display for GeneratorMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}

/// Trait for document renderers (JSON, CSV, spreadsheet).
///
/// Renderers only read the [`Document`]; the CLI parses it once and hands it
/// over.
pub trait Converter: Sized {
    /// The error type for this converter.
    type Error: From<io::Error> + From<Error>;

    /// Create a new converter instance.
    fn new(options: Options) -> Self;

    /// Get the options this converter was created with.
    fn options(&self) -> &Options;

    /// The format this converter produces.
    fn format(&self) -> Format;

    /// Render `doc` into `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    fn write_to<W: Write>(&self, doc: &Document, writer: W) -> Result<(), Self::Error>;

    /// Render `doc` to `output`, or to stdout when `output` is `None` or `-`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutputRequired`] when the format cannot go to stdout
    /// and no file was given, or an error if rendering or writing fails.
    #[tracing::instrument(skip(self, doc), fields(format = %self.format()))]
    fn convert(&self, doc: &Document, output: Option<&Path>) -> Result<(), Self::Error> {
        match output.filter(|path| path.as_os_str() != STDOUT_PATH) {
            Some(path) => {
                let mut writer = BufWriter::new(File::create(path)?);
                self.write_to(doc, &mut writer)?;
                writer.flush()?;
                tracing::debug!(path = %path.display(), "wrote output");
            }
            None if self.format().requires_output_file() => {
                return Err(Error::OutputRequired(self.format()).into());
            }
            None => {
                let stdout = io::stdout();
                let mut writer = stdout.lock();
                self.write_to(doc, &mut writer)?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}
