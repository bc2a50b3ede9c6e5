//! Sample documents for renderer tests.
//!
//! The documents are produced by the real parser so renderer tests exercise
//! the same model the CLI hands over.

use apiref_converters_core::{GeneratorMetadata, Options as ConverterOptions};
use apiref_parser::{Document, Error, Options};

/// A Pod reference page: two endpoints, global path and query parameters,
/// methods with query and body parameters, and a method without any tables.
pub const PODS_ADOC: &str = include_str!("../fixtures/pods.adoc");

/// Published URL recorded on the sample documents.
pub const PODS_URL: &str =
    "https://docs.openshift.com/container-platform/4.8/rest_api/workloads_apis/pod-core-v1.html";

/// Revision recorded on [`converter_options`].
pub const REVISION: &str = "3f9c2d0e8b7a6f5e4d3c2b1a09f8e7d6c5b4a392";

fn parser_options() -> Options {
    Options::builder()
        .with_version("4.8")
        .with_source_url(PODS_URL)
        .build()
}

/// The parsed [`PODS_ADOC`] page.
///
/// # Errors
///
/// Returns the parser error if the bundled source no longer parses.
pub fn pods() -> Result<Document, Error> {
    apiref_parser::parse(PODS_ADOC, &parser_options())
}

/// A page with a title and nothing else.
///
/// # Errors
///
/// Returns the parser error if the source no longer parses.
pub fn empty() -> Result<Document, Error> {
    apiref_parser::parse("= Empty [test/v1]\n", &parser_options())
}

/// Converter options with fixed generator metadata and revision.
#[must_use]
pub fn converter_options() -> ConverterOptions {
    ConverterOptions::builder()
        .generator_metadata(GeneratorMetadata::new("adoc2xlsx", "0.1.0"))
        .revision(REVISION)
        .build()
}
