//! `apiref-parser` reads the AsciiDoc REST API reference pages of the OpenShift
//! documentation and recovers the API they describe: endpoints, their global
//! parameters, HTTP methods, query and body parameters and responses.
//!
//! The pages follow a rigid dialect, so instead of a full AsciiDoc parser this
//! crate scans the document line by line and recognises the few marker lines
//! that structure it.
//!
//! # Example
//!
//! ```
//! use apiref_parser::{HttpMethod, Options};
//!
//! let input = "\
//! = Foo API [id]
//!
//! === /api/v1/foo
//! HTTP method::
//! `GET`::
//! Description::
//! List foos.
//! ";
//! let options = Options::builder().with_version("4.8").build();
//! let document = apiref_parser::parse(input, &options)?;
//! assert_eq!(document.title, "Foo API");
//! assert_eq!(document.items[0].methods[0].method, HttpMethod::Get);
//! # Ok::<(), apiref_parser::Error>(())
//! ```
use std::{io::Read, path::Path};

use tracing::instrument;

mod blocks;
mod document;
mod error;
mod line_source;
mod markers;
mod model;
mod options;
mod repository;
mod table;
mod xref;

pub use error::{Detail as ErrorDetail, Error};
pub use model::{
    Document, EndpointRef, HttpMethod, Location, MethodBlock, Parameter, Response, Section,
    Subsection, SummaryMethod, TypeRef,
};
pub use options::{Options, OptionsBuilder};
pub use repository::{Repository, document_url};
pub use xref::{DEFAULT_URL_PREFIX, LinkResolver};

/// Parse a document held in memory.
///
/// # Errors
///
/// Returns an [`Error`] carrying the offending line when the document does
/// not follow the reference layout.
#[instrument(skip(input))]
pub fn parse(input: &str, options: &Options) -> Result<Document, Error> {
    document::DocumentParser::new(input, options).parse()
}

/// Parse a document from a reader.
///
/// # Errors
///
/// Returns an [`Error`] if the reader fails or the document cannot be parsed.
#[instrument(skip(reader))]
pub fn parse_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Document, Error> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse(&input, options)
}

/// Parse a document from a file inside a documentation checkout.
///
/// The documentation version and the published URL of the document are
/// derived from the checkout unless `options` already sets them.
///
/// # Errors
///
/// Returns an [`Error`] if the file cannot be read, the version cannot be
/// determined, or the document cannot be parsed.
#[instrument(skip(options))]
pub fn parse_file<P: AsRef<Path> + std::fmt::Debug>(
    path: P,
    options: &Options,
) -> Result<Document, Error> {
    let path = path.as_ref();
    let options = resolve_options(path, options)?;
    let input = std::fs::read_to_string(path)?;
    parse(&input, &options)
}

fn resolve_options(path: &Path, options: &Options) -> Result<Options, Error> {
    let mut options = options.clone();
    let version = match options.version.clone() {
        Some(version) => version,
        None => Repository::for_document(path)?.version()?,
    };
    if options.source_url.is_none() {
        match document_url(path, &options.url_prefix, &version) {
            Ok(url) => options.source_url = Some(url),
            // an explicit version lets documents outside a checkout through
            Err(error) if options.version.is_some() => {
                tracing::warn!(%error, "no published URL for document");
            }
            Err(error) => return Err(error),
        }
    }
    tracing::debug!(%version, source_url = ?options.source_url, "resolved options");
    options.version = Some(version);
    Ok(options)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::{fs, path::PathBuf};

    const POD: &str = "\
= Pod [core/v1]

=== /api/v1/pods
.Global query parameters
|===
| Parameter | Type | Description
| `pretty`
| `string`
| If 'true', then the output is pretty printed.
|===

HTTP method::
`GET`::
Description::
  list objects of kind Pod

.HTTP responses
|===
| HTTP code | Reponse body
| 200 - OK
| xref:../objects/index.adoc#io.k8s.api.core.v1.PodList[`PodList`] schema
|===
";

    fn checkout() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::create_dir_all(dir.path().join("rest_api/workloads_apis")).unwrap();
        fs::write(
            dir.path().join(".git/HEAD"),
            "ref: refs/heads/enterprise-4.10\n",
        )
        .unwrap();
        let document = dir.path().join("rest_api/workloads_apis/pod-core-v1.adoc");
        fs::write(&document, POD).unwrap();
        (dir, document)
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_parse_file_reads_version_from_checkout() {
        let (_dir, path) = checkout();
        let document = parse_file(&path, &Options::default()).unwrap();
        assert_eq!(
            document.url,
            "https://docs.openshift.com/container-platform/4.10/rest_api/workloads_apis/pod-core-v1.html"
        );
        assert_eq!(
            document.items[0].methods[0].responses[0]
                .response_body
                .hyperlink
                .as_deref(),
            Some(
                "https://docs.openshift.com/container-platform/4.10/rest_api/objects/index.html#io.k8s.api.core.v1.PodList"
            )
        );
    }

    #[test]
    fn test_parse_file_explicit_version_wins() {
        let (_dir, path) = checkout();
        let options = Options::builder()
            .with_version("4.8")
            .with_url_prefix("https://docs.example.com")
            .build();
        let document = parse_file(&path, &options).unwrap();
        assert_eq!(
            document.url,
            "https://docs.example.com/4.8/rest_api/workloads_apis/pod-core-v1.html"
        );
    }

    #[test]
    fn test_parse_file_outside_checkout_needs_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pod.adoc");
        fs::write(&path, POD).unwrap();

        let error = parse_file(&path, &Options::default()).unwrap_err();
        assert!(matches!(error, Error::VersionNotFound(_)), "{error}");

        let options = Options::builder().with_version("4.8").build();
        let document = parse_file(&path, &options).unwrap();
        assert!(document.url.ends_with("/pod.html"), "{}", document.url);
        assert_eq!(document.items.len(), 1);
    }

    #[test]
    fn test_parse_from_reader() {
        let options = Options::builder().with_version("4.8").build();
        let document = parse_from_reader(POD.as_bytes(), &options).unwrap();
        assert_eq!(document, parse(POD, &options).unwrap());
        assert_eq!(document.items[0].global_query_parameters[0].name, "pretty");
    }

    #[rstest::rstest]
    #[trace]
    fn for_each_file(#[files("fixtures/tests/**/*.adoc")] path: PathBuf) {
        let options = Options::builder().with_version("4.8").build();
        let test_file_path = path.with_extension("test");
        let input = fs::read_to_string(&path).unwrap();

        // files without a test file are expected to fail
        if test_file_path.exists() {
            let result = parse(&input, &options).unwrap();
            let test: Document =
                serde_json::from_str(&fs::read_to_string(test_file_path).unwrap()).unwrap();
            assert_eq!(test, result);
        } else {
            let error = parse(&input, &options).unwrap_err();
            assert!(error.location().is_some(), "{error}");
        }
    }

    #[test]
    fn test_error_detail_names_offending_line() {
        let input = "// generated\n= Pod\n";
        let Err(Error::InvalidTitle(ErrorDetail { location }, line)) =
            parse(input, &Options::default())
        else {
            panic!("expected an invalid title");
        };
        assert_eq!(line, "= Pod");
        assert_eq!(location, Location::new(2, 13, 18));
    }

    #[test]
    fn test_xref_without_version() {
        let error = parse(POD, &Options::default()).unwrap_err();
        assert!(matches!(error, Error::MissingVersion(..)));
    }
}
