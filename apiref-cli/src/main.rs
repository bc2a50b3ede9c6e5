use std::path::{Path, PathBuf};

use apiref_converters_core::{Converter, Format, GeneratorMetadata, STDOUT_PATH};
use apiref_parser::Repository;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod error;

/// Converts an AsciiDoc REST API reference into JSON, CSV or a spreadsheet
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// AsciiDoc reference document to convert
    #[arg(value_name = "ADOC")]
    adoc: PathBuf,

    /// Output format
    #[arg(short, long, value_parser = clap::value_parser!(Format), default_value = "json")]
    format: Format,

    /// Output file, stdout when omitted or `-` (required for xlsx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log debug messages to stderr
    #[arg(short, long)]
    debug: bool,

    /// Documentation host that cross-references resolve against
    #[arg(long, value_name = "URL", value_parser = parse_url_prefix)]
    url_prefix: Option<String>,

    /// Documentation version (`major.minor`), read from `.git/HEAD` when omitted
    #[arg(long, value_name = "MAJOR.MINOR")]
    doc_version: Option<String>,
}

impl Args {
    fn output(&self) -> Option<&Path> {
        self.output
            .as_deref()
            .filter(|path| path.as_os_str() != STDOUT_PATH)
    }
}

/// Links in the workbook must be absolute, so the prefix needs a web scheme.
fn parse_url_prefix(value: &str) -> Result<String, String> {
    let host = ["https://", "http://"]
        .iter()
        .find_map(|scheme| value.strip_prefix(scheme));
    match host {
        Some(host) if !host.trim_matches('/').is_empty() => Ok(value.to_string()),
        Some(_) | None => Err(format!(
            "expected an http:// or https:// URL such as {}",
            apiref_parser::DEFAULT_URL_PREFIX
        )),
    }
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);
    run(&args)
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tracing::instrument(skip_all, fields(adoc = %args.adoc.display(), format = %args.format))]
fn run(args: &Args) -> miette::Result<()> {
    if args.format.requires_output_file() && args.output().is_none() {
        return Err(miette::miette!(
            help = "pass --output <file>",
            "{} output is binary and cannot be written to stdout",
            args.format
        ));
    }

    let mut options = apiref_parser::Options::builder();
    if let Some(url_prefix) = &args.url_prefix {
        options = options.with_url_prefix(url_prefix);
    }
    if let Some(version) = &args.doc_version {
        options = options.with_version(version);
    }
    let doc = apiref_parser::parse_file(&args.adoc, &options.build())
        .map_err(|error| error::report(error, &args.adoc))?;
    tracing::debug!(title = %doc.title, endpoints = doc.items.len(), "parsed document");

    let mut options = apiref_converters_core::Options::builder().generator_metadata(
        GeneratorMetadata::new(env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION")),
    );
    if args.format == Format::Xlsx
        && let Some(revision) = Repository::for_document(&args.adoc)
            .ok()
            .and_then(|repository| repository.revision())
    {
        options = options.revision(revision);
    }
    let options = options.build();

    tracing::trace!(format = %args.format, "dispatching to converter");
    match args.format {
        Format::Json => {
            convert::<apiref_converters_json::Processor>(options, &doc, args.output.as_deref())
        }
        Format::Csv => {
            convert::<apiref_converters_csv::Processor>(options, &doc, args.output.as_deref())
        }
        Format::Xlsx => {
            convert::<apiref_converters_xlsx::Processor>(options, &doc, args.output.as_deref())
        }
    }
}

fn convert<C>(
    options: apiref_converters_core::Options,
    doc: &apiref_parser::Document,
    output: Option<&Path>,
) -> miette::Result<()>
where
    C: Converter,
    C::Error: std::error::Error + Send + Sync + 'static,
{
    C::new(options).convert(doc, output).into_diagnostic()
}
