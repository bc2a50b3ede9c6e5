//! CSV renderer for API reference documents.
//!
//! The first row holds the document URL and the second a fixed header of
//! 18 columns. Every parameter and response then gets a row of its own:
//! endpoint, section, subsection and method first, followed by blank cells up
//! to the column group of its section and subsection, then its values. Every
//! field is quoted.

use std::io::Write;

use apiref_converters_core::{Converter, Format, Options};
use apiref_parser::{Document, EndpointRef, MethodBlock, Parameter, Section, Subsection};

mod error;

pub use error::Error;

/// The second row of the output.
pub const HEADER: [&str; 18] = [
    "Endpoint",
    "Section",
    "Subsection",
    "HTTP method",
    "Global path parameters - Parameter",
    "Global path parameters - Type",
    "Global path parameters - Description",
    "Global query parameters - Parameter",
    "Global query parameters - Type",
    "Global query parameters - Description",
    "HTTP method - Query parameters - Parameter",
    "HTTP method - Query parameters - Type",
    "HTTP method - Query parameters - Description",
    "HTTP method - Body parameters - Parameter",
    "HTTP method - Body parameters - Type",
    "HTTP method - Body parameters - Description",
    "HTTP method - HTTP responses - HTTP code",
    "HTTP method - HTTP responses - HTTP Response body",
];

/// Columns of one parameter group: parameter, type and description.
const GROUP_WIDTH: usize = 3;

/// CSV converter processor.
#[derive(Clone, Debug)]
pub struct Processor {
    options: Options,
}

impl Converter for Processor {
    type Error = Error;

    fn new(options: Options) -> Self {
        Self { options }
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn format(&self) -> Format {
        Format::Csv
    }

    #[tracing::instrument(skip_all)]
    fn write_to<W: Write>(&self, doc: &Document, writer: W) -> Result<(), Self::Error> {
        let rows = build_rows(doc);
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .flexible(true)
            .from_writer(writer);
        for row in &rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        tracing::debug!(rows = rows.len(), "rendered CSV");
        Ok(())
    }
}

/// Lay the document out as CSV records, header rows included.
#[must_use]
pub fn build_rows(doc: &Document) -> Vec<Vec<&str>> {
    let mut rows = vec![vec![doc.url.as_str()], HEADER.to_vec()];
    for endpoint in &doc.items {
        for section in Section::GLOBAL {
            for parameter in endpoint.global_parameters(section) {
                let mut row = leading_cells(endpoint, section, None, None);
                row.extend(parameter_cells(parameter));
                rows.push(row);
            }
        }
        for method in &endpoint.methods {
            method_rows(&mut rows, endpoint, method);
        }
    }
    rows
}

fn method_rows<'a>(rows: &mut Vec<Vec<&'a str>>, endpoint: &'a EndpointRef, method: &'a MethodBlock) {
    for subsection in Subsection::PARAMETERS {
        for parameter in method.parameters(subsection) {
            let mut row = leading_cells(endpoint, Section::HttpMethod, Some(subsection), Some(method));
            row.extend(parameter_cells(parameter));
            rows.push(row);
        }
    }
    for response in &method.responses {
        let mut row = leading_cells(
            endpoint,
            Section::HttpMethod,
            Some(Subsection::HttpResponses),
            Some(method),
        );
        row.extend([response.http_code.as_str(), response.response_body.value.as_str()]);
        rows.push(row);
    }
}

/// Endpoint, section, subsection and method cells plus the blank padding
/// that moves the values under their column group.
fn leading_cells<'a>(
    endpoint: &'a EndpointRef,
    section: Section,
    subsection: Option<Subsection>,
    method: Option<&'a MethodBlock>,
) -> Vec<&'a str> {
    let mut row = vec![
        endpoint.endpoint.as_str(),
        section.label(),
        subsection.as_ref().map_or("", Subsection::label),
        method.map_or("", |method| method.method.as_str()),
    ];
    let padding = section_offset(section) + subsection.map_or(0, subsection_offset);
    row.resize(row.len() + padding, "");
    row
}

fn parameter_cells(parameter: &Parameter) -> [&str; 3] {
    [
        parameter.name.as_str(),
        parameter.r#type.value.as_str(),
        parameter.description.as_str(),
    ]
}

fn section_offset(section: Section) -> usize {
    match section {
        Section::GlobalPathParameters => 0,
        Section::GlobalQueryParameters => GROUP_WIDTH,
        Section::HttpMethod => 2 * GROUP_WIDTH,
    }
}

fn subsection_offset(subsection: Subsection) -> usize {
    match subsection {
        Subsection::QueryParameters => 0,
        Subsection::BodyParameters => GROUP_WIDTH,
        Subsection::HttpResponses => 2 * GROUP_WIDTH,
    }
}
