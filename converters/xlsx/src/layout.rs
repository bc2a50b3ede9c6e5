//! Row plans for the three worksheets.
//!
//! A plan lists, row by row, which cells hold which text, which of them are
//! hyperlinks and which column range is filled with a band colour. Building
//! the plan does not touch the workbook, so the layout is tested on its own.

use std::borrow::Cow;

use apiref_converters_core::Options;
use apiref_parser::{Document, EndpointRef, MethodBlock, Parameter, Section, Subsection, TypeRef};

/// Placeholder written into every column of an empty table.
pub(crate) const EMPTY_CELL: &str = "-";

/// Sheet name used when the title leaves no valid name.
pub(crate) const FALLBACK_SHEET_NAME: &str = "Reference";

const SUMMARY_SHEET_NAME: &str = "Summary";
const INFO_SHEET_NAME: &str = "Info";
const MAX_SHEET_NAME_LEN: usize = 31;
const INVALID_SHEET_NAME_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Columns of the reference sheet.
mod column {
    pub(crate) const ENDPOINT: u16 = 0;
    pub(crate) const SECTION: u16 = 1;
    pub(crate) const METHOD: u16 = 2;
    pub(crate) const NAME: u16 = 3;
    pub(crate) const TYPE: u16 = 4;
    pub(crate) const DESCRIPTION: u16 = 5;
}

/// Band colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fill {
    Endpoint,
    Section,
    Method,
    Subsection,
}

impl Fill {
    pub(crate) fn rgb(self) -> u32 {
        match self {
            Self::Endpoint => 0x00D9_EAD3,
            Self::Section => 0x00FC_E5CD,
            Self::Method => 0x00CF_E2F3,
            Self::Subsection => 0x00FF_F2CC,
        }
    }
}

/// A coloured span of a row, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Band {
    pub(crate) fill: Fill,
    pub(crate) first: u16,
    pub(crate) last: u16,
}

impl Band {
    pub(crate) fn contains(&self, column: u16) -> bool {
        (self.first..=self.last).contains(&column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Cell<'a> {
    pub(crate) column: u16,
    pub(crate) text: Cow<'a, str>,
    pub(crate) hyperlink: Option<&'a str>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Row<'a> {
    pub(crate) cells: Vec<Cell<'a>>,
    pub(crate) band: Option<Band>,
}

impl<'a> Row<'a> {
    fn new() -> Self {
        Self::default()
    }

    /// Add a text cell; empty text leaves the cell blank.
    fn text(mut self, column: u16, text: impl Into<Cow<'a, str>>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.cells.push(Cell {
                column,
                text,
                hyperlink: None,
            });
        }
        self
    }

    fn link(mut self, column: u16, text: &'a str, hyperlink: &'a str) -> Self {
        self.cells.push(Cell {
            column,
            text: Cow::Borrowed(text),
            hyperlink: Some(hyperlink),
        });
        self
    }

    fn type_ref(self, column: u16, type_ref: &'a TypeRef) -> Self {
        match type_ref.hyperlink.as_deref() {
            Some(hyperlink) => self.link(column, &type_ref.value, hyperlink),
            None => self.text(column, type_ref.value.as_str()),
        }
    }

    fn fill(mut self, fill: Fill, first: u16, last: u16) -> Self {
        self.band = Some(Band { fill, first, last });
        self
    }

    pub(crate) fn cell(&self, column: u16) -> Option<&Cell<'a>> {
        self.cells.iter().find(|cell| cell.column == column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SheetPlan<'a> {
    pub(crate) name: String,
    pub(crate) rows: Vec<Row<'a>>,
    pub(crate) widths: Vec<(u16, f64)>,
    /// Column whose cells wrap their text.
    pub(crate) wrapped: Option<u16>,
}

/// Endpoints with their summary methods.
pub(crate) fn summary_sheet(doc: &Document) -> SheetPlan<'_> {
    let mut rows = Vec::new();
    for (endpoint, methods) in &doc.summary {
        rows.push(Row::new().text(0, endpoint.as_str()).fill(Fill::Endpoint, 0, 2));
        for entry in methods {
            rows.push(
                Row::new()
                    .text(1, entry.method.as_str())
                    .text(2, entry.description.as_str()),
            );
        }
    }
    SheetPlan {
        name: SUMMARY_SHEET_NAME.to_string(),
        rows,
        widths: vec![(2, 90.0)],
        wrapped: None,
    }
}

/// The full reference, named after the document title.
pub(crate) fn reference_sheet(doc: &Document) -> SheetPlan<'_> {
    let mut rows = vec![Row::new().link(column::ENDPOINT, &doc.url, &doc.url)];
    for endpoint in &doc.items {
        endpoint_rows(&mut rows, endpoint);
    }
    SheetPlan {
        name: sheet_name(&doc.title),
        rows,
        widths: vec![
            (column::SECTION, 25.0),
            (column::METHOD, 30.0),
            (column::NAME, 30.0),
            (column::TYPE, 20.0),
            (column::DESCRIPTION, 90.0),
        ],
        wrapped: Some(column::DESCRIPTION),
    }
}

fn endpoint_rows<'a>(rows: &mut Vec<Row<'a>>, endpoint: &'a EndpointRef) {
    rows.push(
        Row::new()
            .text(column::ENDPOINT, endpoint.endpoint.as_str())
            .fill(Fill::Endpoint, column::ENDPOINT, column::DESCRIPTION),
    );
    for section in Section::GLOBAL {
        rows.push(
            parameter_header(column::SECTION, section.label())
                .fill(Fill::Section, column::SECTION, column::DESCRIPTION),
        );
        parameter_rows(rows, endpoint.global_parameters(section));
    }
    rows.push(
        Row::new()
            .text(column::SECTION, Section::HttpMethod.label())
            .text(column::METHOD, "Method")
            .text(column::DESCRIPTION, "Description")
            .fill(Fill::Section, column::SECTION, column::DESCRIPTION),
    );
    for method in &endpoint.methods {
        method_rows(rows, method);
    }
    rows.push(Row::new());
}

fn method_rows<'a>(rows: &mut Vec<Row<'a>>, method: &'a MethodBlock) {
    rows.push(
        Row::new()
            .text(column::METHOD, method.method.as_str())
            .text(column::DESCRIPTION, method.description.as_str())
            .fill(Fill::Method, column::METHOD, column::DESCRIPTION),
    );
    for subsection in Subsection::PARAMETERS {
        rows.push(
            parameter_header(column::METHOD, subsection_caption(method, subsection))
                .fill(Fill::Subsection, column::METHOD, column::DESCRIPTION),
        );
        parameter_rows(rows, method.parameters(subsection));
    }
    rows.push(
        Row::new()
            .text(
                column::METHOD,
                subsection_caption(method, Subsection::HttpResponses),
            )
            .text(column::NAME, "HTTP code")
            .text(column::TYPE, "Response body")
            .fill(Fill::Subsection, column::METHOD, column::DESCRIPTION),
    );
    if method.responses.is_empty() {
        rows.push(
            Row::new()
                .text(column::NAME, EMPTY_CELL)
                .text(column::TYPE, EMPTY_CELL),
        );
    }
    for response in &method.responses {
        rows.push(
            Row::new()
                .text(column::NAME, response.http_code.as_str())
                .type_ref(column::TYPE, &response.response_body),
        );
    }
}

fn parameter_header<'a>(column: u16, caption: impl Into<Cow<'a, str>>) -> Row<'a> {
    Row::new()
        .text(column, caption)
        .text(column::NAME, "Parameter")
        .text(column::TYPE, "Type")
        .text(column::DESCRIPTION, "Description")
}

fn parameter_rows<'a>(rows: &mut Vec<Row<'a>>, parameters: &'a [Parameter]) {
    if parameters.is_empty() {
        rows.push(
            Row::new()
                .text(column::NAME, EMPTY_CELL)
                .text(column::TYPE, EMPTY_CELL)
                .text(column::DESCRIPTION, EMPTY_CELL),
        );
    }
    for parameter in parameters {
        rows.push(
            Row::new()
                .text(column::NAME, parameter.name.as_str())
                .type_ref(column::TYPE, &parameter.r#type)
                .text(column::DESCRIPTION, parameter.description.trim_end()),
        );
    }
}

/// `(GET: Query parameters)`
fn subsection_caption(method: &MethodBlock, subsection: Subsection) -> String {
    format!("({}: {})", method.method, subsection)
}

/// Generation time, generator, source revision and the document link.
pub(crate) fn info_sheet<'a>(
    doc: &'a Document,
    options: &Options,
    generated_at: &str,
) -> SheetPlan<'a> {
    let generator = options.generator_metadata();
    let revision = options.revision().unwrap_or("unknown");
    SheetPlan {
        name: INFO_SHEET_NAME.to_string(),
        rows: vec![
            Row::new().text(
                0,
                format!(
                    "This book is generated by {} {} at {generated_at}.",
                    generator.name(),
                    generator.version()
                ),
            ),
            Row::new().text(0, format!("The source revision is: {revision}.")),
            Row::new().link(0, &doc.url, &doc.url),
        ],
        widths: Vec::new(),
        wrapped: None,
    }
}

/// Turn a title into a valid worksheet name: at most 31 characters, none of
/// `[]:*?/\`, no surrounding apostrophes, distinct from the other sheets.
pub(crate) fn sheet_name(title: &str) -> String {
    let name: String = title
        .chars()
        .filter(|c| !INVALID_SHEET_NAME_CHARS.contains(c))
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    let name = name.trim().trim_matches('\'');
    if name.is_empty()
        || [SUMMARY_SHEET_NAME, INFO_SHEET_NAME, "History"]
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name))
    {
        return FALLBACK_SHEET_NAME.to_string();
    }
    name.to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use apiref_converters_dev::sample;
    use pretty_assertions::assert_eq;

    fn texts<'r>(row: &'r Row<'_>) -> Vec<(u16, &'r str)> {
        row.cells
            .iter()
            .map(|cell| (cell.column, cell.text.as_ref()))
            .collect()
    }

    #[rstest::rstest]
    #[case::plain("Pod", "Pod")]
    #[case::invalid_chars("Foo [core/v1]: *?", "Foo corev1")]
    #[case::too_long(
        "APIRequestCount [apiserver.openshift.io/v1]",
        "APIRequestCount apiserver.opens"
    )]
    #[case::apostrophes("'quoted'", "quoted")]
    #[case::reserved("summary", FALLBACK_SHEET_NAME)]
    #[case::empty("[]", FALLBACK_SHEET_NAME)]
    fn test_sheet_name(#[case] title: &str, #[case] expected: &str) {
        let name = sheet_name(title);
        assert_eq!(name, expected);
        assert!(name.chars().count() <= MAX_SHEET_NAME_LEN);
    }

    #[test]
    fn test_summary_sheet() {
        let doc = sample::pods().unwrap();
        let plan = summary_sheet(&doc);
        assert_eq!(plan.name, "Summary");
        assert_eq!(plan.rows.len(), 5);
        assert_eq!(
            plan.rows[0].band,
            Some(Band {
                fill: Fill::Endpoint,
                first: 0,
                last: 2
            })
        );
        assert_eq!(
            texts(&plan.rows[2]),
            vec![(1, "POST"), (2, "create a Pod")]
        );
        assert_eq!(plan.widths, vec![(2, 90.0)]);
    }

    #[test]
    fn test_reference_sheet_layout() {
        let doc = sample::pods().unwrap();
        let plan = reference_sheet(&doc);
        assert_eq!(plan.name, "Pod");
        assert_eq!(plan.wrapped, Some(column::DESCRIPTION));

        let url = plan.rows[0].cell(0).unwrap();
        assert_eq!(url.hyperlink, Some(sample::PODS_URL));

        let bands: Vec<Option<Fill>> = plan
            .rows
            .iter()
            .map(|row| row.band.map(|band| band.fill))
            .collect();
        let expected = [
            None,                   // document url
            Some(Fill::Endpoint),   // /api/v1/namespaces/{namespace}/pods
            Some(Fill::Section),    // Global path parameters
            None,                   // namespace
            Some(Fill::Section),    // Global query parameters
            None,                   // pretty
            Some(Fill::Section),    // HTTP method
            Some(Fill::Method),     // GET
            Some(Fill::Subsection), // (GET: Query parameters)
            None,                   // limit
            Some(Fill::Subsection), // (GET: Body parameters)
            None,                   // -
            Some(Fill::Subsection), // (GET: HTTP responses)
            None,                   // 200
            None,                   // 401
            Some(Fill::Method),     // POST
            Some(Fill::Subsection), // (POST: Query parameters)
            None,                   // -
            Some(Fill::Subsection), // (POST: Body parameters)
            None,                   // body
            Some(Fill::Subsection), // (POST: HTTP responses)
            None,                   // 201
            None,                   // blank
            Some(Fill::Endpoint),   // /api/v1/watch/pods
        ];
        assert_eq!(&bands[..expected.len()], &expected[..]);

        assert_eq!(
            texts(&plan.rows[8]),
            vec![
                (2, "(GET: Query parameters)"),
                (3, "Parameter"),
                (4, "Type"),
                (5, "Description")
            ]
        );
        assert_eq!(texts(&plan.rows[11]), vec![(3, "-"), (4, "-"), (5, "-")]);
        let pod_list = plan.rows[13].cell(column::TYPE).unwrap();
        assert_eq!(pod_list.text, "PodList");
        assert!(pod_list.hyperlink.unwrap().ends_with("#io.k8s.api.core.v1.PodList"));
        assert_eq!(plan.rows[14].cell(column::TYPE).unwrap().hyperlink, None);
    }

    #[test]
    fn test_method_without_tables_gets_placeholders() {
        let doc = sample::pods().unwrap();
        let plan = reference_sheet(&doc);
        let tail: Vec<Vec<(u16, &str)>> = plan.rows[23..].iter().map(texts).collect();
        assert_eq!(
            tail,
            vec![
                vec![(0, "/api/v1/watch/pods")],
                vec![
                    (1, "Global path parameters"),
                    (3, "Parameter"),
                    (4, "Type"),
                    (5, "Description")
                ],
                vec![(3, "-"), (4, "-"), (5, "-")],
                vec![
                    (1, "Global query parameters"),
                    (3, "Parameter"),
                    (4, "Type"),
                    (5, "Description")
                ],
                vec![(3, "-"), (4, "-"), (5, "-")],
                vec![(1, "HTTP method"), (2, "Method"), (5, "Description")],
                vec![
                    (2, "GET"),
                    (
                        5,
                        "watch individual changes to a list of Pod. deprecated: use the 'watch' parameter with a list operation instead."
                    )
                ],
                vec![
                    (2, "(GET: Query parameters)"),
                    (3, "Parameter"),
                    (4, "Type"),
                    (5, "Description")
                ],
                vec![(3, "-"), (4, "-"), (5, "-")],
                vec![
                    (2, "(GET: Body parameters)"),
                    (3, "Parameter"),
                    (4, "Type"),
                    (5, "Description")
                ],
                vec![(3, "-"), (4, "-"), (5, "-")],
                vec![(2, "(GET: HTTP responses)"), (3, "HTTP code"), (4, "Response body")],
                vec![(3, "-"), (4, "-")],
                vec![],
            ]
        );
    }

    #[test]
    fn test_info_sheet() {
        let doc = sample::pods().unwrap();
        let options = sample::converter_options();
        let plan = info_sheet(&doc, &options, "2021-08-01 12:00:00");
        assert_eq!(plan.name, "Info");
        assert_eq!(
            texts(&plan.rows[0]),
            vec![(
                0,
                "This book is generated by adoc2xlsx 0.1.0 at 2021-08-01 12:00:00."
            )]
        );
        assert_eq!(
            texts(&plan.rows[1]),
            vec![(0, "The source revision is: 3f9c2d0e8b7a6f5e4d3c2b1a09f8e7d6c5b4a392.")]
        );
        assert_eq!(plan.rows[2].cell(0).unwrap().hyperlink, Some(sample::PODS_URL));

        let plan = info_sheet(&doc, &Options::default(), "now");
        assert_eq!(texts(&plan.rows[1]), vec![(0, "The source revision is: unknown.")]);
    }
}
