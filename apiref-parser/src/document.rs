//! Top-level driver: scans a document and assembles the [`Document`] model.

use crate::{
    Options,
    blocks::{is_endpoint_marker, method::parse_methods, parameters::parse_parameters},
    error::Error,
    line_source::{Line, LineSource},
    markers,
    model::{Document, EndpointRef, Section, SummaryMethod},
    xref::LinkResolver,
};

const TITLE_MARKER: &str = "= ";
const SUMMARY_MARKER: &str = "== API endpoints";
const SUMMARY_ENDPOINT_MARKER: &str = "* ";
const SUMMARY_METHOD_MARKER: &str = "- ";
const HTTP_METHOD_MARKER: &str = "HTTP method::";
const ENDPOINT_HEADING: &str = "=== ";

#[derive(Debug)]
pub(crate) struct DocumentParser<'a> {
    lines: LineSource<'a>,
    resolver: LinkResolver,
    document: Document,
    /// The endpoint section being accumulated.
    current: Option<EndpointRef>,
    /// Last endpoint registered by a summary bullet.
    summary_endpoint: Option<String>,
    in_summary: bool,
}

impl<'a> DocumentParser<'a> {
    pub(crate) fn new(input: &'a str, options: &Options) -> Self {
        Self {
            lines: LineSource::new(input),
            resolver: options.link_resolver(),
            document: Document {
                url: options.source_url.clone().unwrap_or_default(),
                ..Document::default()
            },
            current: None,
            summary_endpoint: None,
            in_summary: false,
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub(crate) fn parse(mut self) -> Result<Document, Error> {
        while let Some(line) = self.lines.next() {
            tracing::trace!(line = line.number, text = line.content(), "document");
            self.dispatch(line)?;
        }
        self.finish_endpoint();
        tracing::debug!(
            title = %self.document.title,
            endpoints = self.document.items.len(),
            "parsed document"
        );
        Ok(self.document)
    }

    fn dispatch(&mut self, line: Line<'a>) -> Result<(), Error> {
        let text = line.text;
        if text.starts_with(TITLE_MARKER) {
            self.title(&line)
        } else if text.starts_with(SUMMARY_MARKER) {
            tracing::debug!("summary start");
            self.in_summary = true;
            Ok(())
        } else if self.in_summary && text.starts_with(SUMMARY_ENDPOINT_MARKER) {
            self.summary_endpoint(&line)
        } else if self.in_summary && text.starts_with(SUMMARY_METHOD_MARKER) {
            self.summary_method(&line)
        } else if is_endpoint_marker(text) {
            self.start_endpoint(&line);
            Ok(())
        } else if let Some(section) = Section::from_global_marker(text) {
            let mut endpoint = self.take_endpoint(&line, section.label())?;
            let parameters = parse_parameters(&mut self.lines, &self.resolver)?;
            match section {
                Section::GlobalPathParameters => endpoint.global_path_parameters = parameters,
                Section::GlobalQueryParameters => endpoint.global_query_parameters = parameters,
                Section::HttpMethod => {}
            }
            self.current = Some(endpoint);
            Ok(())
        } else if text.starts_with(HTTP_METHOD_MARKER) {
            let mut endpoint = self.take_endpoint(&line, HTTP_METHOD_MARKER)?;
            endpoint
                .methods
                .extend(parse_methods(&mut self.lines, &self.resolver)?);
            self.current = Some(endpoint);
            Ok(())
        } else {
            Ok(())
        }
    }

    fn title(&mut self, line: &Line<'_>) -> Result<(), Error> {
        let content = line.content().trim_end();
        let title = markers::title(content)
            .ok_or_else(|| Error::InvalidTitle(line.detail(), content.to_string()))?;
        tracing::debug!(title, "title");
        self.document.title = title.to_string();
        Ok(())
    }

    fn summary_endpoint(&mut self, line: &Line<'_>) -> Result<(), Error> {
        let content = line.content().trim_end();
        let endpoint = markers::summary_endpoint(content)
            .ok_or_else(|| Error::InvalidSummaryEntry(line.detail(), content.to_string()))?;
        tracing::debug!(endpoint, "summary endpoint");
        self.document.summary.entry(endpoint.to_string()).or_default();
        self.summary_endpoint = Some(endpoint.to_string());
        Ok(())
    }

    fn summary_method(&mut self, line: &Line<'_>) -> Result<(), Error> {
        let content = line.content().trim_end();
        let (method, description) = markers::summary_method(content)
            .ok_or_else(|| Error::InvalidSummaryEntry(line.detail(), content.to_string()))?;
        let Some(methods) = self
            .summary_endpoint
            .as_ref()
            .and_then(|endpoint| self.document.summary.get_mut(endpoint))
        else {
            return Err(Error::SummaryMethodWithoutEndpoint(
                line.detail(),
                content.to_string(),
            ));
        };
        tracing::debug!(%method, "summary method");
        methods.push(SummaryMethod {
            method,
            description: description.to_string(),
        });
        Ok(())
    }

    fn start_endpoint(&mut self, line: &Line<'_>) {
        self.in_summary = false;
        self.finish_endpoint();
        let endpoint = line
            .content()
            .strip_prefix(ENDPOINT_HEADING)
            .unwrap_or_default()
            .trim();
        tracing::debug!(endpoint, "endpoint");
        self.current = Some(EndpointRef::new(endpoint));
    }

    fn finish_endpoint(&mut self) {
        if let Some(endpoint) = self.current.take() {
            tracing::debug!(
                endpoint = %endpoint.endpoint,
                methods = endpoint.methods.len(),
                "finished endpoint"
            );
            self.document.items.push(endpoint);
        }
    }

    /// Take the endpoint being accumulated so a nested parser can fill it in.
    fn take_endpoint(&mut self, line: &Line<'_>, marker: &str) -> Result<EndpointRef, Error> {
        self.current
            .take()
            .ok_or_else(|| Error::OrphanEndpointSection(line.detail(), marker.to_string()))
    }
}
