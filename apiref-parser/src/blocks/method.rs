use crate::{
    blocks::{
        is_endpoint_marker,
        parameters::{parse_parameters, parse_responses},
    },
    error::Error,
    line_source::{Line, LineSource},
    model::{HttpMethod, MethodBlock, Subsection},
    xref::LinkResolver,
};

const DESCRIPTION_MARKER: &str = "Description::";

/// Parse the method blocks that follow an `HTTP method::` marker.
///
/// Stops at the next endpoint heading, which is pushed back for the caller, or
/// at end of input. The block being accumulated is finalised in both cases.
#[tracing::instrument(level = "debug", skip(lines, resolver))]
pub(crate) fn parse_methods(
    lines: &mut LineSource<'_>,
    resolver: &LinkResolver,
) -> Result<Vec<MethodBlock>, Error> {
    let mut methods = Vec::new();
    let mut current: Option<MethodBlock> = None;

    while let Some(line) = lines.next() {
        tracing::trace!(line = line.number, text = line.content(), "method block");
        if line.is_blank() {
            continue;
        }
        if let Some(method) = HttpMethod::from_marker(line.text) {
            tracing::debug!(%method, "HTTP method");
            if let Some(finished) = current.replace(MethodBlock::new(method)) {
                methods.push(finished);
            }
        } else if line.text.starts_with(DESCRIPTION_MARKER) {
            let block = in_method(&mut current, &line, DESCRIPTION_MARKER)?;
            let Some(description) = lines.next() else {
                return Err(Error::MissingDescription(line.detail()));
            };
            block.description = description.text.trim().to_string();
        } else if let Some(subsection) = Subsection::from_marker(line.text) {
            let block = in_method(&mut current, &line, subsection.label())?;
            match subsection {
                Subsection::QueryParameters => {
                    block.query_parameters = parse_parameters(lines, resolver)?;
                }
                Subsection::BodyParameters => {
                    block.body_parameters = parse_parameters(lines, resolver)?;
                }
                Subsection::HttpResponses => {
                    block.responses = parse_responses(lines, resolver)?;
                }
            }
        } else if is_endpoint_marker(line.text) {
            tracing::debug!(line = line.number, "end of method blocks");
            lines.pushback(line)?;
            break;
        }
    }

    methods.extend(current);
    Ok(methods)
}

fn in_method<'m>(
    current: &'m mut Option<MethodBlock>,
    line: &Line<'_>,
    marker: &str,
) -> Result<&'m mut MethodBlock, Error> {
    current
        .as_mut()
        .ok_or_else(|| Error::OrphanMethodSection(line.detail(), marker.to_string()))
}
