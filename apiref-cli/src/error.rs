use std::{fs, path::Path};

use apiref_parser::{Error as ParserError, Location};
use miette::{Diagnostic, NamedSource, SourceSpan};

/// Parser error with the offending line of the document attached.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic()]
pub(crate) struct RichError {
    message: String,

    #[help]
    advice: Option<String>,

    #[source_code]
    src: NamedSource<String>,

    #[label("{position_advice}")]
    span: SourceSpan,
    position_advice: String,
}

/// Plain parser error, when the source cannot be shown.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{error}")]
pub(crate) struct PlainError {
    error: ParserError,

    #[help]
    advice: Option<String>,
}

fn source_span_from_location(location: &Location) -> SourceSpan {
    SourceSpan::new(location.absolute_start.into(), location.len())
}

/// Turn a parser error into a report, labelling the offending line of `path`
/// when the error carries a location.
pub(crate) fn report(error: ParserError, path: &Path) -> miette::Report {
    let advice = error.advice().map(str::to_string);
    let source = error
        .location()
        .copied()
        .and_then(|location| fs::read_to_string(path).ok().map(|source| (location, source)));
    let Some((location, source)) = source else {
        return miette::Report::new(PlainError { error, advice });
    };
    miette::Report::new(RichError {
        message: error.to_string(),
        advice,
        src: NamedSource::new(path.display().to_string(), source),
        span: source_span_from_location(&location),
        position_advice: format!("error occurred here ({location})"),
    })
}
