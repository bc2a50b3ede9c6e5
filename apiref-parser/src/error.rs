use std::{fmt, path::PathBuf};

use crate::model::Location;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid title line: {1:?}, position: {0}")]
    InvalidTitle(Detail, String),

    #[error("invalid summary entry: {1:?}, position: {0}")]
    InvalidSummaryEntry(Detail, String),

    #[error("summary method listed before any endpoint: {1:?}, position: {0}")]
    SummaryMethodWithoutEndpoint(Detail, String),

    #[error("invalid cross-reference: {1:?}, position: {0}")]
    InvalidCrossReference(Detail, String),

    #[error("cross-reference {1:?} needs a documentation version, position: {0}")]
    MissingVersion(Detail, String),

    #[error("unterminated table, position: {0}")]
    UnterminatedTable(Detail),

    #[error("incomplete table row: expected {expected} cells, found {found}, position: {detail}")]
    IncompleteTableRow {
        detail: Detail,
        expected: usize,
        found: usize,
    },

    #[error("missing description after `Description::`, position: {0}")]
    MissingDescription(Detail),

    #[error("{1} outside of an HTTP method, position: {0}")]
    OrphanMethodSection(Detail, String),

    #[error("{1} outside of an endpoint, position: {0}")]
    OrphanEndpointSection(Detail, String),

    #[error("a line is already pushed back, position: {0}")]
    PushbackOverflow(Detail),

    #[error("unable to determine documentation version from HEAD: {0:?}")]
    VersionNotFound(String),

    #[error("cannot locate repository for document: {0}")]
    InvalidDocumentPath(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Extract location information from this error if available.
    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::InvalidTitle(detail, ..)
            | Self::InvalidSummaryEntry(detail, ..)
            | Self::SummaryMethodWithoutEndpoint(detail, ..)
            | Self::InvalidCrossReference(detail, ..)
            | Self::MissingVersion(detail, ..)
            | Self::UnterminatedTable(detail)
            | Self::IncompleteTableRow { detail, .. }
            | Self::MissingDescription(detail)
            | Self::OrphanMethodSection(detail, ..)
            | Self::OrphanEndpointSection(detail, ..)
            | Self::PushbackOverflow(detail) => Some(&detail.location),
            Self::VersionNotFound(_) | Self::InvalidDocumentPath(_) | Self::Io(_) => None,
        }
    }

    /// Get advice for this error if available.
    #[must_use]
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Self::InvalidTitle(..) => {
                Some("The document title must look like `= Title [metadata]`")
            }
            Self::InvalidSummaryEntry(..) => Some(
                "Summary entries are either \"* `/api/...`\" endpoints or \"- `GET`: description\" methods",
            ),
            Self::SummaryMethodWithoutEndpoint(..) => {
                Some("List the \"* `/api/...`\" endpoint before its methods")
            }
            Self::InvalidCrossReference(..) => {
                Some("Cross-references must look like xref:../path/to/type.adoc[`Type`]")
            }
            Self::MissingVersion(..) => Some(
                "Pass a documentation version, or parse the file from inside its repository checkout",
            ),
            Self::UnterminatedTable(..) => Some("Tables are opened and closed with a `|===` line"),
            Self::IncompleteTableRow { .. } => {
                Some("Parameter tables have 3 columns and response tables have 2")
            }
            Self::MissingDescription(..) => {
                Some("`Description::` must be followed by the description line")
            }
            Self::OrphanMethodSection(..) => {
                Some("Method sections follow a method marker such as `GET`")
            }
            Self::OrphanEndpointSection(..) => {
                Some("Endpoint sections follow an `=== /api...` heading")
            }
            Self::VersionNotFound(..) => Some(
                "The repository must have a branch named like `enterprise-4.8` checked out",
            ),
            Self::PushbackOverflow(..) | Self::InvalidDocumentPath(..) | Self::Io(..) => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Detail {
    pub location: Location,
}

impl From<Location> for Detail {
    fn from(location: Location) -> Self {
        Self { location }
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Location {
            line,
            absolute_start,
            absolute_end,
        } = self.location;
        write!(f, "line {line} (bytes {absolute_start}..{absolute_end})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> Detail {
        Detail::from(Location::new(3, 20, 32))
    }

    #[test]
    fn test_error_detail_display() {
        assert_eq!(format!("{}", detail()), "line 3 (bytes 20..32)");
    }

    #[test]
    fn test_error_invalid_title_display() {
        let error = Error::InvalidTitle(detail(), "= Foo API".to_string());
        assert_eq!(
            format!("{error}"),
            "invalid title line: \"= Foo API\", position: line 3 (bytes 20..32)"
        );
    }

    #[test]
    fn test_error_incomplete_row_display() {
        let error = Error::IncompleteTableRow {
            detail: detail(),
            expected: 3,
            found: 2,
        };
        assert_eq!(
            format!("{error}"),
            "incomplete table row: expected 3 cells, found 2, position: line 3 (bytes 20..32)"
        );
    }

    #[test]
    fn test_location_and_advice() {
        let error = Error::UnterminatedTable(detail());
        assert_eq!(error.location(), Some(&Location::new(3, 20, 32)));
        assert!(error.advice().is_some());

        let error = Error::VersionNotFound("ref: refs/heads/main".to_string());
        assert_eq!(error.location(), None);
    }
}
