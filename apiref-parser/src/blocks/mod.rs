//! Parsers for the blocks nested under an endpoint section.

pub(crate) mod method;
pub(crate) mod parameters;

/// Heading prefix that opens an endpoint section.
pub(crate) const ENDPOINT_MARKER: &str = "=== /api";

pub(crate) fn is_endpoint_marker(line: &str) -> bool {
    line.starts_with(ENDPOINT_MARKER)
}
