//! Grammars for the marker lines whose contents carry data.
//!
//! Every rule runs against a single line with its terminator removed.

use crate::model::HttpMethod;

peg::parser! {
    grammar marker_parser() for str {
        /// `= Title [metadata]`; the title ends at the last ` [`.
        pub(crate) rule title() -> &'input str
            = "= " title:$((!metadata() [_])*) metadata() { title }

        rule metadata() = " [" (!" [" [_])* ![_]

        /// ``* `/api/v1/pods` ``
        pub(crate) rule summary_endpoint() -> &'input str
            = "* `" endpoint:$([^'`']+) "`" [_]* { endpoint }

        /// ``- `GET`: list objects of kind Pod``
        pub(crate) rule summary_method() -> (HttpMethod, &'input str)
            = "- `" method:http_method() "`: " description:$([_]*) { (method, description) }

        rule http_method() -> HttpMethod
            = m:$(['A'..='Z']+) {? m.parse::<HttpMethod>().map_err(|_| "HTTP method") }

        /// ``xref:../objects/index.adoc#pod[`Pod`]``
        pub(crate) rule xref() -> (&'input str, &'input str)
            = "xref:" path:$([^'[']+) "[`" label:$([^'`' | ']']+) "`]" [_]* { (path, label) }
    }
}

pub(crate) fn title(line: &str) -> Option<&str> {
    marker_parser::title(line).ok()
}

pub(crate) fn summary_endpoint(line: &str) -> Option<&str> {
    marker_parser::summary_endpoint(line).ok()
}

pub(crate) fn summary_method(line: &str) -> Option<(HttpMethod, &str)> {
    marker_parser::summary_method(line).ok()
}

/// Split a cross-reference cell into its target path and label.
pub(crate) fn xref(cell: &str) -> Option<(&str, &str)> {
    marker_parser::xref(cell).ok()
}
