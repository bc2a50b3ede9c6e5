//! Output normalization utilities for test comparisons.

/// Normalizes output for comparison by removing trailing whitespace from each line.
///
/// # Example
///
/// ```
/// use apiref_converters_dev::output::remove_lines_trailing_whitespace;
///
/// let input = "line1   \nline2\t\nline3";
/// let normalized = remove_lines_trailing_whitespace(input);
/// assert_eq!(normalized, "line1\nline2\nline3");
/// ```
#[must_use]
pub fn remove_lines_trailing_whitespace(output: &str) -> String {
    output
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

