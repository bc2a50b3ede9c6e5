//! Extraction of raw cells from `|===` delimited tables.

use crate::{
    error::{Detail, Error},
    line_source::LineSource,
};

const TABLE_DELIMITER: &str = "|===";

/// A raw table cell and the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) text: String,
    pub(crate) detail: Detail,
}

/// Raw cells of one table, in reading order.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Cells {
    pub(crate) cells: Vec<Cell>,
    /// Position of the opening delimiter.
    pub(crate) detail: Option<Detail>,
}

impl Cells {
    /// Group the cells into rows of `width` cells.
    ///
    /// A trailing partial row is reported at the line of its first cell.
    pub(crate) fn rows(&self, width: usize) -> Result<std::slice::ChunksExact<'_, Cell>, Error> {
        let rows = self.cells.chunks_exact(width);
        let remainder = rows.remainder();
        if let Some(first) = remainder.first() {
            return Err(Error::IncompleteTableRow {
                detail: first.detail,
                expected: width,
                found: remainder.len(),
            });
        }
        Ok(rows)
    }
}

/// Consume the next table from `lines` and return its body cells.
///
/// Lines up to the opening delimiter (`[cols=...]` directives and blank lines)
/// are skipped and the header line that follows it is discarded. Body lines are
/// HTML-entity unescaped, their `\r\n` terminators turned into `\n`, joined,
/// and split on a `|` followed by a space or a newline.
#[tracing::instrument(level = "trace", skip(lines))]
pub(crate) fn extract_cells(lines: &mut LineSource<'_>) -> Result<Cells, Error> {
    let opening = loop {
        let Some(line) = lines.next() else {
            return Err(Error::UnterminatedTable(lines.detail()));
        };
        if line.text.starts_with("[cols=") {
            continue;
        }
        if line.text.starts_with(TABLE_DELIMITER) {
            break line;
        }
    };

    // header row
    if lines.next().is_none() {
        return Err(Error::UnterminatedTable(opening.detail()));
    }

    let mut body = String::new();
    // body offset at which each line starts
    let mut starts: Vec<(usize, Detail)> = Vec::new();
    loop {
        let Some(line) = lines.next() else {
            return Err(Error::UnterminatedTable(opening.detail()));
        };
        if line.text.starts_with(TABLE_DELIMITER) {
            break;
        }
        starts.push((body.len(), line.detail()));
        let decoded = html_escape::decode_html_entities(line.text);
        match decoded.strip_suffix("\r\n") {
            Some(content) => {
                body.push_str(content);
                body.push('\n');
            }
            None => body.push_str(&decoded),
        }
    }

    let line_of = |offset: usize| {
        let index = starts.partition_point(|(start, _)| *start <= offset);
        index
            .checked_sub(1)
            .and_then(|index| starts.get(index))
            .map_or_else(|| opening.detail(), |(_, detail)| *detail)
    };
    let cells: Vec<Cell> = split_cells(&body)
        .into_iter()
        // everything before the first delimiter
        .skip(1)
        .map(|(offset, text)| Cell {
            text: text.to_string(),
            detail: line_of(offset),
        })
        .collect();
    tracing::trace!(?cells, "extracted table cells");
    Ok(Cells {
        cells,
        detail: Some(opening.detail()),
    })
}

/// Split a table body on cell delimiters: `|` followed by a space or a newline.
///
/// Each piece comes with the offset of the delimiter that opens it.
fn split_cells(body: &str) -> Vec<(usize, &str)> {
    let mut cells = Vec::new();
    let mut opened_at = 0;
    let mut start = 0;
    for (idx, _) in body.match_indices('|') {
        if idx < start {
            continue;
        }
        let after = body.get(idx + 1..).unwrap_or_default();
        if after.starts_with([' ', '\n']) {
            cells.push((opened_at, body.get(start..idx).unwrap_or_default()));
            opened_at = idx;
            start = idx + 2;
        }
    }
    cells.push((opened_at, body.get(start..).unwrap_or_default()));
    cells
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(body: &str) -> Vec<&str> {
        split_cells(body).into_iter().map(|(_, text)| text).collect()
    }

    fn texts_of(cells: &Cells) -> Vec<&str> {
        cells.cells.iter().map(|cell| cell.text.as_str()).collect()
    }

    #[test]
    fn test_split_cells() {
        assert_eq!(
            texts("| `limit`\n| `integer`\n| Max results\n"),
            vec!["", "`limit`\n", "`integer`\n", "Max results\n"]
        );
        assert_eq!(texts(""), vec![""]);
        assert_eq!(texts("| a | b|c \n"), vec!["", "a ", "b|c \n"]);
        assert_eq!(texts("|\n| x\n"), vec!["", "", "x\n"]);
        assert_eq!(
            split_cells("| a\n|\n| c\n"),
            vec![(0, ""), (0, "a\n"), (4, ""), (6, "c\n")]
        );
    }

    #[test]
    fn test_crlf_table() {
        let input = "|===\r\n| Parameter | Type | Description\r\n| `body`\r\n| `string`\r\n|\r\n|===\r\n";
        let cells = extract_cells(&mut LineSource::new(input)).unwrap();
        assert_eq!(texts_of(&cells), vec!["`body`\n", "`string`\n", ""]);
        assert_eq!(cells.rows(3).unwrap().count(), 1);
    }

    #[test]
    fn test_cells_know_their_line() {
        let input = "|===\n| Parameter | Type | Description\n| `a`\n| `string`\n| first\nsecond\n\n| `b`\n| `integer`\n|===\n";
        let cells = extract_cells(&mut LineSource::new(input)).unwrap();
        let lines: Vec<usize> = cells
            .cells
            .iter()
            .map(|cell| cell.detail.location.line)
            .collect();
        assert_eq!(lines, vec![3, 4, 5, 8, 9]);

        let error = cells.rows(3).unwrap_err();
        assert_eq!(error.location().unwrap().line, 8);
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_extract_cells() {
        let input = "\n[cols=\"1,1,2\",options=\"header\"]\n|===\n| Parameter | Type | Description\n| `limit`\n| `integer`\n| Max &lt;100&gt; results\n|===\nafter\n";
        let mut lines = LineSource::new(input);
        let cells = extract_cells(&mut lines).unwrap();
        assert_eq!(
            texts_of(&cells),
            vec!["`limit`\n", "`integer`\n", "Max <100> results\n"]
        );
        assert_eq!(cells.detail.unwrap().location.line, 3);
        assert_eq!(lines.next().unwrap().text, "after\n");
    }

    #[test]
    fn test_empty_table_has_no_cells() {
        let mut lines = LineSource::new("|===\n| Parameter | Type | Description\n|===\n");
        let cells = extract_cells(&mut lines).unwrap();
        assert!(cells.cells.is_empty());
        assert_eq!(cells.rows(3).unwrap().count(), 0);
    }

    #[test]
    fn test_rows_rejects_partial_row() {
        let mut lines = LineSource::new("|===\n| HTTP code | Response body\n| 200\n|===\n");
        let cells = extract_cells(&mut lines).unwrap();
        let error = cells.rows(2).unwrap_err();
        assert!(matches!(
            error,
            Error::IncompleteTableRow {
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_unterminated_table() {
        let mut lines = LineSource::new("|===\n| a | b\n| 1\n| 2\n");
        assert!(matches!(
            extract_cells(&mut lines),
            Err(Error::UnterminatedTable(_))
        ));

        let mut lines = LineSource::new("no table here\n");
        assert!(matches!(
            extract_cells(&mut lines),
            Err(Error::UnterminatedTable(_))
        ));
    }
}
