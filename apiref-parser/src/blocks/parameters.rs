use crate::{
    error::{Detail, Error},
    line_source::LineSource,
    model::{Parameter, Response},
    table::{self, Cell, Cells},
    xref::{LinkResolver, unquote},
};

const PARAMETER_COLUMNS: usize = 3;
const RESPONSE_COLUMNS: usize = 2;

/// Parse the next `Parameter | Type | Description` table.
#[tracing::instrument(level = "trace", skip(lines, resolver))]
pub(crate) fn parse_parameters(
    lines: &mut LineSource<'_>,
    resolver: &LinkResolver,
) -> Result<Vec<Parameter>, Error> {
    let cells = table::extract_cells(lines)?;
    parameters_from_cells(&cells, resolver)
}

/// Parse the next `HTTP code | Response body` table.
#[tracing::instrument(level = "trace", skip(lines, resolver))]
pub(crate) fn parse_responses(
    lines: &mut LineSource<'_>,
    resolver: &LinkResolver,
) -> Result<Vec<Response>, Error> {
    let cells = table::extract_cells(lines)?;
    cells
        .rows(RESPONSE_COLUMNS)?
        .map(|row| match row {
            [code, body] => Ok(Response {
                http_code: code.text.trim_end().to_string(),
                response_body: resolver.type_ref(&body.text, body.detail)?,
            }),
            _ => Err(Error::IncompleteTableRow {
                detail: row_detail(row, &cells),
                expected: RESPONSE_COLUMNS,
                found: row.len(),
            }),
        })
        .collect()
}

fn parameters_from_cells(
    cells: &Cells,
    resolver: &LinkResolver,
) -> Result<Vec<Parameter>, Error> {
    cells
        .rows(PARAMETER_COLUMNS)?
        .map(|row| match row {
            [name, r#type, description] => {
                let parameter = Parameter {
                    name: unquote(name.text.trim_end()).to_string(),
                    r#type: resolver.type_ref(&r#type.text, r#type.detail)?,
                    description: description.text.trim_end().to_string(),
                };
                tracing::trace!(name = %parameter.name, "parameter");
                Ok(parameter)
            }
            _ => Err(Error::IncompleteTableRow {
                detail: row_detail(row, cells),
                expected: PARAMETER_COLUMNS,
                found: row.len(),
            }),
        })
        .collect()
}

fn row_detail(row: &[Cell], cells: &Cells) -> Detail {
    row.first()
        .map(|cell| cell.detail)
        .or(cells.detail)
        .unwrap_or_default()
}
