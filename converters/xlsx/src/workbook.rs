//! Writes sheet plans into a `rust_xlsxwriter` workbook.

use rust_xlsxwriter::{Color, Format, Url, Workbook, Worksheet};

use crate::{
    Error,
    layout::{Band, Cell, Row, SheetPlan},
};

pub(crate) fn add_sheet(workbook: &mut Workbook, plan: &SheetPlan<'_>) -> Result<(), Error> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(plan.name.as_str())?;
    for &(column, width) in &plan.widths {
        worksheet.set_column_width(column, width)?;
    }
    for (index, row) in plan.rows.iter().enumerate() {
        let number = u32::try_from(index).map_err(|_| Error::TooManyRows(plan.name.clone()))?;
        write_row(worksheet, number, row, plan.wrapped)?;
    }
    tracing::debug!(sheet = %plan.name, rows = plan.rows.len(), "added sheet");
    Ok(())
}

fn write_row(
    worksheet: &mut Worksheet,
    number: u32,
    row: &Row<'_>,
    wrapped: Option<u16>,
) -> Result<(), Error> {
    let format = |column: u16| cell_format(row.band, column, wrapped);
    for cell in &row.cells {
        write_cell(worksheet, number, cell, &format(cell.column))?;
    }
    if let Some(band) = row.band {
        for column in band.first..=band.last {
            if row.cell(column).is_none() {
                worksheet.write_blank(number, column, &format(column))?;
            }
        }
    }
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    number: u32,
    cell: &Cell<'_>,
    format: &Format,
) -> Result<(), Error> {
    match cell.hyperlink.filter(|hyperlink| !hyperlink.is_empty()) {
        Some(hyperlink) => {
            let url = Url::new(hyperlink).set_text(cell.text.as_ref());
            worksheet.write_url_with_format(number, cell.column, url, format)?;
        }
        None => {
            worksheet.write_string_with_format(number, cell.column, cell.text.as_ref(), format)?;
        }
    }
    Ok(())
}

fn cell_format(band: Option<Band>, column: u16, wrapped: Option<u16>) -> Format {
    let mut format = Format::new();
    if let Some(band) = band.filter(|band| band.contains(column)) {
        format = format.set_background_color(Color::RGB(band.fill.rgb()));
    }
    if wrapped == Some(column) {
        format = format.set_text_wrap();
    }
    format
}
