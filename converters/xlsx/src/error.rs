//! Error types for the spreadsheet renderer.

/// Errors that can occur during spreadsheet conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error during conversion.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook assembly error.
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// The layout needs more rows than a worksheet holds.
    #[error("sheet {0:?} has too many rows")]
    TooManyRows(String),

    /// Error shared by every converter.
    #[error(transparent)]
    Converter(#[from] apiref_converters_core::Error),
}
