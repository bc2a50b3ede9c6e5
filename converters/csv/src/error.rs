//! Error types for the CSV renderer.

/// Errors that can occur during CSV conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error during conversion.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error shared by every converter.
    #[error(transparent)]
    Converter(#[from] apiref_converters_core::Error),
}
