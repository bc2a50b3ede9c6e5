//! Error types for the JSON renderer.

/// Errors that can occur during JSON conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error during conversion.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialisation error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error shared by every converter.
    #[error(transparent)]
    Converter(#[from] apiref_converters_core::Error),
}
