use crate::Format;

/// Errors shared by every converter.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The format is binary and no output file was given.
    #[error("{0} output needs an output file, pass `--output <file>`")]
    OutputRequired(Format),

    /// Writing the rendered output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
