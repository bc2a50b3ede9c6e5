//! Output formats the renderers produce.

use std::str::FromStr;

/// Output format of a rendered document.
///
/// Used by converters to identify themselves and by the CLI for format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Pretty-printed JSON serialisation of the model.
    #[default]
    Json,
    /// One row per parameter or response, every field quoted.
    Csv,
    /// Spreadsheet workbook with summary, reference and info sheets.
    Xlsx,
}

impl Format {
    /// Every supported format, in the order the CLI lists them.
    pub const ALL: [Format; 3] = [Self::Json, Self::Csv, Self::Xlsx];

    /// Whether the output is binary and must be written to a file, never stdout.
    #[must_use]
    pub fn requires_output_file(self) -> bool {
        match self {
            Self::Xlsx => true,
            Self::Json | Self::Csv => false,
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            _ => Err(format!("invalid format: '{s}', expected: json, csv, xlsx")),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Xlsx => write!(f, "xlsx"),
        }
    }
}
