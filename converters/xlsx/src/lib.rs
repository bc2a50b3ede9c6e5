//! Spreadsheet renderer for API reference documents.
//!
//! The workbook has three sheets:
//!
//! - **Summary** - the `== API endpoints` index, one green band per endpoint
//! - **the reference sheet**, named after the document title - every endpoint
//!   with its global parameters, methods, query and body parameters and
//!   responses, banded by level, with `-` placeholders for empty tables and
//!   links on cross-referenced types
//! - **Info** - when and by what the workbook was generated, the source
//!   revision and the document link
//!
//! The workbook is binary, so [`Converter::convert`] refuses to write it to
//! stdout.

use std::io::Write;

use apiref_converters_core::{Converter, Format, Options};
use apiref_parser::Document;
use rust_xlsxwriter::Workbook;

mod error;
mod layout;
mod workbook;

pub use error::Error;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Spreadsheet converter processor.
#[derive(Clone, Debug)]
pub struct Processor {
    options: Options,
}

impl Processor {
    /// Assemble the workbook and return its bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the workbook cannot be assembled.
    pub fn to_bytes(&self, doc: &Document, generated_at: &str) -> Result<Vec<u8>, Error> {
        let mut workbook = Workbook::new();
        for plan in [
            layout::summary_sheet(doc),
            layout::reference_sheet(doc),
            layout::info_sheet(doc, &self.options, generated_at),
        ] {
            workbook::add_sheet(&mut workbook, &plan)?;
        }
        Ok(workbook.save_to_buffer()?)
    }
}

impl Converter for Processor {
    type Error = Error;

    fn new(options: Options) -> Self {
        Self { options }
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn format(&self) -> Format {
        Format::Xlsx
    }

    #[tracing::instrument(skip_all)]
    fn write_to<W: Write>(&self, doc: &Document, mut writer: W) -> Result<(), Self::Error> {
        let generated_at = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let bytes = self.to_bytes(doc, &generated_at)?;
        writer.write_all(&bytes)?;
        tracing::debug!(bytes = bytes.len(), "rendered workbook");
        Ok(())
    }
}
