//! JSON renderer for API reference documents.
//!
//! The output is the pretty-printed model: reading it back with `serde_json`
//! yields the same [`Document`].
//!
//! # Example
//!
//! ```ignore
//! use apiref_converters_core::{Converter, Options};
//! use apiref_converters_json::Processor;
//!
//! let processor = Processor::new(Options::default());
//! processor.convert(&document, None)?;
//! // Prints the document to stdout
//! ```

use std::io::Write;

use apiref_converters_core::{Converter, Format, Options};
use apiref_parser::Document;

mod error;

pub use error::Error;

/// JSON converter processor.
#[derive(Clone, Debug)]
pub struct Processor {
    options: Options,
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
        Format::Json
    }

    #[tracing::instrument(skip_all)]
    fn write_to<W: Write>(&self, doc: &Document, mut writer: W) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut writer, doc)?;
        writeln!(writer)?;
        tracing::debug!(endpoints = doc.items.len(), "rendered JSON");
        Ok(())
    }
}
