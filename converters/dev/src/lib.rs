//! Development and testing utilities for the API reference renderers.
//!
//! - [`sample`] - Sample documents parsed from bundled `AsciiDoc` sources
//! - [`output`] - Output normalization for test comparisons

pub mod output;
pub mod sample;
