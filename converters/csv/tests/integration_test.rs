use std::path::Path;

use apiref_converters_core::{Converter, Options};
use apiref_converters_csv::Processor;
use apiref_converters_dev::{output::remove_lines_trailing_whitespace, sample};
use apiref_parser::Document;

type Error = Box<dyn std::error::Error>;

fn render(doc: &Document) -> Result<String, Error> {
    let mut output = Vec::new();
    Processor::new(Options::default()).write_to(doc, &mut output)?;
    Ok(String::from_utf8(output)?)
}

#[test]
#[tracing_test::traced_test]
fn test_csv_matches_expected() -> Result<(), Error> {
    let expected = std::fs::read_to_string(Path::new("tests/fixtures/expected/pods.csv"))?;
    let actual = render(&sample::pods()?)?;
    pretty_assertions::assert_eq!(
        remove_lines_trailing_whitespace(&expected),
        remove_lines_trailing_whitespace(&actual),
    );
    Ok(())
}

#[test]
fn test_csv_reads_back_as_flexible_records() -> Result<(), Error> {
    let output = render(&sample::pods()?)?;
    let widths: Vec<usize> = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(output.as_bytes())
        .records()
        .map(|record| record.map(|record| record.len()))
        .collect::<Result<_, _>>()?;
    assert_eq!(widths, vec![1, 18, 7, 10, 13, 18, 18, 16, 18]);
    Ok(())
}

#[test]
fn test_csv_empty_document_has_only_header_rows() -> Result<(), Error> {
    let output = render(&sample::empty()?)?;
    assert_eq!(output.lines().count(), 2);
    assert!(output.starts_with(&format!("\"{}\"", sample::PODS_URL)));
    Ok(())
}

#[test]
fn test_csv_convert_to_file() -> Result<(), Error> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("pods.csv");
    let doc = sample::pods()?;
    Processor::new(Options::default()).convert(&doc, Some(&path))?;
    assert_eq!(std::fs::read_to_string(&path)?, render(&doc)?);
    Ok(())
}
