use std::collections::HashMap;

use csv::ReaderBuilder;

use crate::errors::{ConvertError, ConvertResult};

/// One record of a bank export, keyed by the column headers of the file.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    line: u64,
    cells: HashMap<String, String>,
}

impl RawRow {
    pub fn new(line: u64, cells: HashMap<String, String>) -> Self {
        Self { line, cells }
    }

    pub fn from_pairs<'a>(line: u64, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let cells = pairs
            .into_iter()
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();
        Self { line, cells }
    }

    /// 1-based line number of the record in the source file.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Cell value of `column`. A missing column is a schema mismatch, never an empty value.
    pub fn get(&self, column: &str) -> ConvertResult<&str> {
        self.cells
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| ConvertError::SchemaMismatch {
                column: column.to_string(),
                line: self.line,
            })
    }
}

/// Drop exactly `count` lines of boilerplate preceding the column header.
pub fn skip_lines(text: &str, count: usize) -> ConvertResult<&str> {
    let mut rest = text;
    for _ in 0..count {
        let end = rest.find('\n').ok_or(ConvertError::MissingHeader(count))?;
        rest = &rest[end + 1..];
    }
    Ok(rest)
}

/// Read the records of decoded export `text`.
///
/// The line after the skipped block is the header. Every column in `required`
/// has to appear in it, so a wrong skip count fails here rather than producing
/// misaligned rows.
pub fn read_rows(text: &str, delimiter: u8, skip: usize, required: &[&str]) -> ConvertResult<Vec<RawRow>> {
    let body = skip_lines(text, skip)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(ConvertError::MissingHeader(skip));
    }

    let header_line = skip as u64 + 1;
    if let Some(column) = required.iter().find(|column| !headers.iter().any(|h| h == **column)) {
        return Err(ConvertError::SchemaMismatch {
            column: column.to_string(),
            line: header_line,
        });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = skip as u64 + record.position().map(|p| p.line()).unwrap_or(header_line);
        if record.len() > headers.len() {
            return Err(ConvertError::ExtraCells {
                line,
                expected: headers.len(),
                found: record.len(),
            });
        }
        let cells = headers
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();
        rows.push(RawRow::new(line, cells));
    }

    Ok(rows)
}
