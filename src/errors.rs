use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::TextEncoding;

/// Errors raised while converting bank statement exports
#[derive(Error, Debug)]
pub enum ConvertError {
    /// No registered format matches the tag found in the file path
    #[error("Unknown format for file '{}'", .0.display())]
    UnknownFormat(PathBuf),

    /// A column the format reads is absent (wrong skip count or new export layout)
    #[error("Missing column '{column}' at line {line}")]
    SchemaMismatch { column: String, line: u64 },

    /// The file content is not valid in the format's encoding
    #[error("Failed to decode content as {0}")]
    Decode(TextEncoding),

    /// Currency conversion info with a region the converter does not know
    #[error("Unknown region: {0}")]
    RegionUnknown(String),

    /// A record with more cells than the header, usually a stray delimiter in a cell
    #[error("Line {line} has {found} cells, header has {expected}")]
    ExtraCells { line: u64, expected: usize, found: usize },

    /// The file ends before the column header line
    #[error("No header line after skipping {0} line(s)")]
    MissingHeader(usize),

    #[error("Invalid date '{value}', expected format '{format}'")]
    InvalidDate { value: String, format: &'static str },

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ── Configuration ───────────────────────────────────────────────────────────

    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    /// A discovered file that does not sit below the input directory
    #[error("File '{}' is outside the input directory", .0.display())]
    OutsideInputDir(PathBuf),

    #[error("Missing setting '{0}'")]
    MissingSetting(&'static str),

    /// The builder was called without content or a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    /// Any of the above, raised while handling one specific file
    #[error("Failed to convert '{}'", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    /// Attach the path of the file being converted.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            // already carries its path
            err @ (ConvertError::UnknownFormat(_) | ConvertError::File { .. }) => err,
            err => ConvertError::File {
                path: path.into(),
                source: Box::new(err),
            },
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_in_file_wraps_with_path() {
        let err = ConvertError::SchemaMismatch {
            column: "取引日".to_string(),
            line: 1,
        }
        .in_file("in/rakuten_v1/2025/jan.csv");

        assert_eq!(err.to_string(), "Failed to convert 'in/rakuten_v1/2025/jan.csv'");
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "Missing column '取引日' at line 1");
    }

    #[test]
    fn test_in_file_keeps_unknown_format() {
        let err = ConvertError::UnknownFormat("in/foo/bar/x.csv".into()).in_file("other.csv");
        assert!(matches!(err, ConvertError::UnknownFormat(p) if p == PathBuf::from("in/foo/bar/x.csv")));
    }

    #[test]
    fn test_in_file_does_not_double_wrap() {
        let err = ConvertError::RegionUnknown("月面".to_string())
            .in_file("a.csv")
            .in_file("b.csv");

        match err {
            ConvertError::File { path, source } => {
                assert_eq!(path, PathBuf::from("a.csv"));
                assert!(matches!(*source, ConvertError::RegionUnknown(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
