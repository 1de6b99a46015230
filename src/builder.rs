use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{ConvertError, ConvertResult};
use crate::format::FormatDescriptor;
use crate::registry::Registry;
use crate::types::Transaction;

/// Parse one bank export into canonical transactions.
///
/// Content is read from `filename` unless given directly. Without an explicit
/// format the registry resolves it from the directory layout of `filename`.
#[derive(Default)]
pub struct StatementBuilder<'a> {
    content: Option<Vec<u8>>,
    filepath: Option<PathBuf>,
    format: Option<&'a FormatDescriptor>,
    registry: Option<&'a Registry>,
}

impl<'a> StatementBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn filename(mut self, filename: impl AsRef<Path>) -> Self {
        self.filepath = Some(filename.as_ref().to_path_buf());
        self
    }

    pub fn format(mut self, format: &'a FormatDescriptor) -> Self {
        self.format = Some(format);
        self
    }

    pub fn registry(mut self, registry: &'a Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn parse(self) -> ConvertResult<Vec<Transaction>> {
        let registry = self.registry.unwrap_or(Registry::builtin());

        let format = match (self.format, self.filepath.as_deref()) {
            (Some(format), _) => format,
            (None, Some(path)) => registry.lookup(path)?,
            (None, None) => return Err(ConvertError::MissingContentAndFilepath),
        };

        let content = match (self.content, self.filepath.as_deref()) {
            (Some(content), _) => content,
            (None, Some(path)) => fs::read(path).map_err(|e| ConvertError::from(e).in_file(path))?,
            (None, None) => return Err(ConvertError::MissingContentAndFilepath),
        };

        format.parse(&content).map_err(|e| match self.filepath {
            Some(path) => e.in_file(path),
            None => e,
        })
    }
}
