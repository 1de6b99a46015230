use crate::encoding::TextEncoding;
use crate::errors::ConvertResult;
use crate::normalize::sort_by_date;
use crate::parsers::rules::RowParser;
use crate::reader::{RawRow, read_rows};
use crate::types::Transaction;

/// How to read and interpret the exports of one bank account type.
#[derive(Debug, Clone)]
pub struct FormatDescriptor {
    /// Directory name identifying the format in the input tree.
    pub tag: &'static str,
    pub encoding: TextEncoding,
    pub delimiter: u8,
    /// Boilerplate lines before the column header.
    pub skip: usize,
    pub parser: RowParser,
}

impl FormatDescriptor {
    pub fn read_rows(&self, bytes: &[u8]) -> ConvertResult<Vec<RawRow>> {
        let text = self.encoding.decode(bytes)?;
        read_rows(&text, self.delimiter, self.skip, &self.parser.columns())
    }

    /// Parse a whole export into transactions ordered by date.
    pub fn parse(&self, bytes: &[u8]) -> ConvertResult<Vec<Transaction>> {
        let mut transactions = self
            .read_rows(bytes)?
            .iter()
            .map(|row| self.parser.parse(row))
            .collect::<ConvertResult<Vec<_>>>()?;
        sort_by_date(&mut transactions);
        Ok(transactions)
    }
}
