//! Field extraction rules and the row parser built from them.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::{ConvertError, ConvertResult};
use crate::reader::RawRow;
use crate::types::Transaction;

/// Computes a field from the whole row.
pub type CellFn<T> = fn(&RawRow) -> ConvertResult<T>;

/// Converts the text of one cell.
pub type ConvertFn<T> = fn(&str) -> ConvertResult<T>;

/// How one transaction field is obtained from a raw row.
#[derive(Debug, Clone)]
pub enum Rule<T> {
    /// Take `column` and run it through `convert`.
    Extract {
        column: &'static str,
        convert: ConvertFn<T>,
    },
    /// Same value for every row.
    Constant(T),
    /// Derived from several cells. `columns` lists every cell `compute` may read.
    Cell {
        columns: &'static [&'static str],
        compute: CellFn<T>,
    },
}

impl Rule<String> {
    /// Take `column` verbatim.
    pub fn column(column: &'static str) -> Self {
        Rule::Extract {
            column,
            convert: |value| Ok(value.to_string()),
        }
    }

    pub fn empty() -> Self {
        Rule::Constant(String::new())
    }
}

impl<T> Rule<T> {
    fn columns(&self) -> &[&'static str] {
        match self {
            Rule::Extract { column, .. } => std::slice::from_ref(column),
            Rule::Constant(_) => &[],
            Rule::Cell { columns, .. } => columns,
        }
    }
}

pub fn apply_rule<T: Clone>(row: &RawRow, rule: &Rule<T>) -> ConvertResult<T> {
    match rule {
        Rule::Extract { column, convert } => convert(row.get(column)?),
        Rule::Constant(value) => Ok(value.clone()),
        Rule::Cell { compute, .. } => compute(row),
    }
}

/// How the transaction date is obtained from a raw row.
#[derive(Debug, Clone)]
pub enum DateRule {
    /// Parse `column` with a chrono `format` such as `%d.%m.%Y`.
    Extract {
        column: &'static str,
        format: &'static str,
    },
    Cell {
        columns: &'static [&'static str],
        compute: CellFn<NaiveDate>,
    },
}

impl DateRule {
    fn columns(&self) -> &[&'static str] {
        match self {
            DateRule::Extract { column, .. } => std::slice::from_ref(column),
            DateRule::Cell { columns, .. } => columns,
        }
    }
}

pub fn apply_date_rule(row: &RawRow, rule: &DateRule) -> ConvertResult<NaiveDate> {
    match rule {
        DateRule::Extract { column, format } => parse_date(row.get(column)?, *format),
        DateRule::Cell { compute, .. } => compute(row),
    }
}

pub fn parse_date(value: &str, format: &'static str) -> ConvertResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), format).map_err(|_| ConvertError::InvalidDate {
        value: value.to_string(),
        format,
    })
}

/// One rule per [`Transaction`] field.
#[derive(Debug, Clone)]
pub struct RowParser {
    pub date: DateRule,
    pub num: Rule<String>,
    pub description: Rule<String>,
    pub memo: Rule<String>,
    pub withdrawal: Rule<Decimal>,
    pub deposit: Rule<Decimal>,
}

impl RowParser {
    pub fn parse(&self, row: &RawRow) -> ConvertResult<Transaction> {
        Ok(Transaction {
            date: apply_date_rule(row, &self.date)?,
            num: apply_rule(row, &self.num)?,
            description: apply_rule(row, &self.description)?,
            memo: apply_rule(row, &self.memo)?,
            withdrawal: apply_rule(row, &self.withdrawal)?,
            deposit: apply_rule(row, &self.deposit)?,
        })
    }

    /// Every column read by any of the rules, without duplicates, in field order.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns: Vec<&'static str> = Vec::new();
        let all = self
            .date
            .columns()
            .iter()
            .chain(self.num.columns())
            .chain(self.description.columns())
            .chain(self.memo.columns())
            .chain(self.withdrawal.columns())
            .chain(self.deposit.columns());
        for column in all {
            if !columns.contains(column) {
                columns.push(*column);
            }
        }
        columns
    }
}
