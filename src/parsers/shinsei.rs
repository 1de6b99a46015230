//! Shinsei Bank (SBI Shinsei) checking account exports.
//!
//! Every layout reports withdrawals and deposits in separate columns, with an
//! empty cell for the unused side.

use super::amount::parse_decimal_or_zero;
use super::rules::{DateRule, Rule, RowParser};
use crate::encoding::TextEncoding;
use crate::format::FormatDescriptor;

const DATE_FORMAT: &str = "%Y/%m/%d";

fn parser(
    date: &'static str,
    withdrawal: &'static str,
    deposit: &'static str,
    description: &'static str,
) -> RowParser {
    RowParser {
        date: DateRule::Extract {
            column: date,
            format: DATE_FORMAT,
        },
        num: Rule::empty(),
        description: Rule::column(description),
        memo: Rule::empty(),
        withdrawal: Rule::Extract {
            column: withdrawal,
            convert: parse_decimal_or_zero,
        },
        deposit: Rule::Extract {
            column: deposit,
            convert: parse_decimal_or_zero,
        },
    }
}

/// Original tab separated UTF-16 export, Japanese headers.
pub fn v1_parser() -> RowParser {
    parser("取引日", "お支払金額", "お預り金額", "摘要")
}

/// English headers of the original export. `CR`/`DR` are named from the bank's side.
pub fn v1_en_parser() -> RowParser {
    parser("Value Date", "CR", "DR", "Description")
}

pub fn v2_parser() -> RowParser {
    parser("取引日", "出金金額", "入金金額", "摘要")
}

pub fn v2_en_parser() -> RowParser {
    parser("Value Date", "Debit", "Credit", "Description")
}

fn shinsei_format(
    tag: &'static str,
    encoding: TextEncoding,
    delimiter: u8,
    skip: usize,
    parser: RowParser,
) -> FormatDescriptor {
    FormatDescriptor {
        tag,
        encoding,
        delimiter,
        skip,
        parser,
    }
}

pub fn formats() -> Vec<FormatDescriptor> {
    vec![
        shinsei_format("shinsei_v1", TextEncoding::Utf16, b'\t', 8, v1_parser()),
        shinsei_format("shinsei_v1_en", TextEncoding::Utf16, b'\t', 8, v1_en_parser()),
        shinsei_format("shinsei_v2", TextEncoding::ShiftJis, b',', 0, v2_parser()),
        shinsei_format("shinsei_v2_en", TextEncoding::ShiftJis, b',', 0, v2_en_parser()),
        // v2 layout, re-encoded as UTF-8 with BOM
        shinsei_format("shinsei_v3", TextEncoding::Utf8Sig, b',', 0, v2_parser()),
    ]
}
