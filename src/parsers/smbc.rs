//! Sumitomo Mitsui Banking Corporation (SMBC) checking account exports.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use super::amount::{negate, parse_decimal_or_zero};
use super::rules::{ConvertFn, DateRule, Rule, RowParser};
use super::traits::{DescriptionExtractor, Extracted};
use crate::encoding::TextEncoding;
use crate::format::FormatDescriptor;

const WITHDRAWAL: &str = "お引出し";
const DEPOSIT: &str = "お預入れ";
const CONTENT: &str = "お取り扱い内容";

static VISA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^V(?P<number>\d{6})(?:　(?P<description>.*))?$").expect("VISA pattern is valid")
});

static VISA_SAGAKU_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^V(?P<description>ｻｶﾞｸ)(?P<number>\d{6})$").expect("VISA SAGAKU pattern is valid")
});

/// SMBC VISA debit entries.
///
/// - `V999999　コンニチハ`: number, then the merchant after a full-width space
/// - `V999999`: number only
/// - `Vｻｶﾞｸ999999`: difference settlement (差額) for an earlier authorization
pub struct VisaCard;

impl DescriptionExtractor for VisaCard {
    fn extract(description: &str) -> Extracted {
        VISA_RE
            .captures(description)
            .or_else(|| VISA_SAGAKU_RE.captures(description))
            .map(|caps| Extracted {
                description: caps
                    .name("description")
                    .map_or_else(String::new, |m| m.as_str().to_string()),
                number: caps["number"].to_string(),
            })
            .unwrap_or_else(|| Extracted::unchanged(description))
    }
}

fn parser(withdrawal: ConvertFn<Decimal>) -> RowParser {
    RowParser {
        date: DateRule::Extract {
            column: "年月日",
            format: "%Y/%m/%d",
        },
        num: Rule::Cell {
            columns: &[CONTENT],
            compute: |row| Ok(VisaCard::extract(row.get(CONTENT)?).number),
        },
        description: Rule::Cell {
            columns: &[CONTENT],
            compute: |row| Ok(VisaCard::extract(row.get(CONTENT)?).description),
        },
        memo: Rule::empty(),
        withdrawal: Rule::Extract {
            column: WITHDRAWAL,
            convert: withdrawal,
        },
        deposit: Rule::Extract {
            column: DEPOSIT,
            convert: parse_decimal_or_zero,
        },
    }
}

/// First export layout, which listed withdrawals as negative numbers.
pub fn v1_parser() -> RowParser {
    parser(|value| Ok(negate(parse_decimal_or_zero(value)?)))
}

pub fn v2_parser() -> RowParser {
    parser(parse_decimal_or_zero)
}

pub fn formats() -> Vec<FormatDescriptor> {
    vec![
        FormatDescriptor {
            tag: "smbc_v1",
            encoding: TextEncoding::ShiftJis,
            delimiter: b',',
            skip: 0,
            parser: v1_parser(),
        },
        FormatDescriptor {
            tag: "smbc_v2",
            encoding: TextEncoding::ShiftJis,
            delimiter: b',',
            skip: 0,
            parser: v2_parser(),
        },
    ]
}
