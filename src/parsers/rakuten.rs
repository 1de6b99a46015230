//! Rakuten Bank checking account and Rakuten JCB card exports.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use super::amount::parse_decimal;
use super::rules::{DateRule, Rule, RowParser};
use super::traits::{DescriptionExtractor, Extracted};
use crate::encoding::TextEncoding;
use crate::errors::{ConvertError, ConvertResult};
use crate::format::FormatDescriptor;
use crate::normalize::{derive_deposit, derive_withdrawal};
use crate::reader::RawRow;

const AMOUNT: &str = "入出金(円)";
const COUNTERPARTY: &str = "入出金先内容";

const JCB_AMOUNT: &str = "ご利用金額（円）";
const REGION: &str = "使用地域";
const LOCAL_AMOUNT: &str = "現地通貨額";
const CURRENCY: &str = "通貨略称";
const RATE: &str = "換算レート";

static JCB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<description>JCBデビット) ",
        r"(?P<mode>[AB])(?P<number>\d{7}) ",
        r"(?P<reference>\d{16})$"
    ))
    .expect("JCB debit pattern is valid")
});

/// JCB debit card payments booked on the checking account.
///
/// `JCBデビット A0000001 0000000000000001` carries a 7 digit authorization
/// number glued to the mode letter; it is moved to `number` and the
/// description keeps label, mode and the 16 digit reference.
pub struct JcbDebit;

impl DescriptionExtractor for JcbDebit {
    fn extract(description: &str) -> Extracted {
        match JCB_RE.captures(description) {
            Some(caps) => Extracted {
                description: format!("{} {} {}", &caps["description"], &caps["mode"], &caps["reference"]),
                number: caps["number"].to_string(),
            },
            None => Extracted::unchanged(description),
        }
    }
}

fn amount(row: &RawRow) -> ConvertResult<Decimal> {
    parse_decimal(row.get(AMOUNT)?)
}

fn jcb_amount(row: &RawRow) -> ConvertResult<Decimal> {
    parse_decimal(row.get(JCB_AMOUNT)?)
}

/// Condense the currency conversion columns of a JCB card row into a memo.
pub fn conversion_info(row: &RawRow) -> ConvertResult<String> {
    match row.get(REGION)? {
        "国内" => Ok("Domestic".to_string()),
        "海外" => Ok(format!(
            "Local: {} {}, Rate: {}",
            row.get(LOCAL_AMOUNT)?,
            row.get(CURRENCY)?,
            row.get(RATE)?
        )),
        region => Err(ConvertError::RegionUnknown(region.to_string())),
    }
}

pub fn checking_parser() -> RowParser {
    RowParser {
        date: DateRule::Extract {
            column: "取引日",
            format: "%Y%m%d",
        },
        num: Rule::Cell {
            columns: &[COUNTERPARTY],
            compute: |row| Ok(JcbDebit::extract(row.get(COUNTERPARTY)?).number),
        },
        description: Rule::Cell {
            columns: &[COUNTERPARTY],
            compute: |row| Ok(JcbDebit::extract(row.get(COUNTERPARTY)?).description),
        },
        memo: Rule::empty(),
        withdrawal: Rule::Cell {
            columns: &[AMOUNT],
            compute: |row| Ok(derive_withdrawal(amount(row)?)),
        },
        deposit: Rule::Cell {
            columns: &[AMOUNT],
            compute: |row| Ok(derive_deposit(amount(row)?)),
        },
    }
}

/// Card statement: positive amounts are purchases, negative ones refunds.
pub fn jcb_card_parser() -> RowParser {
    RowParser {
        date: DateRule::Extract {
            column: "ご利用日",
            format: "%Y%m%d",
        },
        num: Rule::column("承認番号"),
        description: Rule::column("ご利用先"),
        memo: Rule::Cell {
            columns: &[REGION, LOCAL_AMOUNT, CURRENCY, RATE],
            compute: conversion_info,
        },
        withdrawal: Rule::Cell {
            columns: &[JCB_AMOUNT],
            compute: |row| Ok(derive_deposit(jcb_amount(row)?)),
        },
        deposit: Rule::Cell {
            columns: &[JCB_AMOUNT],
            compute: |row| Ok(derive_withdrawal(jcb_amount(row)?)),
        },
    }
}

pub fn formats() -> Vec<FormatDescriptor> {
    vec![
        FormatDescriptor {
            tag: "rakuten_v1",
            encoding: TextEncoding::ShiftJis,
            delimiter: b',',
            skip: 0,
            parser: checking_parser(),
        },
        FormatDescriptor {
            tag: "rakuten_jcb_v1",
            encoding: TextEncoding::ShiftJis,
            delimiter: b',',
            skip: 0,
            parser: jcb_card_parser(),
        },
    ]
}
