//! DKB (Deutsche Kreditbank) checking and credit card exports.
//!
//! Latin-1, `;` separated, with a few lines of account summary before the
//! header. Amounts use German separators and a single signed column.

use rust_decimal::Decimal;

use super::amount::parse_german_decimal;
use super::rules::{DateRule, Rule, RowParser};
use crate::encoding::TextEncoding;
use crate::errors::ConvertResult;
use crate::format::FormatDescriptor;
use crate::normalize::{derive_deposit, derive_withdrawal};
use crate::reader::RawRow;

const AMOUNT: &str = "Betrag (EUR)";
const DATE_FORMAT: &str = "%d.%m.%Y";

fn betrag_eur(row: &RawRow) -> ConvertResult<Decimal> {
    parse_german_decimal(row.get(AMOUNT)?)
}

fn withdrawal() -> Rule<Decimal> {
    Rule::Cell {
        columns: &[AMOUNT],
        compute: |row| Ok(derive_withdrawal(betrag_eur(row)?)),
    }
}

fn deposit() -> Rule<Decimal> {
    Rule::Cell {
        columns: &[AMOUNT],
        compute: |row| Ok(derive_deposit(betrag_eur(row)?)),
    }
}

pub fn giro_parser() -> RowParser {
    RowParser {
        date: DateRule::Extract {
            column: "Wertstellung",
            format: DATE_FORMAT,
        },
        num: Rule::empty(),
        description: Rule::column("Auftraggeber / Begünstigter"),
        memo: Rule::column("Verwendungszweck"),
        withdrawal: withdrawal(),
        deposit: deposit(),
    }
}

pub fn credit_card_parser() -> RowParser {
    RowParser {
        date: DateRule::Extract {
            column: "Belegdatum",
            format: DATE_FORMAT,
        },
        num: Rule::empty(),
        description: Rule::column("Beschreibung"),
        memo: Rule::empty(),
        withdrawal: withdrawal(),
        deposit: deposit(),
    }
}

fn dkb_format(tag: &'static str, skip: usize, parser: RowParser) -> FormatDescriptor {
    FormatDescriptor {
        tag,
        encoding: TextEncoding::Latin1,
        delimiter: b';',
        skip,
        parser,
    }
}

/// Both credit card exports share a layout; the "von/bis" variant has one more summary line.
pub fn formats() -> Vec<FormatDescriptor> {
    vec![
        dkb_format("dkb_giro_v1", 6, giro_parser()),
        dkb_format("dkb_cc_von_bis_v1", 7, credit_card_parser()),
        dkb_format("dkb_cc_zeitraum_v1", 6, credit_card_parser()),
    ]
}
