use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Column order of the converted CSV files.
pub const HEADER: [&str; 6] = ["date", "num", "description", "memo", "withdrawal", "deposit"];

/// Canonical transaction record written for every row of a bank export.
///
/// `withdrawal` and `deposit` are never negative. Formats that export a single
/// signed amount fill at most one of them, see [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub num: String,
    pub description: String,
    pub memo: String,
    pub withdrawal: Decimal,
    pub deposit: Decimal,
}

impl Transaction {
    /// Net effect on the account balance.
    pub fn amount(&self) -> Decimal {
        self.deposit - self.withdrawal
    }
}
