//! Withdrawal/deposit derivation and date ordering.

use num_traits::Signed;

use crate::types::Transaction;

/// The debit side of a signed amount: `|amount|` if negative, else zero.
pub fn derive_withdrawal<T: Signed + PartialOrd>(amount: T) -> T {
    if amount < T::zero() { amount.abs() } else { T::zero() }
}

/// The credit side of a signed amount: `max(amount, 0)`. Zero lands here.
pub fn derive_deposit<T: Signed + PartialOrd>(amount: T) -> T {
    if amount > T::zero() { amount } else { T::zero() }
}

/// Sort by ascending date. Rows sharing a date keep their file order.
pub fn sort_by_date(transactions: &mut [Transaction]) {
    transactions.sort_by_key(|transaction| transaction.date);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[rstest]
    #[case("0", "0", "0")]
    #[case("1", "0", "1")]
    #[case("-1", "1", "0")]
    #[case("-1234.56", "1234.56", "0")]
    #[case("0.01", "0", "0.01")]
    #[case("-0.00", "0", "0")]
    fn test_derive(#[case] amount: &str, #[case] withdrawal: &str, #[case] deposit: &str) {
        assert_eq!(derive_withdrawal(dec(amount)), dec(withdrawal));
        assert_eq!(derive_deposit(dec(amount)), dec(deposit));
    }

    #[rstest]
    #[case("-99999999.99")]
    #[case("-50.00")]
    #[case("-0.01")]
    #[case("0")]
    #[case("0.01")]
    #[case("1500.00")]
    #[case("99999999.99")]
    fn test_derive_properties(#[case] amount: &str) {
        let amount = dec(amount);
        let withdrawal = derive_withdrawal(amount);
        let deposit = derive_deposit(amount);

        assert_eq!(withdrawal + deposit, amount.abs());
        assert_eq!(deposit - withdrawal, amount);
        assert!(withdrawal >= Decimal::ZERO);
        assert!(deposit >= Decimal::ZERO);
        if amount.is_zero() {
            assert!(withdrawal.is_zero() && deposit.is_zero());
        } else {
            assert!(withdrawal.is_zero() ^ deposit.is_zero());
        }
    }

    #[test]
    fn test_derive_integers() {
        assert_eq!(derive_withdrawal(-3_i64), 3);
        assert_eq!(derive_deposit(-3_i64), 0);
        assert_eq!(derive_deposit(7_i64), 7);
    }

    #[test]
    fn test_sort_is_stable() {
        let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
        let make = |d, description: &str| Transaction {
            date: day(d),
            num: String::new(),
            description: description.to_string(),
            memo: String::new(),
            withdrawal: Decimal::ZERO,
            deposit: Decimal::ONE,
        };
        let mut transactions = vec![
            make(3, "c"),
            make(1, "a1"),
            make(2, "b"),
            make(1, "a2"),
            make(1, "a3"),
        ];

        sort_by_date(&mut transactions);

        let order: Vec<&str> = transactions.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(order, ["a1", "a2", "a3", "b", "c"]);
    }
}
