//! Money types with precise decimal arithmetic
//!
//! Claim amounts are summed with rust_decimal so that totals shown on the
//! dashboard never pick up floating-point drift. Display follows the digit
//! grouping conventions of the currency (lakh/crore grouping for INR).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes following ISO 4217
///
/// Deserializes through [`FromStr`], so codes are accepted in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Currency {
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Indian numbering groups the last three digits, then pairs
    fn uses_lakh_grouping(&self) -> bool {
        matches!(self, Currency::INR)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::INR
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Currency::INR),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            other => Err(MoneyError::UnknownCurrency(other.to_string())),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Lossy conversion for chart libraries that only take floats
    pub fn to_f64(&self) -> f64 {
        self.amount.to_f64().unwrap_or(0.0)
    }

    /// Formats the amount without the currency symbol, with digit grouping
    pub fn format_grouped(&self, dp: u32) -> String {
        let (negative, digits) = self.grouped_parts(dp);
        if negative {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    /// Sign of the rounded amount and its grouped absolute value
    fn grouped_parts(&self, dp: u32) -> (bool, String) {
        let rounded = self.amount.round_dp(dp);
        let text = format!("{:.dp$}", rounded.abs(), dp = dp as usize);
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text.as_str(), None),
        };

        let grouped = group_digits(int_part, self.currency.uses_lakh_grouping());
        let digits = match frac_part {
            Some(frac) => format!("{}.{}", grouped, frac),
            None => grouped,
        };

        (rounded.is_sign_negative() && !rounded.is_zero(), digits)
    }
}

fn group_digits(digits: &str, lakh: bool) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let group = if lakh { 2 } else { 3 };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, digits) = self.grouped_parts(self.currency.decimal_places());
        let sign = if negative { "-" } else { "" };
        write!(f, "{}{}{}", sign, self.currency.symbol(), digits)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn grouping_preserves_digits(amount in 0i64..1_000_000_000_000i64) {
            let money = Money::new(Decimal::new(amount, 0), Currency::INR);
            let formatted = money.format_grouped(0);
            prop_assert_eq!(formatted.replace(',', ""), amount.to_string());
        }

        #[test]
        fn sign_leads_the_display(amount in -1_000_000_000i64..1_000_000_000i64) {
            let money = Money::new(Decimal::new(amount, 2), Currency::INR);
            let shown = money.to_string();
            prop_assert_eq!(shown.starts_with('-'), amount < 0);
            prop_assert!(shown.trim_start_matches('-').starts_with('₹'));
        }
    }
}
