//! Single-currency money value

use crate::currency::Currency;
use crate::error::{MoneyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An amount in one currency.
///
/// Arithmetic never crosses currencies: `add` requires both sides to share a
/// currency, and scaling keeps the currency. Converting between currencies is
/// the job of a [`Bank`](crate::bank::Bank).
///
/// Equality is exact on the amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    amount: f64,
    currency: Currency,
}

impl Money {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Zero in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self::new(0.0, currency)
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add another amount of the same currency
    pub fn add(&self, other: Money) -> Result<Money> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                expected: self.currency,
                found: other.currency,
            });
        }
        Ok(Money::new(self.amount + other.amount, self.currency))
    }

    /// Scale by a factor
    pub fn times(&self, factor: f64) -> Money {
        Money::new(self.amount * factor, self.currency)
    }

    /// Divide by a non-zero divisor
    pub fn divide(&self, divisor: f64) -> Result<Money> {
        if divisor == 0.0 {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Money::new(self.amount / divisor, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Parses `"5 USD"`, `"5USD"` or `"1000.5 krw"`
impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        // The code is the trailing run of letters; amounts like 1e3 keep theirs
        let split = s.trim_end_matches(|c: char| c.is_ascii_alphabetic()).len();
        let (amount, code) = s.split_at(split);
        if code.is_empty() {
            return Err(MoneyError::InvalidData(format!("Missing currency in: {}", s)));
        }

        let amount: f64 = amount.trim().parse().map_err(|e| {
            MoneyError::InvalidData(format!("Invalid amount in {}: {}", s, e))
        })?;
        let currency = code.parse()?;

        Ok(Money::new(amount, currency))
    }
}
