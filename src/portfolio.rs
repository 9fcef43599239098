//! Multi-currency portfolio
//!
//! A portfolio holds one entry per `add`, in insertion order. Evaluating it
//! converts every entry independently and either sums them all or reports
//! every missing rate at once, never a partial total.

use crate::conversion::{ConversionResult, ExchangeRates, MissingExchangeRate};
use crate::currency::Currency;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Immutable collection of `Money` entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    moneys: Vec<Money>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// New portfolio with every existing entry plus `money`
    #[must_use]
    pub fn add(&self, money: Money) -> Portfolio {
        let mut moneys = self.moneys.clone();
        moneys.push(money);
        Portfolio { moneys }
    }

    pub fn len(&self) -> usize {
        self.moneys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moneys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Money> {
        self.moneys.iter()
    }

    /// Total value in `currency`
    ///
    /// Fails with `"Missing exchange rate(s): [A->B],[C->D]"` listing every
    /// entry that could not be converted, in entry order.
    pub fn evaluate<R: ExchangeRates + ?Sized>(
        &self,
        bank: &R,
        currency: Currency,
    ) -> ConversionResult<Money, String> {
        let results: Vec<ConversionResult<Money, MissingExchangeRate>> = self
            .moneys
            .iter()
            .map(|money| bank.convert_money(money, currency))
            .collect();

        let missing: Vec<&MissingExchangeRate> =
            results.iter().filter_map(ConversionResult::failure).collect();

        if !missing.is_empty() {
            log::warn!(
                "Portfolio evaluation in {} failed: {} missing exchange rate(s)",
                currency,
                missing.len()
            );
            return ConversionResult::Failure(missing_rates_message(&missing));
        }

        let total = results
            .iter()
            .filter_map(ConversionResult::success)
            .fold(0.0, |acc, money| acc + money.amount());

        ConversionResult::Success(Money::new(total, currency))
    }
}

fn missing_rates_message(missing: &[&MissingExchangeRate]) -> String {
    let pairs: Vec<String> = missing.iter().map(|m| format!("[{}]", m)).collect();
    format!("Missing exchange rate(s): {}", pairs.join(","))
}

impl FromIterator<Money> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Money>>(iter: I) -> Self {
        Portfolio {
            moneys: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a Money;
    type IntoIter = std::slice::Iter<'a, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.moneys.iter()
    }
}
