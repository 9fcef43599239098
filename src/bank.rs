//! Exchange-rate table
//!
//! Stores directed, single-hop rates keyed by `(from, to)` and performs
//! conversion. Only explicitly registered pairs convert; the reverse pair is
//! never derived. Same-currency conversion always succeeds with rate 1.

use crate::conversion::{ConversionResult, ExchangeRates, MissingExchangeRate};
use crate::currency::{Currency, CurrencyPair};
use crate::error::{MoneyError, Result};
use crate::money::Money;
use std::collections::HashMap;

/// Mutable table of exchange rates
///
/// # Example
/// ```
/// use money_problem::bank::Bank;
/// use money_problem::currency::Currency;
/// use money_problem::money::Money;
/// use money_problem::conversion::ConversionResult;
///
/// let mut bank = Bank::with_exchange_rate(Currency::EUR, Currency::USD, 1.2);
/// assert_eq!(
///     bank.convert(10.0, Currency::EUR, Currency::USD),
///     ConversionResult::Success(Money::new(12.0, Currency::USD))
/// );
///
/// bank.add_exchange_rate(Currency::EUR, Currency::USD, 1.3);
/// assert_eq!(
///     bank.convert(10.0, Currency::EUR, Currency::USD),
///     ConversionResult::Success(Money::new(13.0, Currency::USD))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bank {
    rates: HashMap<CurrencyPair, f64>,
}

impl Bank {
    /// Create an empty bank
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bank seeded with one rate.
    ///
    /// The rate is not validated; zero or negative rates are the caller's
    /// responsibility.
    pub fn with_exchange_rate(from: Currency, to: Currency, rate: f64) -> Self {
        let mut bank = Self::new();
        bank.add_exchange_rate(from, to, rate);
        bank
    }

    /// Insert or overwrite the rate for exactly `from -> to`
    pub fn add_exchange_rate(&mut self, from: Currency, to: Currency, rate: f64) {
        let pair = CurrencyPair::new(from, to);
        match self.rates.insert(pair, rate) {
            Some(previous) => log::debug!("Replaced rate {}: {} -> {}", pair, previous, rate),
            None => log::debug!("Added rate {} = {}", pair, rate),
        }
    }

    /// Add multiple rates at once
    pub fn add_exchange_rates<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (Currency, Currency, f64)>,
    {
        for (from, to, rate) in entries {
            self.add_exchange_rate(from, to, rate);
        }
    }

    /// Load rates from CSV data
    ///
    /// Expected format: from_currency,to_currency,rate
    pub fn load_from_csv(&mut self, csv_data: &str) -> Result<usize> {
        let mut entries = Vec::new();

        for (line_num, line) in csv_data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split(',').map(|s| s.trim()).collect();
            if parts.len() != 3 {
                return Err(MoneyError::InvalidData(format!(
                    "Invalid CSV format at line {}: expected 3 columns, got {}",
                    line_num + 1,
                    parts.len()
                )));
            }

            let currency = |code: &str| -> Result<Currency> {
                code.parse().map_err(|e| {
                    MoneyError::InvalidData(format!("Invalid currency at line {}: {}", line_num + 1, e))
                })
            };
            let from = currency(parts[0])?;
            let to = currency(parts[1])?;
            let rate: f64 = parts[2].parse().map_err(|e| {
                MoneyError::InvalidData(format!("Invalid rate at line {}: {}", line_num + 1, e))
            })?;

            entries.push((from, to, rate));
        }

        // All-or-nothing: nothing is applied if any line is malformed
        let count = entries.len();
        self.add_exchange_rates(entries);
        Ok(count)
    }

    /// Registered rate for exactly `from -> to`
    pub fn rate(&self, from: Currency, to: Currency) -> Option<f64> {
        self.rates.get(&CurrencyPair::new(from, to)).copied()
    }

    pub fn has_rate(&self, from: Currency, to: Currency) -> bool {
        self.rates.contains_key(&CurrencyPair::new(from, to))
    }

    /// Number of registered pairs
    pub fn num_rates(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// All rates, sorted by pair
    pub fn rates(&self) -> Vec<(CurrencyPair, f64)> {
        let mut rates: Vec<_> = self.rates.iter().map(|(pair, rate)| (*pair, *rate)).collect();
        rates.sort_by_key(|(pair, _)| *pair);
        rates
    }

    /// Clear all rates
    pub fn clear(&mut self) {
        self.rates.clear();
    }

    /// Convert `amount` from one currency to another
    pub fn convert(
        &self,
        amount: f64,
        from: Currency,
        to: Currency,
    ) -> ConversionResult<Money, MissingExchangeRate> {
        if from == to {
            return ConversionResult::Success(Money::new(amount, to));
        }

        match self.rate(from, to) {
            Some(rate) => ConversionResult::Success(Money::new(amount * rate, to)),
            None => {
                log::debug!("No exchange rate for {}->{}", from, to);
                ConversionResult::Failure(MissingExchangeRate::new(from, to))
            }
        }
    }

    /// Fail-fast variant of [`Bank::convert`] for single conversions
    pub fn try_convert(&self, amount: f64, from: Currency, to: Currency) -> Result<Money> {
        self.convert(amount, from, to)
            .into_result()
            .map_err(MoneyError::from)
    }
}

impl ExchangeRates for Bank {
    fn convert(
        &self,
        amount: f64,
        from: Currency,
        to: Currency,
    ) -> ConversionResult<Money, MissingExchangeRate> {
        Bank::convert(self, amount, from, to)
    }
}
