//! Pivot-currency bank
//!
//! Rates are registered against a single pivot currency. Each registration
//! stores both directions (`pivot -> c` and `c -> pivot`), and any two
//! registered currencies convert through the pivot. Adding a rate returns a
//! new bank; an existing `PivotBank` never changes.

use crate::conversion::{ConversionResult, ExchangeRates, MissingExchangeRate};
use crate::currency::{Currency, CurrencyPair};
use crate::error::{MoneyError, Result};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rate of one currency against the pivot: `1 pivot = rate currency`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    rate: f64,
    currency: Currency,
}

impl ExchangeRate {
    /// Rejects rates that are not strictly positive
    pub fn new(rate: f64, currency: Currency) -> Result<Self> {
        if rate.is_nan() || rate <= 0.0 {
            return Err(MoneyError::InvalidExchangeRate(rate));
        }
        Ok(Self { rate, currency })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PivotBank {
    pivot: Currency,
    rates: HashMap<CurrencyPair, f64>,
}

impl PivotBank {
    pub fn with_pivot_currency(pivot: Currency) -> Self {
        Self {
            pivot,
            rates: HashMap::new(),
        }
    }

    pub fn pivot_currency(&self) -> Currency {
        self.pivot
    }

    /// New bank with `exchange_rate` registered in both directions
    pub fn add(&self, exchange_rate: ExchangeRate) -> Result<PivotBank> {
        let currency = exchange_rate.currency();
        if currency == self.pivot {
            return Err(MoneyError::PivotCurrencyRate);
        }

        let mut rates = self.rates.clone();
        rates.insert(CurrencyPair::new(self.pivot, currency), exchange_rate.rate());
        rates.insert(CurrencyPair::new(currency, self.pivot), 1.0 / exchange_rate.rate());
        log::debug!(
            "Pivot bank {}: registered {} at {}",
            self.pivot,
            currency,
            exchange_rate.rate()
        );

        Ok(PivotBank {
            pivot: self.pivot,
            rates,
        })
    }

    fn direct_rate(&self, from: Currency, to: Currency) -> Option<f64> {
        self.rates.get(&CurrencyPair::new(from, to)).copied()
    }

    fn rate(&self, from: Currency, to: Currency) -> Option<f64> {
        if from == to {
            return Some(1.0);
        }
        if let Some(rate) = self.direct_rate(from, to) {
            return Some(rate);
        }

        // from -> pivot -> to
        let to_pivot = self.direct_rate(from, self.pivot)?;
        let from_pivot = self.direct_rate(self.pivot, to)?;
        Some(to_pivot * from_pivot)
    }

    /// Convert `money` into `to`, directly or through the pivot
    pub fn convert(&self, money: &Money, to: Currency) -> ConversionResult<Money, MissingExchangeRate> {
        if money.currency() == to {
            return ConversionResult::Success(*money);
        }

        match self.rate(money.currency(), to) {
            Some(rate) => ConversionResult::Success(Money::new(money.amount() * rate, to)),
            None => ConversionResult::Failure(MissingExchangeRate::new(money.currency(), to)),
        }
    }
}

impl ExchangeRates for PivotBank {
    fn convert(
        &self,
        amount: f64,
        from: Currency,
        to: Currency,
    ) -> ConversionResult<Money, MissingExchangeRate> {
        PivotBank::convert(self, &Money::new(amount, from), to)
    }
}
