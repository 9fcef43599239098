//! Conversion results and the exchange-rate source trait

use crate::currency::{Currency, CurrencyPair};
use crate::error::MoneyError;
use crate::money::Money;
use std::fmt;

/// Outcome of a conversion: exactly one of a success value or a failure reason.
///
/// Used both for a single conversion (`E` = [`MissingExchangeRate`]) and for a
/// whole portfolio evaluation (`E` = aggregated message).
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionResult<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> ConversionResult<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ConversionResult::Failure(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ConversionResult::Success(value) => Some(value),
            ConversionResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&E> {
        match self {
            ConversionResult::Success(_) => None,
            ConversionResult::Failure(reason) => Some(reason),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ConversionResult<U, E> {
        match self {
            ConversionResult::Success(value) => ConversionResult::Success(f(value)),
            ConversionResult::Failure(reason) => ConversionResult::Failure(reason),
        }
    }

    pub fn map_failure<G, F: FnOnce(E) -> G>(self, f: F) -> ConversionResult<T, G> {
        match self {
            ConversionResult::Success(value) => ConversionResult::Success(value),
            ConversionResult::Failure(reason) => ConversionResult::Failure(f(reason)),
        }
    }

    /// Convert into a standard `Result` so callers can use `?`
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<ConversionResult<T, E>> for Result<T, E> {
    fn from(result: ConversionResult<T, E>) -> Self {
        match result {
            ConversionResult::Success(value) => Ok(value),
            ConversionResult::Failure(reason) => Err(reason),
        }
    }
}

impl<T, E> From<Result<T, E>> for ConversionResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => ConversionResult::Success(value),
            Err(reason) => ConversionResult::Failure(reason),
        }
    }
}

/// A directed pair with no registered rate. Renders as `"from->to"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingExchangeRate {
    pub from: Currency,
    pub to: Currency,
}

impl MissingExchangeRate {
    pub fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }

    pub fn pair(&self) -> CurrencyPair {
        CurrencyPair::new(self.from, self.to)
    }
}

impl fmt::Display for MissingExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

impl std::error::Error for MissingExchangeRate {}

impl From<MissingExchangeRate> for MoneyError {
    fn from(missing: MissingExchangeRate) -> Self {
        MoneyError::MissingExchangeRate {
            from: missing.from,
            to: missing.to,
        }
    }
}

/// Source of single-hop conversions
pub trait ExchangeRates {
    /// Convert `amount` of `from` into `to`.
    ///
    /// Never fails for `from == to`. A missing rate is returned as data, not
    /// raised, so callers can keep going and collect every failure.
    fn convert(
        &self,
        amount: f64,
        from: Currency,
        to: Currency,
    ) -> ConversionResult<Money, MissingExchangeRate>;

    /// Convert a `Money` value
    fn convert_money(&self, money: &Money, to: Currency) -> ConversionResult<Money, MissingExchangeRate> {
        self.convert(money.amount(), money.currency(), to)
    }
}
