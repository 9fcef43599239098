//! Error types for money_problem

use crate::currency::Currency;
use thiserror::Error;

/// Main error type for money_problem
#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("{from}->{to}")]
    MissingExchangeRate { from: Currency, to: Currency },

    /// Aggregated portfolio failure, message kept verbatim
    #[error("{0}")]
    MissingExchangeRates(String),

    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: Currency, found: Currency },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Exchange rate should be greater than 0")]
    InvalidExchangeRate(f64),

    #[error("Can not add an exchange rate for the pivot currency")]
    PivotCurrencyRate,

    #[error("No bank defined")]
    NoBankDefined,

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias for money_problem operations
pub type Result<T> = std::result::Result<T, MoneyError>;
