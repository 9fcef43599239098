//! # money_problem
//!
//! Money values, exchange-rate banks and multi-currency portfolios.
//!
//! A [`Portfolio`](portfolio::Portfolio) evaluated against a
//! [`Bank`](bank::Bank) either sums every entry in the target currency or
//! reports every missing exchange rate at once.
//!
//! ## Example
//!
//! ```rust
//! use money_problem::prelude::*;
//!
//! let mut bank = Bank::with_exchange_rate(Currency::USD, Currency::KRW, 1100.0);
//! bank.add_exchange_rate(Currency::EUR, Currency::USD, 1.2);
//!
//! let portfolio = Portfolio::new()
//!     .add(Money::new(5.0, Currency::USD))
//!     .add(Money::new(10.0, Currency::EUR));
//!
//! assert_eq!(
//!     portfolio.evaluate(&bank, Currency::USD),
//!     ConversionResult::Success(Money::new(17.0, Currency::USD))
//! );
//!
//! let with_krw = portfolio.add(Money::new(1.0, Currency::KRW));
//! assert_eq!(
//!     with_krw.evaluate(&bank, Currency::EUR),
//!     ConversionResult::Failure(
//!         "Missing exchange rate(s): [USD->EUR],[KRW->EUR]".to_string()
//!     )
//! );
//! ```

pub mod bank;
pub mod config;
pub mod conversion;
pub mod currency;
pub mod error;
pub mod money;
pub mod pivot;
pub mod portfolio;
pub mod shared;
pub mod usecases;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::bank::Bank;
    pub use crate::conversion::{ConversionResult, ExchangeRates, MissingExchangeRate};
    pub use crate::currency::{Currency, CurrencyPair};
    pub use crate::error::{MoneyError, Result};
    pub use crate::money::Money;
    pub use crate::pivot::{ExchangeRate, PivotBank};
    pub use crate::portfolio::Portfolio;
    pub use crate::shared::SharedBank;
}
