//! TOML bank configuration
//!
//! ```toml
//! pivot = "EUR"
//!
//! [[rates]]
//! from = "EUR"
//! to = "USD"
//! rate = 1.2
//! ```

use crate::bank::Bank;
use crate::currency::Currency;
use crate::error::{MoneyError, Result};
use crate::pivot::{ExchangeRate, PivotBank};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One configured rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    pub from: Currency,
    pub to: Currency,
    pub rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankConfig {
    #[serde(default)]
    pub pivot: Option<Currency>,
    #[serde(default)]
    pub rates: Vec<RateConfig>,
}

impl BankConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded bank config from {}", path.as_ref().display());
        Self::from_toml_str(&contents)
    }

    /// Plain bank with every configured rate; `pivot` is ignored
    pub fn to_bank(&self) -> Bank {
        let mut bank = Bank::new();
        bank.add_exchange_rates(self.rates.iter().map(|r| (r.from, r.to, r.rate)));
        bank
    }

    /// Pivot bank; every rate must be quoted from the pivot
    pub fn to_pivot_bank(&self) -> Result<PivotBank> {
        let pivot = self
            .pivot
            .ok_or_else(|| MoneyError::ConfigError("no pivot currency configured".to_string()))?;

        self.rates
            .iter()
            .try_fold(PivotBank::with_pivot_currency(pivot), |bank, r| {
                if r.from != pivot {
                    return Err(MoneyError::ConfigError(format!(
                        "rate {}->{} is not quoted from pivot {}",
                        r.from, r.to, pivot
                    )));
                }
                bank.add(ExchangeRate::new(r.rate, r.to)?)
            })
    }
}
