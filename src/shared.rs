//! Lock-guarded bank for callers that share one rate table across threads

use crate::bank::Bank;
use crate::conversion::{ConversionResult, MissingExchangeRate};
use crate::currency::Currency;
use crate::money::Money;
use crate::portfolio::Portfolio;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared handle to a [`Bank`]. Clones share the same table.
///
/// Every portfolio evaluation runs under a single read lock, so all of its
/// lookups observe one consistent set of rates.
#[derive(Debug, Clone, Default)]
pub struct SharedBank {
    inner: Arc<RwLock<Bank>>,
}

impl SharedBank {
    pub fn new(bank: Bank) -> Self {
        Self {
            inner: Arc::new(RwLock::new(bank)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Bank> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Bank> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or overwrite a rate
    pub fn add_exchange_rate(&self, from: Currency, to: Currency, rate: f64) {
        self.write().add_exchange_rate(from, to, rate);
    }

    pub fn convert(
        &self,
        amount: f64,
        from: Currency,
        to: Currency,
    ) -> ConversionResult<Money, MissingExchangeRate> {
        self.read().convert(amount, from, to)
    }

    /// Evaluate `portfolio` against one snapshot of the rates
    pub fn evaluate(&self, portfolio: &Portfolio, currency: Currency) -> ConversionResult<Money, String> {
        let bank = self.read();
        portfolio.evaluate(&*bank, currency)
    }

    /// Copy of the current table
    pub fn snapshot(&self) -> Bank {
        self.read().clone()
    }
}

impl From<Bank> for SharedBank {
    fn from(bank: Bank) -> Self {
        Self::new(bank)
    }
}
