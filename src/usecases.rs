//! Bank setup use cases
//!
//! Commands that create a pivot bank and register rates on it through a
//! [`BankRepository`] port.

use crate::currency::Currency;
use crate::error::{MoneyError, Result};
use crate::pivot::{ExchangeRate, PivotBank};

/// Storage port for the current bank
pub trait BankRepository {
    fn get_bank(&self) -> Option<PivotBank>;

    fn save(&mut self, bank: PivotBank);
}

/// Keeps the bank in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryBankRepository {
    bank: Option<PivotBank>,
}

impl InMemoryBankRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BankRepository for InMemoryBankRepository {
    fn get_bank(&self) -> Option<PivotBank> {
        self.bank.clone()
    }

    fn save(&mut self, bank: PivotBank) {
        self.bank = Some(bank);
    }
}

/// Create a bank pivoting on `currency`, replacing any existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupBank {
    pub currency: Currency,
}

/// Register `1 pivot = rate currency` on the saved bank
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddExchangeRate {
    pub rate: f64,
    pub currency: Currency,
}

pub struct SetupBankUseCase<'a, R: BankRepository> {
    repository: &'a mut R,
}

impl<'a, R: BankRepository> SetupBankUseCase<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    pub fn invoke(&mut self, command: SetupBank) -> Result<()> {
        log::debug!("Setting up bank with pivot {}", command.currency);
        self.repository
            .save(PivotBank::with_pivot_currency(command.currency));
        Ok(())
    }
}

pub struct AddExchangeRateUseCase<'a, R: BankRepository> {
    repository: &'a mut R,
}

impl<'a, R: BankRepository> AddExchangeRateUseCase<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    /// Rate validity is checked before the bank lookup
    pub fn invoke(&mut self, command: AddExchangeRate) -> Result<()> {
        let exchange_rate = ExchangeRate::new(command.rate, command.currency)?;
        let bank = self.repository.get_bank().ok_or(MoneyError::NoBankDefined)?;

        let updated = bank.add(exchange_rate)?;
        self.repository.save(updated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    /// Counts saves so tests can check the repository was written
    #[derive(Default)]
    struct RecordingRepository {
        bank: Option<PivotBank>,
        saves: usize,
    }

    impl BankRepository for RecordingRepository {
        fn get_bank(&self) -> Option<PivotBank> {
            self.bank.clone()
        }

        fn save(&mut self, bank: PivotBank) {
            self.bank = Some(bank);
            self.saves += 1;
        }
    }

    fn with_pivot(pivot: Currency) -> RecordingRepository {
        RecordingRepository {
            bank: Some(PivotBank::with_pivot_currency(pivot)),
            saves: 0,
        }
    }

    fn add_error(repository: &mut RecordingRepository, rate: f64, currency: Currency) -> String {
        AddExchangeRateUseCase::new(repository)
            .invoke(AddExchangeRate { rate, currency })
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn test_error_when_bank_not_setup() {
        let mut repository = RecordingRepository::default();
        assert_eq!(add_error(&mut repository, 1.0, Currency::USD), "No bank defined");
        assert_eq!(repository.saves, 0);
    }

    #[test]
    fn test_error_when_rate_is_invalid() {
        let mut repository = RecordingRepository::default();
        assert_eq!(
            add_error(&mut repository, -2.0, Currency::USD),
            "Exchange rate should be greater than 0"
        );
    }

    #[test]
    fn test_error_when_rate_for_pivot() {
        let mut repository = with_pivot(Currency::EUR);
        assert_eq!(
            add_error(&mut repository, 0.9, Currency::EUR),
            "Can not add an exchange rate for the pivot currency"
        );
        assert_eq!(repository.saves, 0);
    }

    #[test]
    fn test_valid_rate_saves_bank() {
        let mut repository = with_pivot(Currency::EUR);

        AddExchangeRateUseCase::new(&mut repository)
            .invoke(AddExchangeRate {
                rate: 1.0,
                currency: Currency::USD,
            })
            .unwrap();

        assert_eq!(repository.saves, 1);
        let bank = repository.get_bank().unwrap();
        assert!(bank
            .convert(&Money::new(1.0, Currency::USD), Currency::EUR)
            .is_success());
    }

    #[test]
    fn test_setup_bank() {
        let mut repository = InMemoryBankRepository::new();
        assert!(repository.get_bank().is_none());

        SetupBankUseCase::new(&mut repository)
            .invoke(SetupBank {
                currency: Currency::KRW,
            })
            .unwrap();

        assert_eq!(
            repository.get_bank().map(|b| b.pivot_currency()),
            Some(Currency::KRW)
        );
    }
}
