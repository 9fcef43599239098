//! Error message formatting tests

use money_problem::prelude::*;

#[test]
fn test_missing_exchange_rate_message() {
    let err = MoneyError::MissingExchangeRate {
        from: Currency::EUR,
        to: Currency::KRW,
    };
    assert_eq!(err.to_string(), "EUR->KRW");
}

#[test]
fn test_try_convert_missing_rate() {
    let bank = Bank::with_exchange_rate(Currency::EUR, Currency::USD, 1.2);

    let err = bank
        .try_convert(10.0, Currency::EUR, Currency::KRW)
        .unwrap_err();
    assert_eq!(err.to_string(), "EUR->KRW");

    assert_eq!(
        bank.try_convert(10.0, Currency::EUR, Currency::USD).unwrap(),
        Money::new(12.0, Currency::USD)
    );
}

#[test]
fn test_currency_mismatch_message() {
    let err = Money::new(5.0, Currency::USD)
        .add(Money::new(10.0, Currency::EUR))
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("Currency mismatch"));
    assert!(msg.contains("USD"));
    assert!(msg.contains("EUR"));
}

#[test]
fn test_division_by_zero_message() {
    let err = Money::new(4002.0, Currency::KRW).divide(0.0).unwrap_err();
    assert_eq!(err.to_string(), "Division by zero");
}

#[test]
fn test_pivot_bank_messages() {
    assert_eq!(
        ExchangeRate::new(-2.0, Currency::USD).unwrap_err().to_string(),
        "Exchange rate should be greater than 0"
    );
    assert_eq!(
        PivotBank::with_pivot_currency(Currency::EUR)
            .add(ExchangeRate::new(0.9, Currency::EUR).unwrap())
            .unwrap_err()
            .to_string(),
        "Can not add an exchange rate for the pivot currency"
    );
    assert_eq!(MoneyError::NoBankDefined.to_string(), "No bank defined");
}

#[test]
fn test_unknown_currency_message() {
    let err = "ABC".parse::<Currency>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown currency: ABC");
}

#[test]
fn test_question_mark_propagation() {
    fn total_in_usd(bank: &Bank) -> Result<Money> {
        let eur = bank.try_convert(10.0, Currency::EUR, Currency::USD)?;
        let krw = bank.try_convert(1100.0, Currency::KRW, Currency::USD)?;
        eur.add(krw)
    }

    let bank = Bank::with_exchange_rate(Currency::EUR, Currency::USD, 1.2);
    assert!(matches!(
        total_in_usd(&bank),
        Err(MoneyError::MissingExchangeRate {
            from: Currency::KRW,
            to: Currency::USD
        })
    ));
}
