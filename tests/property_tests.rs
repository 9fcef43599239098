//! Property-based tests for conversion and evaluation invariants.
//!
//! - Same-currency conversion is the identity, whatever the table holds
//! - Overwriting a rate replaces it
//! - A pair never registered always fails
//! - Evaluation does not depend on entry order and is repeatable

use approx::relative_eq;
use money_problem::prelude::*;
use proptest::prelude::*;

fn currency() -> impl Strategy<Value = Currency> {
    proptest::sample::select(Currency::all())
}

fn rate() -> impl Strategy<Value = f64> {
    0.001f64..10_000.0
}

fn money() -> impl Strategy<Value = Money> {
    (-1_000_000.0f64..1_000_000.0, currency()).prop_map(|(amount, c)| Money::new(amount, c))
}

fn rates() -> impl Strategy<Value = Vec<(Currency, Currency, f64)>> {
    proptest::collection::vec((currency(), currency(), rate()), 0..20)
}

fn bank_from(rates: &[(Currency, Currency, f64)]) -> Bank {
    let mut bank = Bank::new();
    bank.add_exchange_rates(rates.iter().copied());
    bank
}

proptest! {
    #[test]
    fn test_same_currency_is_identity(
        amount in -1e9f64..1e9,
        c in currency(),
        table in rates(),
    ) {
        let bank = bank_from(&table);
        prop_assert_eq!(
            bank.convert(amount, c, c),
            ConversionResult::Success(Money::new(amount, c))
        );
    }

    #[test]
    fn test_last_rate_wins(
        amount in -1e6f64..1e6,
        from in currency(),
        to in currency(),
        r1 in rate(),
        r2 in rate(),
    ) {
        prop_assume!(from != to);
        let mut bank = Bank::with_exchange_rate(from, to, r1);
        bank.add_exchange_rate(from, to, r2);

        prop_assert_eq!(
            bank.convert(amount, from, to),
            ConversionResult::Success(Money::new(amount * r2, to))
        );
    }

    #[test]
    fn test_unregistered_pair_fails(
        amount in -1e6f64..1e6,
        from in currency(),
        to in currency(),
        table in rates(),
    ) {
        prop_assume!(from != to);
        let table: Vec<_> = table
            .into_iter()
            .filter(|(f, t, _)| !(*f == from && *t == to))
            .collect();
        let bank = bank_from(&table);

        prop_assert_eq!(
            bank.convert(amount, from, to),
            ConversionResult::Failure(MissingExchangeRate::new(from, to))
        );
    }

    #[test]
    fn test_evaluation_is_order_independent(
        moneys in proptest::collection::vec(money(), 0..12),
        table in rates(),
        target in currency(),
    ) {
        let bank = bank_from(&table);
        let forward: Portfolio = moneys.iter().copied().collect();
        let backward: Portfolio = moneys.iter().rev().copied().collect();
        let magnitude: Portfolio = moneys
            .iter()
            .map(|m| Money::new(m.amount().abs(), m.currency()))
            .collect();

        match (forward.evaluate(&bank, target), backward.evaluate(&bank, target)) {
            (ConversionResult::Success(a), ConversionResult::Success(b)) => {
                let scale = magnitude
                    .evaluate(&bank, target)
                    .success()
                    .map(Money::amount)
                    .unwrap_or(0.0);
                prop_assert_eq!(a.currency(), target);
                prop_assert!(relative_eq!(
                    a.amount(),
                    b.amount(),
                    epsilon = 1e-9 * (scale + 1.0)
                ));
            }
            (ConversionResult::Failure(_), ConversionResult::Failure(_)) => {}
            (a, b) => prop_assert!(false, "mismatched outcomes: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn test_evaluation_is_repeatable(
        moneys in proptest::collection::vec(money(), 0..12),
        table in rates(),
        target in currency(),
    ) {
        let bank = bank_from(&table);
        let portfolio: Portfolio = moneys.into_iter().collect();

        prop_assert_eq!(
            portfolio.evaluate(&bank, target),
            portfolio.evaluate(&bank, target)
        );
    }

    #[test]
    fn test_one_bracket_per_failing_entry(
        moneys in proptest::collection::vec(money(), 1..12),
        target in currency(),
    ) {
        let portfolio: Portfolio = moneys.iter().copied().collect();
        let failing = moneys.iter().filter(|m| m.currency() != target).count();

        match portfolio.evaluate(&Bank::new(), target) {
            ConversionResult::Success(total) => prop_assert_eq!(failing, 0, "{}", total),
            ConversionResult::Failure(message) => {
                prop_assert!(message.starts_with("Missing exchange rate(s): ["));
                prop_assert_eq!(message.matches('[').count(), failing);
            }
        }
    }
}
