//! Property-based tests for the conversion engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::ConversionEngine;

/// Strategy to generate non-negative amounts (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate rates of at least 1 (1.0000 to 10000.0000).
///
/// Below a rate of 1, a cent of rounding on the receive side is worth
/// more than a cent on the send side, so the two-decimal round trip is
/// only tight for rates >= 1.
fn unit_or_greater_rate() -> impl Strategy<Value = Decimal> {
    (10_000i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate fee percentages (0.00 to 100.00).
fn fee_percent() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate strictly positive markups (0.01 to 100.00).
fn positive_markup() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000i64).prop_map(|v| Decimal::new(v, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Zero or absent markup leaves the mid-market rate unchanged.
    #[test]
    fn prop_zero_markup_is_identity(rate in positive_rate()) {
        prop_assert_eq!(ConversionEngine::effective_rate(rate, None).unwrap(), rate);
        prop_assert_eq!(
            ConversionEngine::effective_rate(rate, Some(Decimal::ZERO)).unwrap(),
            rate
        );
    }

    /// A positive markup always moves the effective rate up.
    #[test]
    fn prop_markup_increases_rate(
        rate in positive_rate(),
        markup in positive_markup(),
    ) {
        let effective = ConversionEngine::effective_rate(rate, Some(markup)).unwrap();
        prop_assert!(
            effective > rate,
            "effective rate {} should exceed mid-market rate {}",
            effective, rate
        );
    }

    /// Converting to the receive side and back recovers the send amount
    /// to within two-decimal rounding tolerance.
    #[test]
    fn prop_round_trip_within_tolerance(
        send in amount(),
        rate in unit_or_greater_rate(),
    ) {
        let receive = ConversionEngine::receive_from_send(send, rate).unwrap();
        let back = ConversionEngine::send_from_receive(receive, rate).unwrap();
        let diff = (back - send).abs();
        prop_assert!(
            diff <= Decimal::new(1, 2),
            "round trip of {} at rate {} drifted by {}",
            send, rate, diff
        );
    }

    /// A higher fee never lowers the total payable.
    #[test]
    fn prop_fee_is_monotonic(
        send in amount(),
        fee_a in fee_percent(),
        fee_b in fee_percent(),
    ) {
        let (low, high) = if fee_a <= fee_b { (fee_a, fee_b) } else { (fee_b, fee_a) };
        let total_low = ConversionEngine::total_payable(send, low).unwrap();
        let total_high = ConversionEngine::total_payable(send, high).unwrap();
        prop_assert!(
            total_high >= total_low,
            "total at {}% ({}) fell below total at {}% ({})",
            high, total_high, low, total_low
        );
    }

    /// A zero fee leaves the send amount unchanged apart from rounding.
    #[test]
    fn prop_zero_fee_is_identity(send in amount()) {
        let total = ConversionEngine::total_payable(send, Decimal::ZERO).unwrap();
        prop_assert_eq!(total, ConversionEngine::round_money(send));
    }

    /// Conversion results always carry at most two decimal places.
    #[test]
    fn prop_amounts_round_to_2_decimals(
        send in amount(),
        rate in positive_rate(),
    ) {
        let receive = ConversionEngine::receive_from_send(send, rate).unwrap();
        let scaled = receive * Decimal::ONE_HUNDRED;
        prop_assert_eq!(
            scaled.round(), scaled,
            "receive amount {} should have at most 2 decimal places",
            receive
        );
    }

    /// The engine is deterministic: identical inputs, identical outputs.
    #[test]
    fn prop_conversion_is_deterministic(
        send in amount(),
        rate in positive_rate(),
    ) {
        let first = ConversionEngine::receive_from_send(send, rate).unwrap();
        let second = ConversionEngine::receive_from_send(send, rate).unwrap();
        prop_assert_eq!(first, second);
    }
}
