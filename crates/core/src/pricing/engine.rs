//! Conversion engine arithmetic.
//!
//! CRITICAL: Rounding strategy for customer-facing amounts:
//! - Always round to 2 decimal places
//! - Use half-away-from-zero rounding (what cashiers and receipts expect)
//! - Rates are never rounded, only amounts

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::error::PricingError;
use super::types::{AmountSide, ConversionQuote, ConversionRequest};
use remesa_shared::types::Money;

/// Decimal places for customer-facing amounts.
const MONEY_DP: u32 = 2;

/// Stateless conversion engine.
///
/// Every operation validates its inputs and fails fast on nonsensical
/// values rather than propagating them into amounts. Identical inputs
/// always produce identical outputs; there is no caching and no I/O.
pub struct ConversionEngine;

impl ConversionEngine {
    /// Rounds a customer-facing amount to 2 decimal places, half away
    /// from zero.
    #[must_use]
    pub fn round_money(value: Decimal) -> Decimal {
        value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Applies the special-rate markup to a mid-market rate.
    ///
    /// A markup of `None` or zero leaves the rate unchanged; a positive
    /// markup of `p` percent yields `rate * (1 + p / 100)`.
    ///
    /// # Errors
    ///
    /// `InvalidRate` if the rate is not positive, `InvalidPercent` if the
    /// markup is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use remesa_core::pricing::ConversionEngine;
    /// use rust_decimal_macros::dec;
    ///
    /// let rate = ConversionEngine::effective_rate(dec!(18.50), Some(dec!(5))).unwrap();
    /// assert_eq!(rate, dec!(19.425));
    /// ```
    pub fn effective_rate(
        mid_market_rate: Decimal,
        special_rate_percent: Option<Decimal>,
    ) -> Result<Decimal, PricingError> {
        if mid_market_rate <= Decimal::ZERO {
            return Err(PricingError::InvalidRate(mid_market_rate));
        }
        match special_rate_percent {
            Some(markup) if markup.is_sign_negative() => Err(PricingError::InvalidPercent(markup)),
            Some(markup) if markup > Decimal::ZERO => {
                Ok(mid_market_rate * (Decimal::ONE + markup / Decimal::ONE_HUNDRED))
            }
            _ => Ok(mid_market_rate),
        }
    }

    /// Computes what the receiver gets for a given send amount.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` if the amount is negative, `InvalidRate` if the
    /// rate is not positive.
    pub fn receive_from_send(
        send_amount: Decimal,
        effective_rate: Decimal,
    ) -> Result<Decimal, PricingError> {
        if send_amount.is_sign_negative() {
            return Err(PricingError::InvalidAmount(send_amount));
        }
        if effective_rate <= Decimal::ZERO {
            return Err(PricingError::InvalidRate(effective_rate));
        }
        Ok(Self::round_money(send_amount * effective_rate))
    }

    /// Computes what the sender must pay for a given receive amount.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` if the amount is negative, `InvalidRate` if the
    /// rate is not positive (a zero rate is rejected here, never divided
    /// by).
    pub fn send_from_receive(
        receive_amount: Decimal,
        effective_rate: Decimal,
    ) -> Result<Decimal, PricingError> {
        if receive_amount.is_sign_negative() {
            return Err(PricingError::InvalidAmount(receive_amount));
        }
        if effective_rate <= Decimal::ZERO {
            return Err(PricingError::InvalidRate(effective_rate));
        }
        Ok(Self::round_money(receive_amount / effective_rate))
    }

    /// Computes the fee-inclusive total the sender pays.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` if the amount is negative, `InvalidPercent` if the
    /// fee percentage is negative.
    pub fn total_payable(
        send_amount: Decimal,
        fee_percent: Decimal,
    ) -> Result<Decimal, PricingError> {
        if send_amount.is_sign_negative() {
            return Err(PricingError::InvalidAmount(send_amount));
        }
        if fee_percent.is_sign_negative() {
            return Err(PricingError::InvalidPercent(fee_percent));
        }
        Ok(Self::round_money(
            send_amount + send_amount * fee_percent / Decimal::ONE_HUNDRED,
        ))
    }

    /// Produces a full conversion quote for a request.
    ///
    /// The edited side carries the authoritative amount; the other side is
    /// derived through the effective rate. Identical send and receive
    /// currencies are not special-cased: callers wanting an identity
    /// conversion pass a mid-market rate of 1.
    ///
    /// # Errors
    ///
    /// Any `PricingError` raised by the underlying operations.
    pub fn quote(request: &ConversionRequest) -> Result<ConversionQuote, PricingError> {
        let effective =
            Self::effective_rate(request.mid_market_rate, request.pricing.special_rate_percent)?;

        let (send_amount, receive_amount) = match request.edited_side {
            AmountSide::Send => {
                let receive = Self::receive_from_send(request.amount, effective)?;
                (request.amount, receive)
            }
            AmountSide::Receive => {
                let send = Self::send_from_receive(request.amount, effective)?;
                (send, request.amount)
            }
        };

        let total_payable = Self::total_payable(send_amount, request.pricing.fee_percent)?;

        Ok(ConversionQuote {
            send: Money::new(send_amount, request.send_currency.clone()),
            receive: Money::new(receive_amount, request.receive_currency.clone()),
            effective_rate: effective,
            mid_market_rate: request.mid_market_rate,
            fee_percent: request.pricing.fee_percent,
            total_payable: Money::new(total_payable, request.send_currency.clone()),
        })
    }
}
