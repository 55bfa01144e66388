//! Pricing domain types.
//!
//! This module defines the inputs and outputs of the conversion engine:
//! rate quotes looked up from a rate sheet, the active fee/markup
//! configuration, and the conversion request/quote pair.

use chrono::{DateTime, Utc};
use remesa_shared::types::{CurrencyCode, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// Which side of a conversion carries the authoritative user input.
///
/// A converter form has two amount fields kept in sync; the side the user
/// last edited drives the calculation and the other side is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountSide {
    /// The sender's amount was entered; the receive amount is derived.
    Send,
    /// The receiver's amount was entered; the send amount is derived.
    Receive,
}

/// A mid-market exchange rate observation for one currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Base currency code (1 unit of base = `mid_market_rate` units of target).
    pub base: CurrencyCode,
    /// Target currency code.
    pub target: CurrencyCode,
    /// Mid-market rate. Always positive.
    pub mid_market_rate: Decimal,
    /// When this rate was observed.
    pub observed_at: DateTime<Utc>,
}

impl RateQuote {
    /// Creates a new rate quote.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidRate` if the rate is not positive.
    pub fn new(
        base: CurrencyCode,
        target: CurrencyCode,
        mid_market_rate: Decimal,
        observed_at: DateTime<Utc>,
    ) -> Result<Self, PricingError> {
        if mid_market_rate <= Decimal::ZERO {
            return Err(PricingError::InvalidRate(mid_market_rate));
        }
        Ok(Self {
            base,
            target,
            mid_market_rate,
            observed_at,
        })
    }

    /// Returns the inverse quote for the flipped currency pair.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            base: self.target.clone(),
            target: self.base.clone(),
            mid_market_rate: Decimal::ONE / self.mid_market_rate,
            observed_at: self.observed_at,
        }
    }
}

/// The active fee and markup configuration.
///
/// At most one config is active system-wide at a time; persistence and
/// versioning belong to the settings store behind `PricingConfigSource`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Fee charged on the send amount, as a percentage.
    pub fee_percent: Decimal,
    /// Markup applied on top of the mid-market rate, as a percentage.
    /// `None` means no markup.
    pub special_rate_percent: Option<Decimal>,
}

impl PricingConfig {
    /// Creates a new pricing config.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidPercent` if either percentage is
    /// negative.
    pub fn new(
        fee_percent: Decimal,
        special_rate_percent: Option<Decimal>,
    ) -> Result<Self, PricingError> {
        if fee_percent.is_sign_negative() {
            return Err(PricingError::InvalidPercent(fee_percent));
        }
        if let Some(markup) = special_rate_percent {
            if markup.is_sign_negative() {
                return Err(PricingError::InvalidPercent(markup));
            }
        }
        Ok(Self {
            fee_percent,
            special_rate_percent,
        })
    }
}

impl Default for PricingConfig {
    /// No fee, no markup.
    fn default() -> Self {
        Self {
            fee_percent: Decimal::ZERO,
            special_rate_percent: None,
        }
    }
}

/// Input to `ConversionEngine::quote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// The amount on the edited side.
    pub amount: Decimal,
    /// Which side `amount` belongs to.
    pub edited_side: AmountSide,
    /// Currency the sender pays in.
    pub send_currency: CurrencyCode,
    /// Currency the receiver gets.
    pub receive_currency: CurrencyCode,
    /// Mid-market rate for send -> receive.
    pub mid_market_rate: Decimal,
    /// Active fee/markup configuration.
    pub pricing: PricingConfig,
}

impl ConversionRequest {
    /// Builds a request from a looked-up rate quote.
    ///
    /// The quote's base becomes the send currency and its target the
    /// receive currency.
    #[must_use]
    pub fn from_rate(
        amount: Decimal,
        edited_side: AmountSide,
        rate: &RateQuote,
        pricing: PricingConfig,
    ) -> Self {
        Self {
            amount,
            edited_side,
            send_currency: rate.base.clone(),
            receive_currency: rate.target.clone(),
            mid_market_rate: rate.mid_market_rate,
            pricing,
        }
    }
}

/// Output of `ConversionEngine::quote`.
///
/// Computed fresh on every input change; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionQuote {
    /// What the sender pays, before fees.
    pub send: Money,
    /// What the receiver gets.
    pub receive: Money,
    /// Rate actually applied, markup included.
    pub effective_rate: Decimal,
    /// Mid-market rate the quote was built from.
    pub mid_market_rate: Decimal,
    /// Fee percentage applied to the send amount.
    pub fee_percent: Decimal,
    /// What the sender pays in total, fees included.
    pub total_payable: Money,
}
