//! Rate-sheet model for exchange-rate API responses.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use remesa_shared::types::CurrencyCode;
use remesa_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::RateQuote;

/// One base currency's rate table, as served by the exchange-rate API.
///
/// Rates are units of target per 1 unit of the base currency. Entries that
/// are zero or negative are treated as not quoted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSheet {
    /// API call outcome, `"success"` when the sheet is usable.
    pub result: String,
    /// Base currency of every rate in the table.
    pub base_code: CurrencyCode,
    /// Unix timestamp of the last rate refresh.
    #[serde(default)]
    pub time_last_update_unix: i64,
    /// Unix timestamp of the next scheduled refresh.
    #[serde(default)]
    pub time_next_update_unix: i64,
    /// Rate per target currency code.
    pub conversion_rates: HashMap<CurrencyCode, Decimal>,
}

impl RateSheet {
    /// Returns true if the API reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }

    /// Looks up the rate for a target currency.
    ///
    /// Returns `None` for currencies the sheet does not quote, including
    /// entries present with a zero or negative rate.
    #[must_use]
    pub fn rate(&self, target: &CurrencyCode) -> Option<Decimal> {
        self.conversion_rates
            .get(target)
            .copied()
            .filter(|rate| *rate > Decimal::ZERO)
    }

    /// Returns true if the sheet quotes the given currency.
    #[must_use]
    pub fn has_currency(&self, target: &CurrencyCode) -> bool {
        self.rate(target).is_some()
    }

    /// Returns all quoted currency codes, sorted.
    #[must_use]
    pub fn available_currencies(&self) -> Vec<CurrencyCode> {
        let mut codes: Vec<CurrencyCode> = self
            .conversion_rates
            .iter()
            .filter(|(_, rate)| **rate > Decimal::ZERO)
            .map(|(code, _)| code.clone())
            .collect();
        codes.sort();
        codes
    }

    /// When the sheet's rates were last refreshed.
    #[must_use]
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time_last_update_unix, 0)
    }

    /// Converts an amount of the base currency into a target currency.
    ///
    /// Returns the raw (unrounded) amount, or `None` if the target is not
    /// quoted.
    #[must_use]
    pub fn convert(&self, amount: Decimal, target: &CurrencyCode) -> Option<Decimal> {
        self.rate(target).map(|rate| amount * rate)
    }

    /// Converts between two arbitrary quoted currencies.
    ///
    /// Direct when the source is the base, inverse when the target is the
    /// base, otherwise cross-rated through the base. Returns `None` if
    /// either currency is not quoted.
    #[must_use]
    pub fn convert_between(
        &self,
        amount: Decimal,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Option<Decimal> {
        if *from == self.base_code {
            return self.convert(amount, to);
        }
        if *to == self.base_code {
            return self.rate(from).map(|source_rate| amount / source_rate);
        }

        let source_rate = self.rate(from)?;
        let target_rate = self.rate(to)?;
        Some(amount / source_rate * target_rate)
    }

    /// Extracts the engine input for one target currency.
    ///
    /// # Errors
    ///
    /// `NotFound` if the target is not quoted, `Validation` if the sheet's
    /// update timestamp is out of range.
    pub fn quote(&self, target: &CurrencyCode) -> AppResult<RateQuote> {
        let rate = self
            .rate(target)
            .ok_or_else(|| AppError::NotFound(format!("currency not quoted: {target}")))?;
        let observed_at = self.observed_at().ok_or_else(|| {
            AppError::Validation(format!(
                "invalid update timestamp: {}",
                self.time_last_update_unix
            ))
        })?;
        Ok(RateQuote::new(
            self.base_code.clone(),
            target.clone(),
            rate,
            observed_at,
        )?)
    }
}
