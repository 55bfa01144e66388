//! Pricing error types.

use remesa_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Pricing-related errors.
///
/// All variants are fail-fast input errors: the calling layer is expected
/// to validate before invoking the engine, and no retry semantics apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Exchange rate must be positive.
    #[error("Invalid exchange rate: {0} (must be positive)")]
    InvalidRate(Decimal),

    /// Amounts must not be negative.
    #[error("Invalid amount: {0} (must not be negative)")]
    InvalidAmount(Decimal),

    /// Percentages must not be negative.
    #[error("Invalid percentage: {0} (must not be negative)")]
    InvalidPercent(Decimal),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display() {
        assert_eq!(
            PricingError::InvalidRate(dec!(0)).to_string(),
            "Invalid exchange rate: 0 (must be positive)"
        );
        assert_eq!(
            PricingError::InvalidAmount(dec!(-5)).to_string(),
            "Invalid amount: -5 (must not be negative)"
        );
        assert_eq!(
            PricingError::InvalidPercent(dec!(-1)).to_string(),
            "Invalid percentage: -1 (must not be negative)"
        );
    }

    #[test]
    fn test_converts_to_validation_error() {
        let err: AppError = PricingError::InvalidRate(dec!(0)).into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
