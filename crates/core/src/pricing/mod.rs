//! Currency conversion pricing.
//!
//! The conversion engine is a pure function library: given a mid-market
//! rate and the active pricing configuration, it computes what a sender
//! pays and a receiver gets, in either direction, plus the fee-inclusive
//! total. All inputs are explicit parameters; nothing here performs I/O.

pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use engine::ConversionEngine;
pub use error::PricingError;
pub use types::{AmountSide, ConversionQuote, ConversionRequest, PricingConfig, RateQuote};
