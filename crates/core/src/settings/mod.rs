//! Active pricing configuration and its read-through cache.

pub mod cache;

pub use cache::{PricingConfigCache, PricingConfigSource};
