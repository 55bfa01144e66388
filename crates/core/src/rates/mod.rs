//! Exchange-rate sheets and the rates-API client.

pub mod client;
pub mod sheet;

pub use client::RateClient;
pub use sheet::RateSheet;
