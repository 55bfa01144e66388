//! HTTP client for the exchange-rate API.

use std::time::Duration;

use remesa_shared::config::RatesConfig;
use remesa_shared::types::CurrencyCode;
use remesa_shared::{AppError, AppResult};
use tracing::debug;

use super::sheet::RateSheet;

/// Client for the exchange-rate API.
///
/// Wraps a shared `reqwest::Client`; cheap to clone and safe to use from
/// concurrent tasks. The API key is a URL path segment per the provider's
/// scheme, so request URLs are never logged.
#[derive(Debug, Clone)]
pub struct RateClient {
    http: reqwest::Client,
    api_base_url: String,
    api_key: String,
}

impl RateClient {
    /// Creates a client from the rates configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &RatesConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| AppError::Internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            api_base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
        })
    }

    fn latest_url(&self, base: &CurrencyCode) -> String {
        format!("{}/{}/latest/{}", self.api_base_url, self.api_key, base)
    }

    /// Fetches the latest rate sheet for a base currency.
    ///
    /// # Errors
    ///
    /// `ExternalService` on transport failures, non-2xx statuses, or an
    /// unsuccessful API result; `Validation` if the payload does not
    /// decode as a rate sheet.
    pub async fn latest(&self, base: &CurrencyCode) -> AppResult<RateSheet> {
        debug!(%base, "fetching exchange rates");

        let response = self
            .http
            .get(self.latest_url(base))
            .send()
            .await
            .map_err(|err| {
                AppError::ExternalService(format!("exchange rate request failed: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalService(format!(
                "exchange rate API returned {status}"
            )));
        }

        let sheet: RateSheet = response.json().await.map_err(|err| {
            AppError::Validation(format!("malformed exchange rate response: {err}"))
        })?;

        if !sheet.is_success() {
            return Err(AppError::ExternalService(format!(
                "exchange rate API result: {}",
                sheet.result
            )));
        }

        debug!(
            base = %sheet.base_code,
            currencies = sheet.conversion_rates.len(),
            "fetched rate sheet"
        );
        Ok(sheet)
    }
}
