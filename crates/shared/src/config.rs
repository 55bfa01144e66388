//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Exchange-rate API configuration.
    pub rates: RatesConfig,
    /// Pricing-config cache configuration.
    #[serde(default)]
    pub pricing_cache: PricingCacheConfig,
}

/// Exchange-rate API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Root URL of the exchange-rate API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// API key, inserted as a path segment per the provider's URL scheme.
    pub api_key: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "https://v6.exchangerate-api.com/v6".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Pricing-config cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingCacheConfig {
    /// Time-to-live for the cached active config, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
    /// Maximum number of cached entries.
    #[serde(default = "default_cache_capacity")]
    pub max_capacity: u64,
}

fn default_cache_ttl_secs() -> u64 {
    300 // 5 minutes
}

fn default_cache_capacity() -> u64 {
    16
}

impl Default for PricingCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl_secs(),
            max_capacity: default_cache_capacity(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("REMESA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> Result<AppConfig, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_defaults_applied() {
        let config = parse("[rates]\napi_key = \"k\"\n").unwrap();
        assert_eq!(config.rates.api_base_url, "https://v6.exchangerate-api.com/v6");
        assert_eq!(config.rates.api_key, "k");
        assert_eq!(config.rates.timeout_secs, 10);
        assert_eq!(config.pricing_cache.ttl_secs, 300);
        assert_eq!(config.pricing_cache.max_capacity, 16);
    }

    #[test]
    fn test_overrides() {
        let toml = r#"
            [rates]
            api_base_url = "http://localhost:9999/v6"
            api_key = "secret"
            timeout_secs = 3

            [pricing_cache]
            ttl_secs = 60
            max_capacity = 2
        "#;
        let config = parse(toml).unwrap();
        assert_eq!(config.rates.api_base_url, "http://localhost:9999/v6");
        assert_eq!(config.rates.api_key, "secret");
        assert_eq!(config.rates.timeout_secs, 3);
        assert_eq!(config.pricing_cache.ttl_secs, 60);
        assert_eq!(config.pricing_cache.max_capacity, 2);
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        assert!(parse("[rates]\ntimeout_secs = 5\n").is_err());
    }
}
