//! Read-through cache for the active pricing config using Moka.
//!
//! The settings store owns persistence and versioning of pricing configs;
//! callers read the active one through this cache and invalidate it after
//! an update. The conversion engine never reads this cache (or any other
//! shared state) itself; its inputs are always explicit parameters.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use remesa_shared::AppResult;
use remesa_shared::config::PricingCacheConfig;

use crate::pricing::PricingConfig;

/// Backing store for pricing configs.
///
/// The persistence layer (out of scope here) sits behind this seam.
pub trait PricingConfigSource: Send + Sync {
    /// Loads the currently active pricing config.
    fn load_active(&self) -> AppResult<PricingConfig>;
}

/// Read-through cache over a `PricingConfigSource`.
///
/// There is at most one active config system-wide, so the cache holds a
/// single entry under a unit key. Thread-safe and cheap to clone; errors
/// from the source are never cached.
pub struct PricingConfigCache<S> {
    source: Arc<S>,
    cache: Cache<(), PricingConfig>,
}

impl<S> Clone for PricingConfigCache<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            cache: self.cache.clone(),
        }
    }
}

impl<S: PricingConfigSource> PricingConfigCache<S> {
    /// Creates a cache with default TTL and capacity.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_config(source, &PricingCacheConfig::default())
    }

    /// Creates a cache with the given TTL and capacity.
    #[must_use]
    pub fn with_config(source: S, config: &PricingCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.ttl_secs))
            .build();

        Self {
            source: Arc::new(source),
            cache,
        }
    }

    /// Returns the active pricing config, loading it on a cache miss.
    ///
    /// # Errors
    ///
    /// Propagates the source's error on a miss; the miss is retried on
    /// the next call.
    pub fn active(&self) -> AppResult<PricingConfig> {
        if let Some(config) = self.cache.get(&()) {
            return Ok(config);
        }

        let config = self.source.load_active()?;
        self.cache.insert((), config.clone());
        Ok(config)
    }

    /// Drops the cached entry; callers do this after updating the config.
    pub fn invalidate(&self) {
        self.cache.invalidate(&());
    }
}
