//! TTL cache over a rate provider
//!
//! The dashboard recomputes its report on every interaction; without a
//! cache the rate lookup would hit the network each time. Entries expire
//! after the configured TTL so stale rates refresh on the next lookup.

use super::base::{CurrencyPair, ExchangeRateProvider};
use crate::error::{DashboardError, Result};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Caching wrapper around any `ExchangeRateProvider`
pub struct CachedRateProvider<P> {
    inner: P,
    ttl: Duration,
    cache: RwLock<HashMap<CurrencyPair, (Instant, f64)>>,
}

impl<P: ExchangeRateProvider> CachedRateProvider<P> {
    /// Wrap a provider with the given time-to-live per pair
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Drop all cached entries
    pub fn invalidate(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }

    fn cached_rate(&self, pair: CurrencyPair) -> Option<f64> {
        let cache = self.cache.read().ok()?;
        let (fetched_at, rate) = cache.get(&pair)?;
        if fetched_at.elapsed() < self.ttl {
            Some(*rate)
        } else {
            None
        }
    }
}

impl<P: ExchangeRateProvider> ExchangeRateProvider for CachedRateProvider<P> {
    fn get_rate(&self, pair: CurrencyPair) -> Result<f64> {
        if let Some(rate) = self.cached_rate(pair) {
            log::debug!("Rate cache hit for {}", pair);
            return Ok(rate);
        }

        let rate = self.inner.get_rate(pair)?;
        self.cache
            .write()
            .map_err(|_| DashboardError::Data("Rate cache lock poisoned".to_string()))?
            .insert(pair, (Instant::now(), rate));
        Ok(rate)
    }
}
