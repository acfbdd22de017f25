//! Static in-memory rate provider
//!
//! Fixed rate table for tests, offline use, and as the sink for rates
//! fetched out-of-band by a network source.

use super::base::{CurrencyPair, ExchangeRateProvider};
use crate::error::{DashboardError, Result};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory rate table
///
/// With `auto_inverse` enabled (the default), a lookup for a missing pair
/// falls back to the reciprocal of the opposite pair.
#[derive(Debug, Default)]
pub struct StaticRateProvider {
    rates: RwLock<HashMap<CurrencyPair, f64>>,
    auto_inverse: bool,
}

impl StaticRateProvider {
    /// Create an empty provider with inverse fallback enabled
    pub fn new() -> Self {
        Self {
            rates: RwLock::new(HashMap::new()),
            auto_inverse: true,
        }
    }

    /// Create without inverse fallback
    pub fn without_inverse() -> Self {
        Self {
            rates: RwLock::new(HashMap::new()),
            auto_inverse: false,
        }
    }

    /// Set the rate for a pair. Rates must be positive.
    pub fn set_rate(&mut self, pair: CurrencyPair, rate: f64) -> Result<()> {
        if rate <= 0.0 || !rate.is_finite() {
            return Err(DashboardError::Data(format!(
                "Exchange rate must be positive, got {} for {}",
                rate, pair
            )));
        }
        self.rates
            .write()
            .map_err(|_| DashboardError::Data("Rate table lock poisoned".to_string()))?
            .insert(pair, rate);
        Ok(())
    }

    /// Set several rates at once
    pub fn set_rates(&mut self, entries: Vec<(CurrencyPair, f64)>) -> Result<()> {
        for (pair, rate) in entries {
            self.set_rate(pair, rate)?;
        }
        Ok(())
    }
}

impl ExchangeRateProvider for StaticRateProvider {
    fn get_rate(&self, pair: CurrencyPair) -> Result<f64> {
        let rates = self
            .rates
            .read()
            .map_err(|_| DashboardError::Data("Rate table lock poisoned".to_string()))?;

        if let Some(&rate) = rates.get(&pair) {
            return Ok(rate);
        }

        if self.auto_inverse {
            if let Some(&rate) = rates.get(&pair.inverse()) {
                return Ok(1.0 / rate);
            }
        }

        Err(DashboardError::RateUnavailable(format!(
            "No rate for {}",
            pair
        )))
    }
}
