//! Network rate source
//!
//! Fetches a spot rate over HTTP with a bounded timeout and a single
//! retry. Fetched rates are usually loaded into a `StaticRateProvider`
//! (optionally wrapped in `CachedRateProvider`) for synchronous lookups
//! from the report path.

use super::base::CurrencyPair;
use crate::error::{DashboardError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

const RATE_BASE_URL: &str = "https://api.frankfurter.app/latest";

/// HTTP-backed exchange rate source
pub struct HttpRateSource {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct RateResponse {
    rates: HashMap<String, f64>,
}

impl HttpRateSource {
    /// Create a new rate source with a 10 second request timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(10))
    }

    /// Create with an explicit request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            DashboardError::Data(format!("Failed to create HTTP client: {}", e))
        })?;
        Ok(Self { client })
    }

    /// Fetch the spot rate for a pair, retrying once on failure.
    pub async fn fetch_rate(&self, pair: CurrencyPair) -> Result<f64> {
        match self.request_rate(pair).await {
            Ok(rate) => Ok(rate),
            Err(first) => {
                log::warn!("Rate fetch for {} failed, retrying: {}", pair, first);
                self.request_rate(pair).await
            }
        }
    }

    async fn request_rate(&self, pair: CurrencyPair) -> Result<f64> {
        let url = format!(
            "{}?from={}&to={}",
            RATE_BASE_URL,
            pair.base.code(),
            pair.quote.code()
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::RateUnavailable(format!("{}: {}", pair, e)))?;

        if !response.status().is_success() {
            return Err(DashboardError::RateUnavailable(format!(
                "{}: rate service returned {}",
                pair,
                response.status()
            )));
        }

        let body: RateResponse = response
            .json()
            .await
            .map_err(|e| DashboardError::RateUnavailable(format!("{}: {}", pair, e)))?;

        let rate = body.rates.get(pair.quote.code()).copied().ok_or_else(|| {
            DashboardError::RateUnavailable(format!("{}: rate missing from response", pair))
        })?;

        if rate <= 0.0 || !rate.is_finite() {
            return Err(DashboardError::RateUnavailable(format!(
                "{}: non-positive rate {}",
                pair, rate
            )));
        }

        Ok(rate)
    }
}
