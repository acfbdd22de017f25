//! Core FX types - Currency, CurrencyPair and the ExchangeRateProvider trait

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217 currency code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    USD, // US Dollar
    EUR, // Euro
    GBP, // British Pound
    JPY, // Japanese Yen
    BRL, // Brazilian Real (source currency of the order dataset)
    IDR, // Indonesian Rupiah
    MXN, // Mexican Peso
    ARS, // Argentine Peso
    CLP, // Chilean Peso
    INR, // Indian Rupee
}

impl Currency {
    /// Parse currency from ISO code
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "BRL" => Ok(Currency::BRL),
            "IDR" => Ok(Currency::IDR),
            "MXN" => Ok(Currency::MXN),
            "ARS" => Ok(Currency::ARS),
            "CLP" => Ok(Currency::CLP),
            "INR" => Ok(Currency::INR),
            _ => Err(DashboardError::Data(format!("Unknown currency: {}", code))),
        }
    }

    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::BRL => "BRL",
            Currency::IDR => "IDR",
            Currency::MXN => "MXN",
            Currency::ARS => "ARS",
            Currency::CLP => "CLP",
            Currency::INR => "INR",
        }
    }

    /// Get currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::BRL => "R$",
            Currency::IDR => "Rp",
            Currency::MXN => "MX$",
            Currency::ARS => "AR$",
            Currency::CLP => "CL$",
            Currency::INR => "₹",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Currency pair for exchange rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: Currency,
    pub quote: Currency,
}

impl CurrencyPair {
    /// Create new currency pair
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }

    /// Get the inverse pair
    pub fn inverse(&self) -> Self {
        Self {
            base: self.quote,
            quote: self.base,
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// Trait for looking up exchange rates
///
/// Implementations back this with a network service, a cache, or a fixed
/// table. A failed lookup is `RateUnavailable` — never an unconverted or
/// zeroed value presented as converted.
pub trait ExchangeRateProvider: Send + Sync {
    /// Get the rate such that: quote_amount = base_amount * rate
    fn get_rate(&self, pair: CurrencyPair) -> Result<f64>;

    /// Check if a rate is available
    fn has_rate(&self, pair: CurrencyPair) -> bool {
        self.get_rate(pair).is_ok()
    }
}

/// Apply a rate to an amount.
pub fn convert(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// Convert an amount using a provider lookup.
pub fn convert_with(
    provider: &dyn ExchangeRateProvider,
    amount: f64,
    pair: CurrencyPair,
) -> Result<f64> {
    let rate = provider.get_rate(pair)?;
    Ok(convert(amount, rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("BRL").unwrap(), Currency::BRL);
        assert_eq!(Currency::from_code("idr").unwrap(), Currency::IDR);
        assert!(Currency::from_code("XXX").is_err());
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::BRL.to_string(), "BRL");
        assert_eq!(Currency::BRL.symbol(), "R$");
        assert_eq!(Currency::IDR.symbol(), "Rp");
    }

    #[test]
    fn test_pair_display_and_inverse() {
        let pair = CurrencyPair::new(Currency::BRL, Currency::IDR);
        assert_eq!(pair.to_string(), "BRL/IDR");

        let inverse = pair.inverse();
        assert_eq!(inverse.base, Currency::IDR);
        assert_eq!(inverse.quote, Currency::BRL);
    }

    #[test]
    fn test_convert() {
        assert_eq!(convert(100.0, 3050.0), 305_000.0);
        assert_eq!(convert(0.0, 3050.0), 0.0);
    }
}
