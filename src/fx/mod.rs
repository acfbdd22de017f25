//! Currency conversion
//!
//! Converts the dashboard's headline revenue from the source currency to a
//! display currency. The rate comes from an injected provider so the
//! network lookup can be mocked, cached, or replaced.
//!
//! # Components
//!
//! - **base**: Core types and trait (Currency, CurrencyPair, ExchangeRateProvider)
//! - **in_memory**: Static rate storage for tests and offline use
//! - **cached**: TTL cache wrapper so interactions do not re-hit the network
//! - **http**: Network rate source (behind the `async` feature)
//!
//! # Example
//!
//! ```rust
//! use vitrine::fx::{convert_with, Currency, CurrencyPair, StaticRateProvider};
//!
//! let mut provider = StaticRateProvider::new();
//! provider.set_rate(CurrencyPair::new(Currency::BRL, Currency::IDR), 3050.0).unwrap();
//!
//! let pair = CurrencyPair::new(Currency::BRL, Currency::IDR);
//! let total = convert_with(&provider, 100.0, pair).unwrap();
//! assert_eq!(total, 305_000.0);
//! ```

pub mod base;
pub mod cached;
#[cfg(feature = "async")]
pub mod http;
pub mod in_memory;

pub use base::{convert, convert_with, Currency, CurrencyPair, ExchangeRateProvider};
pub use cached::CachedRateProvider;
#[cfg(feature = "async")]
pub use http::HttpRateSource;
pub use in_memory::StaticRateProvider;
