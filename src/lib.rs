//! # Vitrine
//!
//! Analytics core for a single-page e-commerce reporting dashboard.
//!
//! Vitrine loads two pre-cleaned CSV datasets (order line items and
//! customer geolocation), filters orders to an inclusive date range, and
//! produces the aggregate views the dashboard renders: daily order and
//! revenue trend, category sales ranking, distinct-customer counts by
//! payment type, review score and state, and a deduplicated geolocation
//! overlay. The headline revenue can be converted to a display currency
//! through an injected exchange-rate provider.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vitrine::prelude::*;
//!
//! fn main() -> vitrine::error::Result<()> {
//!     let data = DashboardData::load("main_data.csv", "geolocation.csv")?;
//!
//!     let (min, max) = data.date_span().expect("dataset is not empty");
//!     let report = data.report(DateRange::new(min, max)?);
//!
//!     println!("{} orders, R$ {:.2}", report.total_orders(), report.total_revenue());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod filter;
pub mod fx;
pub mod geo;
pub mod loader;
pub mod session;
pub mod states;
pub mod summary;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::error::{DashboardError, Result};
    pub use crate::filter::DateRange;
    pub use crate::fx::{Currency, CurrencyPair, ExchangeRateProvider, StaticRateProvider};
    pub use crate::geo::{compose_overlay, GeoOverlay};
    pub use crate::session::{DashboardData, DashboardReport};
    pub use crate::summary::{
        CategorySalesSummary, CustomerCounts, DailyOrdersSummary,
    };
    pub use crate::types::{GeoPoint, OrderRecord, OrderTable};
}
