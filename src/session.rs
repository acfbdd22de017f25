//! Dashboard session state
//!
//! Holds both datasets behind one explicit object with defined
//! invalidation (`reload`), instead of module-level globals re-read on
//! every interaction. Each interaction runs one full recomputation pass:
//! filter, then the five aggregations.

use crate::error::Result;
use crate::filter::{self, DateRange};
use crate::fx::{convert_with, Currency, CurrencyPair, ExchangeRateProvider};
use crate::geo::{compose_overlay, GeoOverlay};
use crate::loader;
use crate::summary::{
    customers_by_payment_type, customers_by_review_score, customers_by_state, daily_orders,
    sales_by_category, CategorySalesSummary, CustomerCounts, DailyOrdersSummary,
};
use crate::types::{GeoPoint, OrderTable, Price};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

/// Currency the order dataset's prices are denominated in
pub const SOURCE_CURRENCY: Currency = Currency::BRL;

/// Loaded datasets for one dashboard instance
///
/// Loading happens once; `report` recomputes derived tables from the held
/// data without touching disk.
#[derive(Debug)]
pub struct DashboardData {
    orders_path: PathBuf,
    geo_path: PathBuf,
    orders: OrderTable,
    geolocation: Vec<GeoPoint>,
}

impl DashboardData {
    /// Load both datasets from CSV files.
    pub fn load(orders_path: impl Into<PathBuf>, geo_path: impl Into<PathBuf>) -> Result<Self> {
        let orders_path = orders_path.into();
        let geo_path = geo_path.into();
        let orders = loader::load_orders(&orders_path)?;
        let geolocation = loader::load_geolocation(&geo_path)?;
        Ok(Self {
            orders_path,
            geo_path,
            orders,
            geolocation,
        })
    }

    /// Build from already-loaded tables (tests, embedded data).
    pub fn from_tables(orders: OrderTable, geolocation: Vec<GeoPoint>) -> Self {
        Self {
            orders_path: PathBuf::new(),
            geo_path: PathBuf::new(),
            orders,
            geolocation,
        }
    }

    /// Re-read both datasets from their original paths.
    pub fn reload(&mut self) -> Result<()> {
        self.orders = loader::load_orders(&self.orders_path)?;
        self.geolocation = loader::load_geolocation(&self.geo_path)?;
        log::info!("Dashboard datasets reloaded");
        Ok(())
    }

    pub fn orders(&self) -> &OrderTable {
        &self.orders
    }

    /// Min/max purchase dates, for bounding the range picker
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.orders.date_span()
    }

    /// One full recomputation pass for the given range.
    pub fn report(&self, range: DateRange) -> DashboardReport {
        let filtered = filter::filter(&self.orders, &range);
        log::debug!(
            "Report for {} - {}: {} line items in range",
            range.start(),
            range.end(),
            filtered.len()
        );

        DashboardReport {
            range,
            daily_orders: daily_orders(&filtered),
            category_sales: sales_by_category(&filtered),
            customers_by_payment: customers_by_payment_type(&filtered),
            customers_by_review: customers_by_review_score(&filtered),
            customers_by_state: customers_by_state(&filtered),
        }
    }

    /// Deduplicated geolocation overlay (range-independent).
    pub fn overlay(&self) -> GeoOverlay {
        compose_overlay(&self.geolocation)
    }
}

/// Immutable result of one recomputation pass
///
/// Everything the presentation layer renders, already aggregated; it never
/// re-derives from raw rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub range: DateRange,
    pub daily_orders: DailyOrdersSummary,
    pub category_sales: CategorySalesSummary,
    pub customers_by_payment: CustomerCounts<String>,
    pub customers_by_review: CustomerCounts<u8>,
    pub customers_by_state: CustomerCounts<String>,
}

impl DashboardReport {
    /// Headline metric: distinct orders in range
    pub fn total_orders(&self) -> u64 {
        self.daily_orders.total_orders()
    }

    /// Headline metric: revenue in range, in the source currency
    pub fn total_revenue(&self) -> Price {
        self.daily_orders.total_revenue()
    }

    /// Headline revenue converted to a display currency.
    ///
    /// Fails with `RateUnavailable` when the provider cannot supply a
    /// rate; the caller falls back to displaying `total_revenue` in the
    /// source currency.
    pub fn localized_revenue(
        &self,
        provider: &dyn ExchangeRateProvider,
        display: Currency,
    ) -> Result<Price> {
        let pair = CurrencyPair::new(SOURCE_CURRENCY, display);
        convert_with(provider, self.total_revenue(), pair)
    }
}
