//! Core record and table types

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Price type (source-currency amounts)
pub type Price = f64;

/// One order line item
///
/// An order may span several line items; each row carries the full order
/// context so every aggregation works off a single flat table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub purchase_timestamp: NaiveDateTime,
    pub estimated_delivery: NaiveDateTime,
    pub price: Price,
    /// Sequence number of this line item within its order (1-based)
    pub order_item_id: u32,
    /// Localized (English) product category name
    pub category: String,
    pub payment_type: String,
    /// Review score, 1-5
    pub review_score: u8,
    pub customer_id: String,
    /// 2-letter federative unit code
    pub customer_state: String,
}

/// One customer location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub customer_unique_id: String,
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(customer_unique_id: impl Into<String>, lng: f64, lat: f64) -> Self {
        Self {
            customer_unique_id: customer_unique_id.into(),
            lng,
            lat,
        }
    }
}

/// Immutable order table, sorted ascending by purchase timestamp
///
/// Rows keep a stable 0-based sequence after the loader's sort; filtering
/// produces a new table and never mutates the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderTable {
    rows: Vec<OrderRecord>,
}

impl OrderTable {
    /// Build a table from rows, sorting ascending by purchase timestamp.
    ///
    /// The sort is stable: rows with equal timestamps keep their input order.
    pub fn new(mut rows: Vec<OrderRecord>) -> Self {
        rows.sort_by_key(|r| r.purchase_timestamp);
        Self { rows }
    }

    /// Build a table from rows already in ascending timestamp order.
    pub(crate) fn from_sorted(rows: Vec<OrderRecord>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0].purchase_timestamp <= w[1].purchase_timestamp));
        Self { rows }
    }

    pub fn rows(&self) -> &[OrderRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First and last purchase dates, or `None` for an empty table.
    ///
    /// Used by the presentation layer to bound its date picker.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.rows.first()?.purchase_timestamp.date();
        let last = self.rows.last()?.purchase_timestamp.date();
        Some((first, last))
    }
}
