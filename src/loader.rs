//! CSV dataset loading
//!
//! Reads the two pre-cleaned dashboard datasets: the order line-item export
//! and the customer geolocation export. Timestamp parsing is strict — a
//! malformed value aborts the load rather than coercing silently.

use crate::error::{DashboardError, Result};
use crate::types::{GeoPoint, OrderRecord, OrderTable};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw order row as it appears in the CSV export
///
/// Extra columns in the file are ignored; timestamps stay as strings here
/// and are parsed explicitly so a bad value surfaces as a `Parse` error.
#[derive(Debug, Deserialize)]
struct RawOrderRow {
    order_id: String,
    order_purchase_timestamp: String,
    order_estimated_delivery_date: String,
    price: f64,
    order_item_id: u32,
    product_category_name_english: String,
    payment_type: String,
    review_score: u8,
    customer_id: String,
    customer_state: String,
}

#[derive(Debug, Deserialize)]
struct RawGeoRow {
    geolocation_lng: f64,
    geolocation_lat: f64,
    customer_unique_id: String,
}

/// Parse a timestamp column value.
///
/// Accepts `%Y-%m-%d %H:%M:%S`, with a date-only fallback for columns the
/// export truncates to midnight.
fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| DashboardError::Parse(format!("Unparseable timestamp: {:?}", value)))
}

/// Read the order dataset from any reader.
///
/// Rows come back sorted ascending by purchase timestamp (stable sort, so
/// equal timestamps keep file order).
pub fn read_orders<R: Read>(reader: R) -> Result<OrderTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for (line, result) in csv_reader.deserialize().enumerate() {
        let raw: RawOrderRow = result.map_err(|e| {
            DashboardError::Parse(format!("Order row {}: {}", line + 1, e))
        })?;

        rows.push(OrderRecord {
            purchase_timestamp: parse_timestamp(&raw.order_purchase_timestamp)?,
            estimated_delivery: parse_timestamp(&raw.order_estimated_delivery_date)?,
            order_id: raw.order_id,
            price: raw.price,
            order_item_id: raw.order_item_id,
            category: raw.product_category_name_english,
            payment_type: raw.payment_type,
            review_score: raw.review_score,
            customer_id: raw.customer_id,
            customer_state: raw.customer_state,
        });
    }

    Ok(OrderTable::new(rows))
}

/// Read the geolocation dataset from any reader.
///
/// File row order is preserved: the overlay composer deduplicates with
/// first-occurrence-wins semantics, which depends on it.
pub fn read_geolocation<R: Read>(reader: R) -> Result<Vec<GeoPoint>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut points = Vec::new();

    for (line, result) in csv_reader.deserialize().enumerate() {
        let raw: RawGeoRow = result.map_err(|e| {
            DashboardError::Parse(format!("Geolocation row {}: {}", line + 1, e))
        })?;

        points.push(GeoPoint {
            customer_unique_id: raw.customer_unique_id,
            lng: raw.geolocation_lng,
            lat: raw.geolocation_lat,
        });
    }

    Ok(points)
}

/// Load the order dataset from a CSV file path
pub fn load_orders<P: AsRef<Path>>(path: P) -> Result<OrderTable> {
    let file = File::open(path.as_ref())?;
    let table = read_orders(file)?;
    log::info!(
        "Loaded {} order line items from {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(table)
}

/// Load the geolocation dataset from a CSV file path
pub fn load_geolocation<P: AsRef<Path>>(path: P) -> Result<Vec<GeoPoint>> {
    let file = File::open(path.as_ref())?;
    let points = read_geolocation(file)?;
    log::info!(
        "Loaded {} geolocation rows from {}",
        points.len(),
        path.as_ref().display()
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERS_CSV: &str = "\
order_id,order_purchase_timestamp,order_estimated_delivery_date,price,order_item_id,product_category_name_english,payment_type,review_score,customer_id,customer_state
B,2021-01-02 08:30:00,2021-01-10 00:00:00,20.0,1,books,boleto,4,c2,RJ
A,2021-01-01 10:15:00,2021-01-09,10.0,1,toys,credit_card,5,c1,SP
A,2021-01-01 10:15:00,2021-01-09,15.0,2,toys,credit_card,5,c1,SP
";

    const GEO_CSV: &str = "\
geolocation_lng,geolocation_lat,customer_unique_id
-46.63,-23.55,X
-43.17,-22.90,Y
";

    #[test]
    fn test_read_orders_sorted() {
        let table = read_orders(ORDERS_CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0].order_id, "A");
        assert_eq!(table.rows()[2].order_id, "B");
    }

    #[test]
    fn test_date_only_fallback() {
        let table = read_orders(ORDERS_CSV.as_bytes()).unwrap();
        let delivery = table.rows()[0].estimated_delivery;
        assert_eq!(delivery.to_string(), "2021-01-09 00:00:00");
    }

    #[test]
    fn test_malformed_timestamp_is_parse_error() {
        let csv = "\
order_id,order_purchase_timestamp,order_estimated_delivery_date,price,order_item_id,product_category_name_english,payment_type,review_score,customer_id,customer_state
A,not-a-date,2021-01-09,10.0,1,toys,credit_card,5,c1,SP
";
        let err = read_orders(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::Parse(_)));
    }

    #[test]
    fn test_malformed_price_is_parse_error() {
        let csv = "\
order_id,order_purchase_timestamp,order_estimated_delivery_date,price,order_item_id,product_category_name_english,payment_type,review_score,customer_id,customer_state
A,2021-01-01 10:15:00,2021-01-09,abc,1,toys,credit_card,5,c1,SP
";
        let err = read_orders(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::Parse(_)));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "\
order_id,order_purchase_timestamp,order_estimated_delivery_date,price,order_item_id,product_category_name_english,payment_type,review_score,customer_id,customer_state,freight_value
A,2021-01-01 10:15:00,2021-01-09,10.0,1,toys,credit_card,5,c1,SP,3.5
";
        let table = read_orders(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_read_geolocation_preserves_order() {
        let points = read_geolocation(GEO_CSV.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].customer_unique_id, "X");
        assert_eq!(points[0].lng, -46.63);
        assert_eq!(points[1].customer_unique_id, "Y");
    }
}
