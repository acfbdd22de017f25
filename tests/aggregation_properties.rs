//! Property tests for the aggregation invariants

use approx::relative_eq;
use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::HashSet;
use vitrine::filter::{self, DateRange};
use vitrine::geo::dedupe_points;
use vitrine::summary::{
    customers_by_payment_type, customers_by_review_score, customers_by_state, daily_orders,
    sales_by_category,
};
use vitrine::types::{GeoPoint, OrderRecord, OrderTable};

const PAYMENT_TYPES: [&str; 4] = ["credit_card", "boleto", "voucher", "debit_card"];
const CATEGORIES: [&str; 5] = ["toys", "books", "garden", "auto", "sports"];
const STATES: [&str; 4] = ["SP", "RJ", "MG", "RS"];

/// Strategy for one line item drawn from small id pools so collisions
/// (multi-item orders, repeat customers) actually happen
fn line_item() -> impl Strategy<Value = OrderRecord> {
    (
        0u8..12,   // order id pool
        0u32..30,  // day offset
        0u32..86_400, // second of day
        1u32..500, // price cents
        1u32..4,   // item sequence
        0usize..CATEGORIES.len(),
        0u8..8,    // customer id pool
        1u8..6,    // review score
    )
        .prop_map(
            |(order, day, second, cents, item, cat, customer, score)| {
                let base = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
                let purchase = base
                    .checked_add_days(chrono::Days::new(day as u64))
                    .unwrap()
                    .and_hms_opt(second / 3600, (second / 60) % 60, second % 60)
                    .unwrap();
                // Payment type and state follow the customer, keeping those
                // dimensions exclusive per customer
                let customer_id = format!("c{}", customer);
                OrderRecord {
                    order_id: format!("o{}", order),
                    purchase_timestamp: purchase,
                    estimated_delivery: purchase + chrono::Duration::days(7),
                    price: cents as f64 / 100.0,
                    order_item_id: item,
                    category: CATEGORIES[cat].to_string(),
                    payment_type: PAYMENT_TYPES[customer as usize % PAYMENT_TYPES.len()]
                        .to_string(),
                    review_score: score,
                    customer_id,
                    customer_state: STATES[customer as usize % STATES.len()].to_string(),
                }
            },
        )
}

fn order_table() -> impl Strategy<Value = OrderTable> {
    prop::collection::vec(line_item(), 0..60).prop_map(OrderTable::new)
}

proptest! {
    /// Daily order counts sum to the distinct order ids of the input
    #[test]
    fn daily_order_count_sums_to_distinct_orders(table in order_table()) {
        let distinct: HashSet<&str> =
            table.rows().iter().map(|r| r.order_id.as_str()).collect();
        // Holds when no order id spans two calendar days; the pool can
        // reuse an id across days, so compare against per-day distincts
        let summary = daily_orders(&table);
        let mut per_day_distinct = 0u64;
        let days: HashSet<NaiveDate> =
            table.rows().iter().map(|r| r.purchase_timestamp.date()).collect();
        for day in &days {
            let ids: HashSet<&str> = table
                .rows()
                .iter()
                .filter(|r| r.purchase_timestamp.date() == *day)
                .map(|r| r.order_id.as_str())
                .collect();
            per_day_distinct += ids.len() as u64;
        }
        prop_assert_eq!(summary.total_orders(), per_day_distinct);
        prop_assert!(summary.total_orders() >= distinct.len() as u64);
    }

    /// Revenue is preserved: daily revenue sums to the raw price sum
    #[test]
    fn revenue_is_preserved(table in order_table()) {
        let raw: f64 = table.rows().iter().map(|r| r.price).sum();
        let summary = daily_orders(&table);
        prop_assert!(relative_eq!(summary.total_revenue(), raw, epsilon = 1e-9));
    }

    /// Daily rows come out ascending by day
    #[test]
    fn daily_rows_ascending(table in order_table()) {
        let summary = daily_orders(&table);
        prop_assert!(summary.rows.windows(2).all(|w| w[0].date < w[1].date));
    }

    /// Category volumes sum to the row count (every row is one line item)
    #[test]
    fn category_volumes_sum_to_row_count(table in order_table()) {
        let summary = sales_by_category(&table);
        let total: u64 = summary.rows.iter().map(|r| r.items_sold).sum();
        prop_assert_eq!(total, table.len() as u64);
        prop_assert!(summary.rows.windows(2).all(|w| w[0].items_sold >= w[1].items_sold));
    }

    /// With payment type and state exclusive per customer, the group
    /// counts sum exactly to the distinct customer total; review scores
    /// vary per order, so that dimension only respects the lower bound
    #[test]
    fn dimension_counts_sum_bounds(table in order_table()) {
        let distinct: HashSet<&str> =
            table.rows().iter().map(|r| r.customer_id.as_str()).collect();
        let distinct = distinct.len() as u64;

        prop_assert_eq!(customers_by_payment_type(&table).total(), distinct);
        prop_assert_eq!(customers_by_state(&table).total(), distinct);

        let by_review = customers_by_review_score(&table);
        prop_assert!(by_review.total() >= distinct);
        prop_assert!(by_review.rows.iter().all(|r| r.customer_count <= distinct));
    }

    /// Aggregations are idempotent over an unmutated table
    #[test]
    fn aggregations_idempotent(table in order_table()) {
        prop_assert_eq!(daily_orders(&table), daily_orders(&table));
        prop_assert_eq!(sales_by_category(&table), sales_by_category(&table));
        prop_assert_eq!(
            customers_by_review_score(&table),
            customers_by_review_score(&table)
        );
    }

    /// Every filtered row is in range, and widening to the full span is
    /// the identity
    #[test]
    fn filter_respects_bounds(table in order_table()) {
        if let Some((min, max)) = table.date_span() {
            let full = DateRange::new(min, max).unwrap();
            prop_assert_eq!(&filter::filter(&table, &full), &table);

            let partial = DateRange::new(min, min).unwrap();
            let filtered = filter::filter(&table, &partial);
            prop_assert!(filtered
                .rows()
                .iter()
                .all(|r| r.purchase_timestamp.date() == min));
        }
    }

    /// Dedup keeps the first occurrence and is idempotent
    #[test]
    fn dedupe_first_wins_and_idempotent(
        ids in prop::collection::vec(0u8..10, 0..40)
    ) {
        let points: Vec<GeoPoint> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| GeoPoint::new(format!("g{}", id), i as f64, -(i as f64)))
            .collect();

        let once = dedupe_points(&points);

        let unique: HashSet<&str> =
            points.iter().map(|p| p.customer_unique_id.as_str()).collect();
        prop_assert_eq!(once.len(), unique.len());

        for point in &once {
            let first = points
                .iter()
                .find(|p| p.customer_unique_id == point.customer_unique_id)
                .unwrap();
            prop_assert_eq!(point, first);
        }

        prop_assert_eq!(&dedupe_points(&once), &once);
    }
}
