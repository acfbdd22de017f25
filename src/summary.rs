//! Aggregation engine
//!
//! Five pure transforms over a (filtered) order table, each producing a
//! small immutable summary the presentation layer can chart directly.
//! Empty input yields empty summaries, never an error. Sorts are stable,
//! so ties keep group-discovery order and output is deterministic.

use crate::types::{OrderTable, Price};
use chrono::NaiveDate;
use hashbrown::{HashMap, HashSet};
use serde::Serialize;
use std::collections::BTreeMap;
use std::hash::Hash;

/// One calendar day of order activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyOrdersRow {
    pub date: NaiveDate,
    /// Distinct order identifiers that day (a multi-item order counts once)
    pub order_count: u64,
    /// Sum of line-item prices that day (every line item contributes)
    pub revenue: Price,
}

/// Daily order/revenue trend, ascending by day
///
/// Only days present in the filtered data appear; absent days are not
/// zero-filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyOrdersSummary {
    pub rows: Vec<DailyOrdersRow>,
}

impl DailyOrdersSummary {
    /// Headline metric: distinct orders across the whole range
    pub fn total_orders(&self) -> u64 {
        self.rows.iter().map(|r| r.order_count).sum()
    }

    /// Headline metric: revenue across the whole range (source currency)
    pub fn total_revenue(&self) -> Price {
        self.rows.iter().map(|r| r.revenue).sum()
    }
}

/// Group by calendar day of the purchase timestamp.
pub fn daily_orders(orders: &OrderTable) -> DailyOrdersSummary {
    let mut days: BTreeMap<NaiveDate, (HashSet<&str>, Price)> = BTreeMap::new();

    for row in orders.rows() {
        let entry = days.entry(row.purchase_timestamp.date()).or_default();
        entry.0.insert(row.order_id.as_str());
        entry.1 += row.price;
    }

    let rows = days
        .into_iter()
        .map(|(date, (order_ids, revenue))| DailyOrdersRow {
            date,
            order_count: order_ids.len() as u64,
            revenue,
        })
        .collect();

    DailyOrdersSummary { rows }
}

/// One product category with its sales volume
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySalesRow {
    pub category: String,
    /// Number of line items sold in the category
    pub items_sold: u64,
}

/// Category sales ranking, descending by volume
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategorySalesSummary {
    pub rows: Vec<CategorySalesRow>,
}

impl CategorySalesSummary {
    /// Best-performing categories
    pub fn top(&self, n: usize) -> &[CategorySalesRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Worst-performing categories, ascending by volume
    pub fn bottom(&self, n: usize) -> Vec<CategorySalesRow> {
        self.rows.iter().rev().take(n).cloned().collect()
    }
}

/// Group by product category, counting line items sold.
///
/// Each row of the table is one line item, so the count is the quantity
/// sold in the category.
pub fn sales_by_category(orders: &OrderTable) -> CategorySalesSummary {
    let mut discovery: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u64> = HashMap::new();

    for row in orders.rows() {
        if let Some(count) = counts.get_mut(&row.category) {
            *count += 1;
        } else {
            counts.insert(row.category.clone(), 1);
            discovery.push(row.category.clone());
        }
    }

    let mut rows: Vec<CategorySalesRow> = discovery
        .into_iter()
        .map(|category| {
            let items_sold = counts[&category];
            CategorySalesRow {
                category,
                items_sold,
            }
        })
        .collect();

    // Stable sort: equal volumes keep discovery order
    rows.sort_by(|a, b| b.items_sold.cmp(&a.items_sold));

    CategorySalesSummary { rows }
}

/// One dimension value with its distinct-customer count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerCountRow<K> {
    pub key: K,
    /// Distinct customer identifiers, not row count
    pub customer_count: u64,
}

/// Distinct customer counts grouped by one dimension
///
/// Row order depends on the producing function; both count-ordered and
/// key-ordered views derive from the same rows without recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerCounts<K> {
    pub rows: Vec<CustomerCountRow<K>>,
}

impl<K> Default for CustomerCounts<K> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<K: Clone> CustomerCounts<K> {
    /// Rows ordered descending by customer count (stable)
    pub fn sorted_by_count(&self) -> Vec<CustomerCountRow<K>> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| b.customer_count.cmp(&a.customer_count));
        rows
    }

    /// Sum of per-group counts; an upper bound is the distinct-customer
    /// total of the input when dimension values are exclusive per customer
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| r.customer_count).sum()
    }
}

impl<K: Clone + Ord> CustomerCounts<K> {
    /// Rows ordered ascending by dimension value
    pub fn sorted_by_key(&self) -> Vec<CustomerCountRow<K>> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        rows
    }
}

/// Generic distinct-customer group-by; rows come back in discovery order.
fn distinct_customers_by<K, F>(orders: &OrderTable, key_of: F) -> CustomerCounts<K>
where
    K: Eq + Hash + Clone,
    F: Fn(&crate::types::OrderRecord) -> K,
{
    let mut discovery: Vec<K> = Vec::new();
    let mut groups: HashMap<K, HashSet<&str>> = HashMap::new();

    for row in orders.rows() {
        let key = key_of(row);
        if let Some(customers) = groups.get_mut(&key) {
            customers.insert(row.customer_id.as_str());
        } else {
            let mut customers = HashSet::new();
            customers.insert(row.customer_id.as_str());
            groups.insert(key.clone(), customers);
            discovery.push(key);
        }
    }

    let rows = discovery
        .into_iter()
        .map(|key| {
            let customer_count = groups[&key].len() as u64;
            CustomerCountRow {
                key,
                customer_count,
            }
        })
        .collect();

    CustomerCounts { rows }
}

/// Distinct customers per payment type
pub fn customers_by_payment_type(orders: &OrderTable) -> CustomerCounts<String> {
    distinct_customers_by(orders, |r| r.payment_type.clone())
}

/// Distinct customers per review score, descending by count.
///
/// The score ordering for charting comes from `sorted_by_key()` on the
/// same summary.
pub fn customers_by_review_score(orders: &OrderTable) -> CustomerCounts<u8> {
    let mut summary = distinct_customers_by(orders, |r| r.review_score);
    summary
        .rows
        .sort_by(|a, b| b.customer_count.cmp(&a.customer_count));
    summary
}

/// Distinct customers per federative-unit code.
///
/// Raw 2-letter codes are retained; the display-name mapping is applied by
/// the presentation layer (see `states`).
pub fn customers_by_state(orders: &OrderTable) -> CustomerCounts<String> {
    distinct_customers_by(orders, |r| r.customer_state.clone())
}
