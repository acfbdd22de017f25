//! End-to-end report example
//!
//! Loads the two dashboard datasets, reports over the full date span, and
//! prints the tables a UI would chart.
//!
//! Usage: cargo run --example daily_report -- main_data.csv geolocation.csv

use anyhow::{bail, Context};
use std::time::Duration;
use vitrine::fx::{CachedRateProvider, Currency, CurrencyPair, StaticRateProvider};
use vitrine::prelude::*;
use vitrine::states::state_display_name;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (orders_path, geo_path) = match (args.next(), args.next()) {
        (Some(orders), Some(geo)) => (orders, geo),
        _ => bail!("usage: daily_report <orders.csv> <geolocation.csv>"),
    };

    let data = DashboardData::load(&orders_path, &geo_path).context("loading datasets")?;

    let (min, max) = match data.date_span() {
        Some(span) => span,
        None => bail!("order dataset is empty"),
    };
    println!("=== Vitrine: Daily Report ===");
    println!("Period: {} - {}\n", min, max);

    let report = data.report(DateRange::new(min, max)?);

    println!("Total orders: {}", report.total_orders());
    println!("Total revenue: R$ {:.2}", report.total_revenue());

    // Offline rate table standing in for a network source; wrap a fetched
    // rate the same way in a real deployment.
    let mut rates = StaticRateProvider::new();
    rates.set_rate(CurrencyPair::new(Currency::BRL, Currency::IDR), 3050.0)?;
    let provider = CachedRateProvider::new(rates, Duration::from_secs(600));

    match report.localized_revenue(&provider, Currency::IDR) {
        Ok(idr) => println!("Total revenue: Rp {:.0}", idr),
        Err(e) => println!("(conversion unavailable, showing BRL only: {})", e),
    }

    println!("\nDaily orders:");
    for row in &report.daily_orders.rows {
        println!("  {}  {:>5} orders  R$ {:>10.2}", row.date, row.order_count, row.revenue);
    }

    println!("\nBest performing categories:");
    for row in report.category_sales.top(5) {
        println!("  {:<30} {:>6}", row.category, row.items_sold);
    }

    println!("\nWorst performing categories:");
    for row in report.category_sales.bottom(5) {
        println!("  {:<30} {:>6}", row.category, row.items_sold);
    }

    println!("\nCustomers by payment type:");
    for row in report.customers_by_payment.sorted_by_count() {
        println!("  {:<15} {:>6}", row.key, row.customer_count);
    }

    println!("\nCustomers by review score:");
    for row in report.customers_by_review.sorted_by_key() {
        println!("  {} stars: {:>6}", row.key, row.customer_count);
    }

    println!("\nTop states:");
    for row in report.customers_by_state.sorted_by_count().iter().take(5) {
        let label = state_display_name(&row.key).unwrap_or(row.key.as_str());
        println!("  {:<25} {:>6}", label, row.customer_count);
    }

    let overlay = data.overlay();
    println!("\nGeolocation overlay: {} unique customers", overlay.points.len());

    Ok(())
}
