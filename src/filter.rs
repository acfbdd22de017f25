//! Date-range filtering over the order table

use crate::error::{DashboardError, Result};
use crate::types::OrderTable;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Inclusive date range at day granularity
///
/// Both bounds are inclusive and compared on the calendar date only: a
/// purchase at any time of day on `end` is in range. A reversed range is
/// rejected at construction, never silently emptied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end` with `InvalidRange`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(DashboardError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Single-day range
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Day-granularity containment check (end-of-day inclusive).
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        let day = ts.date();
        day >= self.start && day <= self.end
    }
}

/// Restrict the table to rows whose purchase timestamp falls in `range`.
///
/// Returns a new table; the input is never mutated. Relative row order is
/// preserved, so the result stays sorted by purchase timestamp.
pub fn filter(orders: &OrderTable, range: &DateRange) -> OrderTable {
    let rows = orders
        .rows()
        .iter()
        .filter(|r| range.contains(r.purchase_timestamp))
        .cloned()
        .collect();
    OrderTable::from_sorted(rows)
}
