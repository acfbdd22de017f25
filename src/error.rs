//! Error types for Vitrine

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for Vitrine
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Exchange rate unavailable: {0}")]
    RateUnavailable(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for Vitrine operations
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message() {
        let err = DashboardError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2021, 5, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2021, 5, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2021-05-02"));
        assert!(msg.contains("2021-05-01"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DashboardError = io.into();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
