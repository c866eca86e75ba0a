//! Error types for the etofuse-request crate.

use chrono::NaiveDate;

use crate::mode::OperationMode;

/// Error type for all fallible operations in the etofuse-request crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    /// Returned when the requested range has its end before its start.
    #[error("malformed date range: start {start} is after end {end}")]
    MalformedDateRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// Returned when a hinted mode's constraints are not met by the range.
    #[error("range [{start}, {end}] violates {mode} constraints: {}", reasons.join("; "))]
    ConstraintViolation {
        /// The hinted mode.
        mode: OperationMode,
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
        /// Human-readable reasons, one per failed constraint.
        reasons: Vec<String>,
    },

    /// Returned when no mode's constraints match an unhinted range.
    #[error("range [{start}, {end}] matches no operation mode")]
    AmbiguousMode {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn constraint_violation_joins_reasons() {
        let e = RequestError::ConstraintViolation {
            mode: OperationMode::DashboardForecast,
            start: d("2024-05-01"),
            end: d("2024-05-02"),
            reasons: vec!["must start today".into(), "must span 6 days".into()],
        };
        assert_eq!(
            e.to_string(),
            "range [2024-05-01, 2024-05-02] violates dashboard_forecast constraints: \
             must start today; must span 6 days"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<RequestError>();
    }
}
