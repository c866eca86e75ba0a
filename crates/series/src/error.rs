//! Error types for the etofuse-series crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the etofuse-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a date range has its end before its start.
    #[error("malformed date range: start {start} is after end {end}")]
    MalformedDateRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// Returned when observations are not in strictly increasing date order.
    #[error("observations out of chronological order at {date}")]
    NonChronological {
        /// The first date found out of order.
        date: NaiveDate,
    },

    /// Returned when an observation falls outside the series date range.
    #[error("observation date {date} outside series range [{start}, {end}]")]
    DateOutOfRange {
        /// The offending observation date.
        date: NaiveDate,
        /// Series start date.
        start: NaiveDate,
        /// Series end date.
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
    fn error_malformed_range_display() {
        let e = SeriesError::MalformedDateRange {
            start: d("2024-05-10"),
            end: d("2024-05-01"),
        };
        assert_eq!(
            e.to_string(),
            "malformed date range: start 2024-05-10 is after end 2024-05-01"
        );
    }

    #[test]
    fn error_non_chronological_display() {
        let e = SeriesError::NonChronological { date: d("2024-05-03") };
        assert_eq!(e.to_string(), "observations out of chronological order at 2024-05-03");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<SeriesError>();
    }
}
