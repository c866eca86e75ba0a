//! Operation-mode resolution for ETo requests.
//!
//! Every request arrives as a date range plus an optional mode hint. The
//! resolver either validates the hinted mode's constraints or infers the mode
//! from the range alone:
//!
//! | Mode | Period | Anchoring |
//! |------|--------|-----------|
//! | [`OperationMode::DashboardForecast`] | exactly 6 days | starts today, ends today + 5 |
//! | [`OperationMode::DashboardCurrent`] | 7, 14, 21 or 30 days | ends today |
//! | [`OperationMode::HistoricalEmail`] | 1 to 90 days | ends at least 30 days ago, starts 1990-01-01 or later |
//!
//! All decisions take `today` as an explicit argument so callers (and tests)
//! control the clock.
//!
//! ```
//! use chrono::NaiveDate;
//! use etofuse_request::{resolve_mode, OperationMode};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
//! let start = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
//! let mode = resolve_mode(None, start, today, today)?;
//! assert_eq!(mode, OperationMode::DashboardCurrent);
//! # Ok::<(), etofuse_request::RequestError>(())
//! ```

mod error;
mod mode;

pub use error::RequestError;
pub use mode::{resolve_mode, OperationMode, ARCHIVE_FLOOR, HISTORICAL_LAG_DAYS};
