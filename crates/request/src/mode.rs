//! Mode constraints and the resolver.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RequestError;

/// Earliest date any provider archive reaches back to.
pub const ARCHIVE_FLOOR: NaiveDate = match NaiveDate::from_ymd_opt(1990, 1, 1) {
    Some(d) => d,
    None => unreachable!(),
};

/// Days the historical archive lags behind the present.
pub const HISTORICAL_LAG_DAYS: u64 = 30;

/// How a request intends to use the pipeline.
///
/// The mode decides which providers are eligible and how the date range is
/// anchored to the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationMode {
    /// Archive-quality past data, delivered out of band (e.g. by email).
    HistoricalEmail,
    /// Recent-past window ending today, for the live dashboard.
    DashboardCurrent,
    /// Six-day forecast window starting today.
    DashboardForecast,
}

impl OperationMode {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationMode::HistoricalEmail => "historical_email",
            OperationMode::DashboardCurrent => "dashboard_current",
            OperationMode::DashboardForecast => "dashboard_forecast",
        }
    }

    /// Constraint failures for this mode on `[start, end]`, empty when the
    /// range satisfies the mode. The range itself is assumed well formed.
    fn violations(&self, start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Vec<String> {
        let period = (end - start).num_days() + 1;
        let mut reasons = Vec::new();
        match self {
            OperationMode::HistoricalEmail => {
                if period > 90 {
                    reasons.push(format!("period is {period} days, maximum is 90"));
                }
                let latest_end = today - Days::new(HISTORICAL_LAG_DAYS);
                if end > latest_end {
                    reasons.push(format!(
                        "end {end} is later than {latest_end} (today minus {HISTORICAL_LAG_DAYS} days)"
                    ));
                }
                if start < ARCHIVE_FLOOR {
                    reasons.push(format!("start {start} is before the archive floor {ARCHIVE_FLOOR}"));
                }
            }
            OperationMode::DashboardCurrent => {
                if !matches!(period, 7 | 14 | 21 | 30) {
                    reasons.push(format!("period is {period} days, expected 7, 14, 21 or 30"));
                }
                if end != today {
                    reasons.push(format!("end {end} is not today ({today})"));
                }
            }
            OperationMode::DashboardForecast => {
                if start != today {
                    reasons.push(format!("start {start} is not today ({today})"));
                }
                if period != 6 {
                    reasons.push(format!("period is {period} days, expected 6"));
                }
            }
        }
        reasons
    }
}

impl std::fmt::Display for OperationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the operation mode for a request.
///
/// With a hint, the hinted mode's constraints are checked and any failure is
/// reported as [`RequestError::ConstraintViolation`]. Without a hint, modes
/// are tried in order forecast, current, historical and the first whose
/// constraints hold wins; if none do the range is ambiguous.
pub fn resolve_mode(
    hint: Option<OperationMode>,
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Result<OperationMode, RequestError> {
    if start > end {
        return Err(RequestError::MalformedDateRange { start, end });
    }
    if let Some(mode) = hint {
        let reasons = mode.violations(start, end, today);
        if reasons.is_empty() {
            return Ok(mode);
        }
        return Err(RequestError::ConstraintViolation { mode, start, end, reasons });
    }
    const INFERENCE_ORDER: [OperationMode; 3] = [
        OperationMode::DashboardForecast,
        OperationMode::DashboardCurrent,
        OperationMode::HistoricalEmail,
    ];
    for mode in INFERENCE_ORDER {
        if mode.violations(start, end, today).is_empty() {
            debug!(%mode, %start, %end, "inferred operation mode");
            return Ok(mode);
        }
    }
    Err(RequestError::AmbiguousMode { start, end })
}
