//! Per-day calculator output.

use chrono::NaiveDate;
use serde::Serialize;

use etofuse_series::Variable;

/// Which equation produced a day's ETo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EtoMethod {
    PenmanMonteith,
    Hargreaves,
    /// Insufficient inputs; the day is a recorded gap.
    None,
}

/// One day's ETo result, gaps included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EToRecord {
    pub date: NaiveDate,
    /// Missing when no method had enough inputs.
    pub eto_mm_day: Option<f64>,
    pub method: EtoMethod,
    /// Fused variables that actually entered the equation.
    pub inputs_used: Vec<Variable>,
    /// Set when the value falls outside the plausible [0, 15] mm/day band.
    /// The value itself is never truncated.
    pub out_of_range: bool,
    /// Why the day is a gap, when `method` is `None`.
    pub gap_reason: Option<String>,
}
