//! Raw per-provider daily measurement.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::variable::Variable;

/// One immutable raw measurement as delivered by a provider adapter.
///
/// The adapter has already harmonized the variable name and converted to the
/// canonical unit; `unit` is carried along for audit only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    /// Catalog id of the provider that produced the value. Ingestion checks
    /// it against the provider being fetched and drops mismatches.
    pub provider_id: String,
    /// Observation date (daily resolution).
    pub date: NaiveDate,
    /// Harmonized variable.
    pub variable: Variable,
    /// Measured value in the canonical unit.
    pub value: f64,
    /// Canonical unit string, for audit.
    pub unit: String,
}

impl DailyObservation {
    /// Convenience constructor filling `unit` from the variable.
    pub fn new(provider_id: impl Into<String>, date: NaiveDate, variable: Variable, value: f64) -> Self {
        Self {
            provider_id: provider_id.into(),
            date,
            variable,
            value,
            unit: variable.unit().to_string(),
        }
    }
}
