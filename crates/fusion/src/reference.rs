//! Climate-normal reference for the adaptive strategy.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use etofuse_series::Variable;

/// Long-term monthly climatology for one variable at one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateNormals {
    /// Monthly mean, January first.
    pub monthly_mean: [f64; 12],
    /// Historical day-to-day standard deviation per month, January first.
    pub monthly_daily_std: [f64; 12],
}

impl ClimateNormals {
    /// Mean and daily std for the month of `date`.
    pub fn for_date(&self, date: NaiveDate) -> (f64, f64) {
        let m = date.month0() as usize;
        (self.monthly_mean[m], self.monthly_daily_std[m])
    }
}

/// A matched historical reference: per-variable normals plus how much the
/// match is trusted.
///
/// The caller resolves the nearest reference location and enforces its
/// distance threshold; by the time this type exists the match is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionReference {
    /// Trust in the reference location match, 0..1.
    pub confidence: f64,
    /// Normals per variable; variables absent here fuse in simple mode.
    pub normals: BTreeMap<Variable, ClimateNormals>,
}
