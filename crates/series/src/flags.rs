//! Per-day quality-control audit flags.

use serde::{Deserialize, Serialize};

/// Audit trail for one day of one variable's series.
///
/// The three QC stages mutate these in order: physical validation clears
/// `physically_valid`, outlier detection sets `is_outlier`, imputation sets
/// `was_imputed`. Flags are never reset by a later stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityFlags {
    /// False when the raw value violated its physical bound (or the Ra
    /// envelope for solar radiation).
    pub physically_valid: bool,
    /// True when the IQR test removed the value.
    pub is_outlier: bool,
    /// True when the final value was filled by interpolation or fallback.
    pub was_imputed: bool,
}

impl Default for QualityFlags {
    fn default() -> Self {
        Self {
            physically_valid: true,
            is_outlier: false,
            was_imputed: false,
        }
    }
}
