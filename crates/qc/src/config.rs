//! Quality-control configuration.

/// Tunable knobs for the QC pipeline. `Default` matches production settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QcConfig {
    /// Warn when the flagged-outlier fraction of valid points exceeds this.
    pub outlier_warning_fraction: f64,
    /// Minimum valid points before the IQR test runs at all.
    pub outlier_min_points: usize,
}

impl Default for QcConfig {
    fn default() -> Self {
        Self {
            outlier_warning_fraction: 0.05,
            outlier_min_points: 5,
        }
    }
}
