//! The three stages in order.

use tracing::info;

use etofuse_series::{DailySeries, QualityFlags, Variable};

use crate::config::QcConfig;
use crate::error::QcError;
use crate::impute::impute_gaps;
use crate::outliers::detect_outliers;
use crate::validate::validate_physical;

/// A quality-controlled series with its audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct QcOutcome {
    pub series: DailySeries,
    /// One flag set per day slot, in series order.
    pub flags: Vec<QualityFlags>,
    /// Findings from all three stages, in stage order.
    pub warnings: Vec<String>,
}

/// Runs physical validation, outlier detection, and imputation on one
/// provider's single-variable series.
///
/// Consumes the raw series and returns the cleaned one with per-day flags
/// and accumulated warnings. Fails only on malformed input; every
/// data-quality issue is a warning.
pub fn run_quality_control(
    series: DailySeries,
    variable: Variable,
    latitude_deg: f64,
    config: &QcConfig,
) -> Result<QcOutcome, QcError> {
    if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
        return Err(QcError::InvalidLatitude { latitude: latitude_deg });
    }

    let mut series = series;
    let mut flags = vec![QualityFlags::default(); series.len()];
    let mut warnings = Vec::new();

    warnings.extend(validate_physical(&mut series, &mut flags, variable, latitude_deg));
    warnings.extend(detect_outliers(&mut series, &mut flags, variable, config));
    warnings.extend(impute_gaps(&mut series, &mut flags, variable));

    let invalid = flags.iter().filter(|f| !f.physically_valid).count();
    let outliers = flags.iter().filter(|f| f.is_outlier).count();
    let imputed = flags.iter().filter(|f| f.was_imputed).count();
    if invalid + outliers + imputed > 0 {
        warnings.push(format!(
            "{variable}: summary: {invalid} invalid, {outliers} outlier(s), {imputed} imputed"
        ));
    }

    info!(
        %variable,
        days = series.len(),
        present = series.present_count(),
        warnings = warnings.len(),
        "quality control complete"
    );
    Ok(QcOutcome { series, flags, warnings })
}
