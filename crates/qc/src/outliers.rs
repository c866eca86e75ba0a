//! Stage 2: global IQR outlier detection.

use tracing::{debug, warn};

use etofuse_series::{DailySeries, QualityFlags, Variable};

use crate::config::QcConfig;
use crate::limits::{hard_bounded, iqr_multiplier};

/// Linear-interpolation quantile of sorted data (the common "type 7" rule).
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Flags and removes IQR outliers from one variable's series.
///
/// Hard physically bounded variables are excluded: their bounds already cap
/// the tails and a second test would be redundant. Series with fewer than
/// `outlier_min_points` valid points, or with zero spread, are skipped. A
/// warning is emitted when the flagged fraction exceeds the configured
/// ceiling.
pub fn detect_outliers(
    series: &mut DailySeries,
    flags: &mut [QualityFlags],
    variable: Variable,
    config: &QcConfig,
) -> Vec<String> {
    if hard_bounded(variable) {
        return Vec::new();
    }

    let mut valid: Vec<f64> = series.values().iter().flatten().copied().collect();
    if valid.len() < config.outlier_min_points {
        debug!(%variable, points = valid.len(), "too few points for outlier test");
        return Vec::new();
    }
    valid.sort_by(|a, b| a.total_cmp(b));
    let q1 = quantile_sorted(&valid, 0.25);
    let q3 = quantile_sorted(&valid, 0.75);
    let iqr = q3 - q1;
    if iqr == 0.0 {
        debug!(%variable, "zero spread, skipping outlier test");
        return Vec::new();
    }

    let multiplier = iqr_multiplier(variable);
    let lo = q1 - multiplier * iqr;
    let hi = q3 + multiplier * iqr;

    let mut outliers = 0usize;
    for (i, slot) in series.values_mut().iter_mut().enumerate() {
        if let Some(v) = *slot {
            if v < lo || v > hi {
                *slot = None;
                flags[i].is_outlier = true;
                outliers += 1;
            }
        }
    }

    let mut warnings = Vec::new();
    if outliers > 0 {
        warnings.push(format!("{variable}: {outliers} outlier(s) removed by IQR test"));
        let fraction = outliers as f64 / valid.len() as f64;
        if fraction > config.outlier_warning_fraction {
            warn!(%variable, outliers, fraction, "outlier fraction above ceiling");
            warnings.push(format!(
                "{variable}: outlier fraction {:.1}% exceeds {:.1}% ceiling",
                fraction * 100.0,
                config.outlier_warning_fraction * 100.0
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn series_of(values: &[Option<f64>]) -> (DailySeries, Vec<QualityFlags>) {
        let start = d("2023-06-01");
        let end = start + chrono::Days::new(values.len() as u64 - 1);
        let mut s = DailySeries::empty(start, end).unwrap();
        for (slot, v) in s.values_mut().iter_mut().zip(values) {
            *slot = *v;
        }
        let flags = vec![QualityFlags::default(); values.len()];
        (s, flags)
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(quantile_sorted(&sorted, 0.25), 1.75);
        assert_relative_eq!(quantile_sorted(&sorted, 0.75), 3.25);
        assert_relative_eq!(quantile_sorted(&sorted, 0.5), 2.5);
    }

    #[test]
    fn extreme_pressure_value_is_flagged_and_removed() {
        // A value at ten times the IQR fence distance.
        let values: Vec<Option<f64>> = (0..20)
            .map(|i| Some(1010.0 + (i % 5) as f64))
            .chain([Some(1090.0)])
            .collect();
        let (mut s, mut flags) = series_of(&values);
        let warnings = detect_outliers(&mut s, &mut flags, Variable::Pressure, &QcConfig::default());
        let last = s.end();
        assert_eq!(s.get(last), None);
        assert!(flags[20].is_outlier);
        assert!(!warnings.is_empty());
    }

    #[test]
    fn hard_bounded_variables_are_left_alone() {
        let values: Vec<Option<f64>> = (0..10).map(|i| Some(20.0 + i as f64)).collect();
        let (mut s, mut flags) = series_of(&values);
        let warnings = detect_outliers(&mut s, &mut flags, Variable::TempMax, &QcConfig::default());
        assert!(warnings.is_empty());
        assert_eq!(s.present_count(), 10);
        assert!(flags.iter().all(|f| !f.is_outlier));
    }

    #[test]
    fn short_series_is_skipped() {
        let (mut s, mut flags) = series_of(&[Some(1000.0), Some(1010.0), Some(5000.0)]);
        let warnings = detect_outliers(&mut s, &mut flags, Variable::Pressure, &QcConfig::default());
        assert!(warnings.is_empty());
        assert_eq!(s.present_count(), 3);
    }

    #[test]
    fn zero_spread_series_is_skipped() {
        let values: Vec<Option<f64>> = vec![Some(5.0); 10];
        let (mut s, mut flags) = series_of(&values);
        let warnings = detect_outliers(&mut s, &mut flags, Variable::Eto, &QcConfig::default());
        assert!(warnings.is_empty());
        assert_eq!(s.present_count(), 10);
    }

    #[test]
    fn high_outlier_fraction_raises_a_second_warning() {
        let values: Vec<Option<f64>> = (0..10)
            .map(|i| Some(1010.0 + (i % 3) as f64))
            .chain([Some(1095.0), Some(905.0)])
            .collect();
        let (mut s, mut flags) = series_of(&values);
        let warnings = detect_outliers(&mut s, &mut flags, Variable::Pressure, &QcConfig::default());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[1].contains("ceiling"));
    }
}
