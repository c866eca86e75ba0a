//! Stage 3: gap imputation.

use tracing::debug;

use etofuse_series::{DailySeries, QualityFlags, Variable};

/// Fills every remaining gap in the series.
///
/// Interior gaps are linearly interpolated between their nearest valid
/// neighbors. Residual edge gaps are forward-filled, then backward-filled;
/// an all-missing series stays all-missing (there is nothing to anchor a
/// fill to) and that is reported as a warning. Fill counts land in the
/// warnings for audit.
pub fn impute_gaps(
    series: &mut DailySeries,
    flags: &mut [QualityFlags],
    variable: Variable,
) -> Vec<String> {
    let n = series.len();
    let before = series.present_count();
    if before == 0 {
        return vec![format!("{variable}: series entirely missing, nothing to impute")];
    }
    if before == n {
        return Vec::new();
    }

    let mut interpolated = 0usize;
    let mut edge_filled = 0usize;

    // Interior gaps: linear interpolation between the bracketing valid points.
    let snapshot: Vec<Option<f64>> = series.values().to_vec();
    {
        let slots = series.values_mut();
        let mut i = 0;
        while i < n {
            if snapshot[i].is_some() {
                i += 1;
                continue;
            }
            let left = (0..i).rev().find(|&j| snapshot[j].is_some());
            let right = (i..n).find(|&j| snapshot[j].is_some());
            if let (Some(l), Some(r)) = (left, right) {
                let (a, b) = (snapshot[l].unwrap_or(0.0), snapshot[r].unwrap_or(0.0));
                let t = (i - l) as f64 / (r - l) as f64;
                slots[i] = Some(a + t * (b - a));
                flags[i].was_imputed = true;
                interpolated += 1;
            }
            i += 1;
        }

        // Leading gap: backward fill from the first valid point.
        if let Some(first) = slots.iter().position(|v| v.is_some()) {
            let fill = slots[first];
            for (i, slot) in slots.iter_mut().enumerate().take(first) {
                *slot = fill;
                flags[i].was_imputed = true;
                edge_filled += 1;
            }
        }
        // Trailing gap: forward fill from the last valid point.
        if let Some(last) = slots.iter().rposition(|v| v.is_some()) {
            let fill = slots[last];
            for (i, slot) in slots.iter_mut().enumerate().skip(last + 1) {
                *slot = fill;
                flags[i].was_imputed = true;
                edge_filled += 1;
            }
        }
    }

    // Mean as last resort; only reachable if the fills above left holes.
    let mut mean_filled = 0usize;
    if series.present_count() < n {
        if let Some(mean) = series.mean() {
            for (i, slot) in series.values_mut().iter_mut().enumerate() {
                if slot.is_none() {
                    *slot = Some(mean);
                    flags[i].was_imputed = true;
                    mean_filled += 1;
                }
            }
        }
    }

    debug!(%variable, interpolated, edge_filled, mean_filled, "imputed gaps");
    let mut warnings = Vec::new();
    if interpolated > 0 {
        warnings.push(format!("{variable}: {interpolated} gap(s) linearly interpolated"));
    }
    if edge_filled > 0 {
        warnings.push(format!("{variable}: {edge_filled} edge gap(s) filled by extension"));
    }
    if mean_filled > 0 {
        warnings.push(format!("{variable}: {mean_filled} gap(s) filled with the series mean"));
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
    fn interior_gap_lands_between_its_neighbors() {
        let (mut s, mut flags) = series_of(&[Some(10.0), None, Some(14.0)]);
        impute_gaps(&mut s, &mut flags, Variable::TempMean);
        let filled = s.values()[1].unwrap();
        assert!(filled > 10.0 && filled < 14.0);
        assert_relative_eq!(filled, 12.0);
        assert!(flags[1].was_imputed);
        assert_eq!(s.present_count(), 3);
    }

    #[test]
    fn long_interior_gap_interpolates_proportionally() {
        let (mut s, mut flags) = series_of(&[Some(0.0), None, None, None, Some(8.0)]);
        impute_gaps(&mut s, &mut flags, Variable::TempMean);
        assert_relative_eq!(s.values()[1].unwrap(), 2.0);
        assert_relative_eq!(s.values()[2].unwrap(), 4.0);
        assert_relative_eq!(s.values()[3].unwrap(), 6.0);
    }

    #[test]
    fn edge_gaps_extend_the_nearest_value() {
        let (mut s, mut flags) = series_of(&[None, Some(5.0), Some(7.0), None, None]);
        let warnings = impute_gaps(&mut s, &mut flags, Variable::TempMean);
        assert_eq!(
            s.values(),
            &[Some(5.0), Some(5.0), Some(7.0), Some(7.0), Some(7.0)]
        );
        assert!(flags[0].was_imputed && flags[3].was_imputed && flags[4].was_imputed);
        assert!(!flags[1].was_imputed);
        assert!(warnings.iter().any(|w| w.contains("edge")));
    }

    #[test]
    fn complete_series_is_untouched() {
        let (mut s, mut flags) = series_of(&[Some(1.0), Some(2.0)]);
        let warnings = impute_gaps(&mut s, &mut flags, Variable::TempMean);
        assert!(warnings.is_empty());
        assert!(flags.iter().all(|f| !f.was_imputed));
    }

    #[test]
    fn all_missing_series_warns_and_stays_missing() {
        let (mut s, mut flags) = series_of(&[None, None, None]);
        let warnings = impute_gaps(&mut s, &mut flags, Variable::TempMean);
        assert_eq!(s.present_count(), 0);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn no_missing_values_remain_after_imputation() {
        let (mut s, mut flags) = series_of(&[None, Some(3.0), None, None, Some(9.0), None]);
        impute_gaps(&mut s, &mut flags, Variable::TempMean);
        assert_eq!(s.present_count(), s.len());
    }
}
