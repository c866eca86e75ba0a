//! Stage 1: physical validation.

use tracing::warn;

use etofuse_eto::solar::extraterrestrial_radiation;
use etofuse_series::{DailySeries, QualityFlags, Variable};

use crate::limits::physical_bounds;

/// Validates every slot of one variable's series against its physical bound.
///
/// Violations become missing, clear `physically_valid` on the day's flag,
/// and are counted in one summary warning. Solar radiation gets two extra
/// treatments: values above 100 are taken as raw J/m² and rescaled to
/// MJ/m²/day first, and surviving values must sit inside
/// [0.03·Ra, Ra) for the site latitude and date. Idempotent.
pub fn validate_physical(
    series: &mut DailySeries,
    flags: &mut [QualityFlags],
    variable: Variable,
    latitude_deg: f64,
) -> Vec<String> {
    let bounds = physical_bounds(variable);
    let mut violations = 0usize;
    let start = series.start();

    for (i, slot) in series.values_mut().iter_mut().enumerate() {
        let Some(mut value) = *slot else {
            continue;
        };
        if variable == Variable::SolarRadiation && value > 100.0 {
            // Providers reporting J/m² are six orders of magnitude out.
            value *= 1e-6;
            *slot = Some(value);
        }
        let mut ok = bounds.admits(value);
        if ok && variable == Variable::SolarRadiation {
            let date = start + chrono::Days::new(i as u64);
            let ra = extraterrestrial_radiation(latitude_deg, date);
            ok = value >= 0.03 * ra && value < ra;
        }
        if !ok {
            *slot = None;
            flags[i].physically_valid = false;
            violations += 1;
        }
    }

    let mut warnings = Vec::new();
    if violations > 0 {
        warn!(%variable, violations, "physical validation removed values");
        warnings.push(format!(
            "{variable}: {violations} value(s) outside physical bounds removed"
        ));
    }
    warnings
}
