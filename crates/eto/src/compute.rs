//! Per-day method selection over a fused series batch.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use etofuse_series::{DailySeries, Variable};

use crate::atmosphere::{wind_10m_to_2m, ElevationCorrection};
use crate::error::EtoError;
use crate::hargreaves::hargreaves;
use crate::penman::{penman_monteith, PenmanInputs};
use crate::record::{EToRecord, EtoMethod};

/// Penman-Monteith inputs beyond temperature mean.
const PENMAN_REQUIRED: [Variable; 5] = [
    Variable::TempMax,
    Variable::TempMin,
    Variable::HumidityMean,
    Variable::WindSpeed10m,
    Variable::SolarRadiation,
];

fn day_value(
    fused: &BTreeMap<Variable, DailySeries>,
    variable: Variable,
    date: NaiveDate,
) -> Option<f64> {
    fused.get(&variable).and_then(|s| s.get(date))
}

/// Computes one [`EToRecord`] per day of the fused batch.
///
/// Penman-Monteith where temperature extremes, humidity, wind, and radiation
/// are all present; Hargreaves where only temperature survives; a recorded
/// gap otherwise. A single day's shortfall never aborts the batch.
pub fn compute_eto(
    fused: &BTreeMap<Variable, DailySeries>,
    latitude_deg: f64,
    elevation_m: f64,
) -> Result<Vec<EToRecord>, EtoError> {
    if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
        return Err(EtoError::InvalidLatitude { latitude: latitude_deg });
    }
    let Some(reference) = fused.values().next() else {
        return Err(EtoError::EmptyInput);
    };
    let (start, end) = (reference.start(), reference.end());
    for (variable, series) in fused {
        if series.start() != start || series.end() != end {
            return Err(EtoError::RangeMismatch { variable: *variable });
        }
    }

    let correction = ElevationCorrection::at(elevation_m);
    let mut records = Vec::with_capacity(reference.len());
    for offset in 0..reference.len() {
        let date = start + chrono::Days::new(offset as u64);
        records.push(compute_day(fused, date, latitude_deg, &correction));
    }
    debug!(
        %start,
        %end,
        gaps = records.iter().filter(|r| r.method == EtoMethod::None).count(),
        "computed daily ETo batch"
    );
    Ok(records)
}

fn compute_day(
    fused: &BTreeMap<Variable, DailySeries>,
    date: NaiveDate,
    latitude_deg: f64,
    correction: &ElevationCorrection,
) -> EToRecord {
    let temp_mean = day_value(fused, Variable::TempMean, date);

    let missing: Vec<Variable> = PENMAN_REQUIRED
        .into_iter()
        .filter(|v| day_value(fused, *v, date).is_none())
        .collect();

    if missing.is_empty() {
        // All five present; checked just above.
        let get = |v| day_value(fused, v, date).unwrap_or(f64::NAN);
        let inputs = PenmanInputs {
            date,
            latitude_deg,
            temp_max_c: get(Variable::TempMax),
            temp_min_c: get(Variable::TempMin),
            temp_mean_c: temp_mean,
            humidity_mean_pct: get(Variable::HumidityMean),
            wind_2m_ms: wind_10m_to_2m(get(Variable::WindSpeed10m)),
            solar_mj_m2: get(Variable::SolarRadiation),
        };
        let eto = penman_monteith(&inputs, correction);
        let mut inputs_used = PENMAN_REQUIRED.to_vec();
        if temp_mean.is_some() {
            inputs_used.push(Variable::TempMean);
        }
        return finish(date, eto, EtoMethod::PenmanMonteith, inputs_used);
    }

    let temp_max = day_value(fused, Variable::TempMax, date);
    let temp_min = day_value(fused, Variable::TempMin, date);
    if let (Some(tmax), Some(tmin)) = (temp_max, temp_min) {
        let eto = hargreaves(tmax, tmin, temp_mean, latitude_deg, date);
        let mut inputs_used = vec![Variable::TempMax, Variable::TempMin];
        if temp_mean.is_some() {
            inputs_used.push(Variable::TempMean);
        }
        return finish(date, eto, EtoMethod::Hargreaves, inputs_used);
    }

    let names: Vec<&str> = missing.iter().map(Variable::as_str).collect();
    EToRecord {
        date,
        eto_mm_day: None,
        method: EtoMethod::None,
        inputs_used: Vec::new(),
        out_of_range: false,
        gap_reason: Some(format!("missing {}", names.join(", "))),
    }
}

fn finish(date: NaiveDate, eto: f64, method: EtoMethod, inputs_used: Vec<Variable>) -> EToRecord {
    EToRecord {
        date,
        eto_mm_day: Some(eto),
        method,
        inputs_used,
        out_of_range: !(0.0..=15.0).contains(&eto),
        gap_reason: None,
    }
}
