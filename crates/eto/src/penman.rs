//! FAO-56 Penman-Monteith (eq. 6) with the standard daily simplifications.

use chrono::NaiveDate;

use crate::atmosphere::ElevationCorrection;
use crate::solar::extraterrestrial_radiation;

/// Saturation vapour pressure e°(T), kPa (FAO-56 eq. 11).
fn saturation_vapour_pressure(t_c: f64) -> f64 {
    0.6108 * (17.27 * t_c / (t_c + 237.3)).exp()
}

/// One day's inputs, all in canonical units. Wind is already at 2 m.
#[derive(Debug, Clone, Copy)]
pub struct PenmanInputs {
    pub date: NaiveDate,
    pub latitude_deg: f64,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
    /// Daily mean; when absent the (Tmax+Tmin)/2 approximation is used.
    pub temp_mean_c: Option<f64>,
    pub humidity_mean_pct: f64,
    pub wind_2m_ms: f64,
    pub solar_mj_m2: f64,
}

/// Daily reference ETo in mm/day by FAO-56 Penman-Monteith.
///
/// Soil heat flux G is taken as zero at the daily step. Actual vapour
/// pressure derives from mean relative humidity, the recommended form when
/// only RH-mean is observed.
pub fn penman_monteith(inputs: &PenmanInputs, correction: &ElevationCorrection) -> f64 {
    let t_mean = inputs
        .temp_mean_c
        .unwrap_or((inputs.temp_max_c + inputs.temp_min_c) / 2.0);

    let delta = 4098.0 * saturation_vapour_pressure(t_mean) / (t_mean + 237.3).powi(2);
    let gamma = correction.psychrometric_constant;

    let es = (saturation_vapour_pressure(inputs.temp_max_c)
        + saturation_vapour_pressure(inputs.temp_min_c))
        / 2.0;
    let ea = (inputs.humidity_mean_pct / 100.0 * es).min(es);

    let ra = extraterrestrial_radiation(inputs.latitude_deg, inputs.date);
    let rso = (0.75 + 2e-5 * correction.elevation_m) * ra;
    let rns = 0.77 * inputs.solar_mj_m2;
    let relative_shortwave = if rso > 0.0 {
        (inputs.solar_mj_m2 / rso).min(1.0)
    } else {
        1.0
    };
    let tmax_k4 = (inputs.temp_max_c + 273.16).powi(4);
    let tmin_k4 = (inputs.temp_min_c + 273.16).powi(4);
    let rnl = 4.903e-9
        * ((tmax_k4 + tmin_k4) / 2.0)
        * (0.34 - 0.14 * ea.max(0.0).sqrt())
        * (1.35 * relative_shortwave - 0.35);
    let rn = rns - rnl;

    let u2 = inputs.wind_2m_ms;
    let numerator =
        0.408 * delta * rn + gamma * 900.0 / (t_mean + 273.0) * u2 * (es - ea);
    let denominator = delta + gamma * (1.0 + 0.34 * u2);
    numerator / denominator
}
