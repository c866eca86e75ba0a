//! Hargreaves-Samani fallback (temperature and solar geometry only).

use chrono::NaiveDate;

use crate::solar::extraterrestrial_radiation;

/// Daily ETo in mm/day by Hargreaves-Samani.
///
/// Used when any Penman-Monteith input beyond temperature is missing. The
/// 0.408 factor converts Ra from MJ/m²/day to equivalent evaporation.
pub fn hargreaves(
    temp_max_c: f64,
    temp_min_c: f64,
    temp_mean_c: Option<f64>,
    latitude_deg: f64,
    date: NaiveDate,
) -> f64 {
    let t_mean = temp_mean_c.unwrap_or((temp_max_c + temp_min_c) / 2.0);
    let range = (temp_max_c - temp_min_c).max(0.0);
    let ra = extraterrestrial_radiation(latitude_deg, date);
    0.0023 * (t_mean + 17.8) * range.sqrt() * ra * 0.408
}
