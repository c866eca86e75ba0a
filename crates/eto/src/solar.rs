//! Solar geometry: extraterrestrial radiation (FAO-56 eq. 21-24).

use chrono::{Datelike, NaiveDate};

/// Solar constant, MJ/m²/min.
const SOLAR_CONSTANT: f64 = 0.0820;

/// Extraterrestrial radiation Ra in MJ/m²/day for a latitude and date.
///
/// The sunset-hour-angle argument is clamped to [-1, 1] so polar latitudes
/// in permanent day or night yield a finite Ra instead of NaN.
pub fn extraterrestrial_radiation(latitude_deg: f64, date: NaiveDate) -> f64 {
    let phi = latitude_deg.to_radians();
    let doy = date.ordinal() as f64;
    let year_len = if date.leap_year() { 366.0 } else { 365.0 };

    let dr = 1.0 + 0.033 * (2.0 * std::f64::consts::PI * doy / year_len).cos();
    let delta = 0.409 * (2.0 * std::f64::consts::PI * doy / year_len - 1.39).sin();
    let ws = (-phi.tan() * delta.tan()).clamp(-1.0, 1.0).acos();

    (24.0 * 60.0 / std::f64::consts::PI)
        * SOLAR_CONSTANT
        * dr
        * (ws * phi.sin() * delta.sin() + phi.cos() * delta.cos() * ws.sin())
}
