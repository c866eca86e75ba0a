//! Elevation correction and unit conversions.

use serde::Serialize;

/// FAO-56 logarithmic wind-profile factor from 10 m to the 2 m reference
/// height: 4.87 / ln(67.8 * 10 - 5.42).
pub const WIND_10M_TO_2M: f64 = 0.748;

/// Elevation-derived atmospheric quantities (FAO-56 eq. 7-8).
///
/// Pure function of elevation; recomputed per request, never cached across
/// locations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElevationCorrection {
    /// Site elevation above sea level, m.
    pub elevation_m: f64,
    /// Atmospheric pressure, kPa.
    pub pressure_kpa: f64,
    /// Psychrometric constant γ, kPa/°C.
    pub psychrometric_constant: f64,
    /// Clear-sky transmissivity gain with altitude, carried for reporting.
    /// The Rso formula already accounts for elevation on its own.
    pub solar_factor: f64,
}

impl ElevationCorrection {
    /// Computes the correction for a site elevation in metres.
    pub fn at(elevation_m: f64) -> Self {
        let pressure_kpa = 101.3 * ((293.0 - 0.0065 * elevation_m) / 293.0).powf(5.26);
        Self {
            elevation_m,
            pressure_kpa,
            psychrometric_constant: 0.000665 * pressure_kpa,
            solar_factor: 1.0 + 0.10 * elevation_m / 1000.0,
        }
    }
}

/// Converts a 10 m wind speed to the FAO-56 2 m reference height.
pub fn wind_10m_to_2m(u10_ms: f64) -> f64 {
    u10_ms * WIND_10M_TO_2M
}

/// °F to °C.
pub fn fahrenheit_to_celsius(t_f: f64) -> f64 {
    (t_f - 32.0) * 5.0 / 9.0
}

/// Miles per hour to m/s.
pub fn mph_to_ms(v_mph: f64) -> f64 {
    v_mph * 0.44704
}

/// Km/h to m/s.
pub fn kmh_to_ms(v_kmh: f64) -> f64 {
    v_kmh / 3.6
}

/// Daily shortwave energy in Wh/m² to MJ/m²/day.
pub fn wh_per_m2_to_mj(wh: f64) -> f64 {
    wh * 0.0036
}

/// Daily shortwave energy in J/m² to MJ/m²/day.
pub fn j_per_m2_to_mj(j: f64) -> f64 {
    j * 1e-6
}
