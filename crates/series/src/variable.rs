//! Harmonized weather-variable enum.

use serde::{Deserialize, Serialize};

/// A daily weather variable, harmonized across all providers.
///
/// The unit column is the canonical unit after adapter-side conversion;
/// nothing downstream of ingestion deals in provider-native units.
///
/// | Variant | Unit |
/// |---------|------|
/// | `TempMax` / `TempMin` / `TempMean` | °C |
/// | `HumidityMean` | % |
/// | `WindSpeed10m` | m/s at 10 m |
/// | `Precipitation` | mm/day |
/// | `SolarRadiation` | MJ/m²/day |
/// | `Pressure` | hPa (mean sea level) |
/// | `SunshineDuration` | hours |
/// | `Eto` | mm/day (provider-computed reference ETo) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    TempMax,
    TempMin,
    TempMean,
    HumidityMean,
    // `rename_all = "snake_case"` would yield `wind_speed10m`; the canonical
    // name (see `as_str`) keeps the underscore before the digit.
    #[serde(rename = "wind_speed_10m")]
    WindSpeed10m,
    Precipitation,
    SolarRadiation,
    Pressure,
    SunshineDuration,
    Eto,
}

impl Variable {
    /// All variables, in the canonical (derive `Ord`) order.
    pub const ALL: [Variable; 10] = [
        Variable::TempMax,
        Variable::TempMin,
        Variable::TempMean,
        Variable::HumidityMean,
        Variable::WindSpeed10m,
        Variable::Precipitation,
        Variable::SolarRadiation,
        Variable::Pressure,
        Variable::SunshineDuration,
        Variable::Eto,
    ];

    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variable::TempMax => "temp_max",
            Variable::TempMin => "temp_min",
            Variable::TempMean => "temp_mean",
            Variable::HumidityMean => "humidity_mean",
            Variable::WindSpeed10m => "wind_speed_10m",
            Variable::Precipitation => "precipitation",
            Variable::SolarRadiation => "solar_radiation",
            Variable::Pressure => "pressure",
            Variable::SunshineDuration => "sunshine_duration",
            Variable::Eto => "eto",
        }
    }

    /// Canonical unit string for display and serialized records.
    pub fn unit(&self) -> &'static str {
        match self {
            Variable::TempMax | Variable::TempMin | Variable::TempMean => "°C",
            Variable::HumidityMean => "%",
            Variable::WindSpeed10m => "m/s",
            Variable::Precipitation => "mm",
            Variable::SolarRadiation => "MJ/m²/day",
            Variable::Pressure => "hPa",
            Variable::SunshineDuration => "h",
            Variable::Eto => "mm/day",
        }
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
