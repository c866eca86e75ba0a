//! The closed provider set.

use serde::{Deserialize, Serialize};

/// Identifier of one of the six supported weather providers.
///
/// The set is closed on purpose: every provider carries its own date-window
/// function and variable list, and all dispatch over providers is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderId {
    NasaPower,
    OpenMeteoArchive,
    OpenMeteoForecast,
    MetNorway,
    NwsForecast,
    NwsStations,
}

impl ProviderId {
    /// All providers, in catalog declaration order.
    pub const ALL: [ProviderId; 6] = [
        ProviderId::NasaPower,
        ProviderId::OpenMeteoArchive,
        ProviderId::OpenMeteoForecast,
        ProviderId::MetNorway,
        ProviderId::NwsForecast,
        ProviderId::NwsStations,
    ];

    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::NasaPower => "nasa_power",
            ProviderId::OpenMeteoArchive => "open_meteo_archive",
            ProviderId::OpenMeteoForecast => "open_meteo_forecast",
            ProviderId::MetNorway => "met_norway",
            ProviderId::NwsForecast => "nws_forecast",
            ProviderId::NwsStations => "nws_stations",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip_uses_snake_case() {
        let json = serde_json::to_string(&ProviderId::MetNorway).unwrap();
        assert_eq!(json, r#""met_norway""#);
        let back: ProviderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProviderId::MetNorway);
    }

    #[test]
    fn all_contains_every_provider_once() {
        let mut seen = std::collections::HashSet::new();
        for p in ProviderId::ALL {
            assert!(seen.insert(p), "duplicate provider {p}");
        }
        assert_eq!(seen.len(), 6);
    }
}
