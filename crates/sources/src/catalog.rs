//! The static provider catalog.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use etofuse_geo::Region;
use etofuse_request::{OperationMode, ARCHIVE_FLOOR, HISTORICAL_LAG_DAYS};
use etofuse_series::Variable;

use crate::provider::ProviderId;

/// Rough temporal character of a provider, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalType {
    /// Long reanalysis or observation archive.
    Archive,
    /// Short-range model forecast.
    Forecast,
    /// Direct station observations.
    Observation,
}

/// Static description of one provider.
///
/// Everything here is compile-time data; the catalog is immutable and is
/// injected rather than read from a process-wide global.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProviderDescriptor {
    pub id: ProviderId,
    /// Human-readable provider name.
    pub name: &'static str,
    pub temporal_type: TemporalType,
    /// Data license, carried into reports for attribution.
    pub license: &'static str,
}

impl ProviderDescriptor {
    /// Whether the provider serves this region at all.
    pub fn covers(&self, region: Region) -> bool {
        match self.id {
            ProviderId::NwsForecast | ProviderId::NwsStations => region == Region::Usa,
            _ => true,
        }
    }

    /// Variables the provider delivers for this region.
    ///
    /// MET Norway serves its full set only inside the Nordic bbox; elsewhere
    /// its model output thins to temperature and humidity means.
    pub fn variables(&self, region: Region) -> &'static [Variable] {
        use Variable::*;
        match (self.id, region) {
            (ProviderId::NasaPower, _) => &[
                TempMax,
                TempMin,
                TempMean,
                HumidityMean,
                WindSpeed10m,
                Precipitation,
                SolarRadiation,
            ],
            (ProviderId::OpenMeteoArchive | ProviderId::OpenMeteoForecast, _) => &[
                TempMax,
                TempMin,
                TempMean,
                HumidityMean,
                WindSpeed10m,
                Precipitation,
                SolarRadiation,
                SunshineDuration,
                Eto,
            ],
            (ProviderId::MetNorway, Region::Nordic) => {
                &[TempMean, HumidityMean, WindSpeed10m, Precipitation, Pressure]
            }
            (ProviderId::MetNorway, _) => &[TempMean, HumidityMean],
            (ProviderId::NwsForecast, _) => {
                &[TempMax, TempMin, TempMean, HumidityMean, WindSpeed10m]
            }
            (ProviderId::NwsStations, _) => {
                &[TempMax, TempMin, TempMean, HumidityMean, WindSpeed10m, Pressure]
            }
        }
    }

    /// The provider's date window for `mode`, as a function of `today`.
    ///
    /// `None` means the provider does not serve this mode at all.
    pub fn window(&self, mode: OperationMode, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match (mode, self.id) {
            (OperationMode::HistoricalEmail, ProviderId::NasaPower | ProviderId::OpenMeteoArchive) => {
                Some((ARCHIVE_FLOOR, today - Days::new(HISTORICAL_LAG_DAYS)))
            }
            (OperationMode::DashboardCurrent, ProviderId::NasaPower) => {
                Some((today - Days::new(29), today))
            }
            // The archive ingests with a two-day delay.
            (OperationMode::DashboardCurrent, ProviderId::OpenMeteoArchive) => {
                Some((today - Days::new(29), today - Days::new(2)))
            }
            (OperationMode::DashboardCurrent, ProviderId::OpenMeteoForecast) => {
                Some((today - Days::new(30), today))
            }
            (
                OperationMode::DashboardForecast,
                ProviderId::OpenMeteoForecast | ProviderId::MetNorway | ProviderId::NwsForecast,
            ) => Some((today, today + Days::new(5))),
            // Stations report observations, not forecasts.
            (OperationMode::DashboardForecast, ProviderId::NwsStations) => Some((today, today)),
            _ => None,
        }
    }

    /// Ascending rank of the provider in this region; lower is preferred.
    pub fn priority(&self, region: Region) -> Option<usize> {
        let order: &[ProviderId] = match region {
            Region::Usa => &[
                ProviderId::NwsStations,
                ProviderId::NwsForecast,
                ProviderId::OpenMeteoForecast,
                ProviderId::NasaPower,
                ProviderId::OpenMeteoArchive,
                ProviderId::MetNorway,
            ],
            Region::Nordic => &[
                ProviderId::MetNorway,
                ProviderId::OpenMeteoForecast,
                ProviderId::NasaPower,
                ProviderId::OpenMeteoArchive,
            ],
            Region::Global => &[
                ProviderId::OpenMeteoForecast,
                ProviderId::MetNorway,
                ProviderId::NasaPower,
                ProviderId::OpenMeteoArchive,
            ],
        };
        order.iter().position(|p| *p == self.id)
    }
}

/// The immutable provider catalog.
#[derive(Debug, Clone)]
pub struct SourceCatalog {
    providers: Vec<ProviderDescriptor>,
}

impl SourceCatalog {
    /// The standard six-provider catalog.
    pub fn standard() -> Self {
        Self {
            providers: vec![
                ProviderDescriptor {
                    id: ProviderId::NasaPower,
                    name: "NASA POWER",
                    temporal_type: TemporalType::Archive,
                    license: "public domain (NASA)",
                },
                ProviderDescriptor {
                    id: ProviderId::OpenMeteoArchive,
                    name: "Open-Meteo Historical Weather",
                    temporal_type: TemporalType::Archive,
                    license: "CC BY 4.0",
                },
                ProviderDescriptor {
                    id: ProviderId::OpenMeteoForecast,
                    name: "Open-Meteo Forecast",
                    temporal_type: TemporalType::Forecast,
                    license: "CC BY 4.0",
                },
                ProviderDescriptor {
                    id: ProviderId::MetNorway,
                    name: "MET Norway Locationforecast",
                    temporal_type: TemporalType::Forecast,
                    license: "NLOD 2.0 / CC BY 4.0",
                },
                ProviderDescriptor {
                    id: ProviderId::NwsForecast,
                    name: "NWS Gridpoint Forecast",
                    temporal_type: TemporalType::Forecast,
                    license: "public domain (US NWS)",
                },
                ProviderDescriptor {
                    id: ProviderId::NwsStations,
                    name: "NWS Station Observations",
                    temporal_type: TemporalType::Observation,
                    license: "public domain (US NWS)",
                },
            ],
        }
    }

    /// All descriptors, in declaration order.
    pub fn providers(&self) -> &[ProviderDescriptor] {
        &self.providers
    }

    /// Descriptor for one provider.
    pub fn descriptor(&self, id: ProviderId) -> &ProviderDescriptor {
        // standard() lists every variant; the set is closed
        self.providers
            .iter()
            .find(|d| d.id == id)
            .unwrap_or(&self.providers[0])
    }
}
