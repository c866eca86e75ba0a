//! End-to-end runs against in-memory providers.

use std::collections::BTreeMap;

use approx::assert_abs_diff_eq;
use chrono::{Days, NaiveDate};

use etofuse_eto::EtoMethod;
use etofuse_fusion::FusionReference;
use etofuse_geo::{GeoPoint, Region};
use etofuse_pipeline::{
    run_pipeline, ElevationService, EtoRequest, PipelineConfig, PipelineError, ProviderAdapter,
    ReferenceStore,
};
use etofuse_request::OperationMode;
use etofuse_series::{DailyObservation, Variable};
use etofuse_sources::{ProviderId, SourceCatalog};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[derive(Default)]
struct FixedAdapter {
    data: BTreeMap<ProviderId, Vec<DailyObservation>>,
}

impl FixedAdapter {
    fn with_daily_weather(mut self, provider: ProviderId, start: &str, days: u64) -> Self {
        let start = d(start);
        let mut observations = Vec::new();
        for offset in 0..days {
            let date = start + Days::new(offset);
            let wiggle = (offset % 3) as f64 * 0.4;
            for (variable, value) in [
                (Variable::TempMax, 27.0 + wiggle),
                (Variable::TempMin, 15.0 + wiggle),
                (Variable::HumidityMean, 58.0 + wiggle),
                (Variable::WindSpeed10m, 3.2),
                (Variable::SolarRadiation, 21.0 + wiggle),
            ] {
                observations.push(DailyObservation::new(provider.as_str(), date, variable, value));
            }
        }
        self.data.insert(provider, observations);
        self
    }
}

impl ProviderAdapter for FixedAdapter {
    fn fetch(
        &self,
        provider: ProviderId,
        _point: GeoPoint,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Vec<DailyObservation> {
        self.data.get(&provider).cloned().unwrap_or_default()
    }
}

struct NoReference;

impl ReferenceStore for NoReference {
    fn lookup(&self, _point: GeoPoint, _max_distance_km: f64) -> Option<FusionReference> {
        None
    }
}

struct FixedElevation(Option<f64>);

impl ElevationService for FixedElevation {
    fn lookup(&self, _point: GeoPoint) -> Option<f64> {
        self.0
    }
}

fn brasilia_current_request() -> EtoRequest {
    EtoRequest {
        point: GeoPoint::new(-15.7939, -47.8828).unwrap(),
        start: d("2024-05-14"),
        end: d("2024-05-20"),
        today: d("2024-05-20"),
        mode_hint: None,
        preferred_provider: None,
    }
}

#[test]
fn brasilia_week_resolves_global_current_and_computes_eto() {
    let adapter = FixedAdapter::default()
        .with_daily_weather(ProviderId::OpenMeteoForecast, "2024-05-14", 7)
        .with_daily_weather(ProviderId::NasaPower, "2024-05-14", 7);
    let response = run_pipeline(
        &brasilia_current_request(),
        &SourceCatalog::standard(),
        &adapter,
        &NoReference,
        &FixedElevation(Some(1172.0)),
        &PipelineConfig::default(),
    )
    .unwrap();

    assert_eq!(response.region, Region::Global);
    assert_eq!(response.mode, OperationMode::DashboardCurrent);
    assert_eq!(
        response.providers,
        vec![ProviderId::OpenMeteoForecast, ProviderId::NasaPower]
    );
    assert_eq!(response.records.len(), 7);
    for record in &response.records {
        assert_eq!(record.method, EtoMethod::PenmanMonteith);
        let eto = record.eto_mm_day.unwrap();
        assert!(eto > 0.0 && eto < 15.0, "eto {eto}");
        assert!(!record.out_of_range);
    }
    // Both providers contributed to every fused day.
    assert!(response
        .fusion
        .iter()
        .all(|f| f.contributing_providers.len() == 2));
}

#[test]
fn missing_elevation_falls_back_to_sea_level_with_warning() {
    let adapter =
        FixedAdapter::default().with_daily_weather(ProviderId::OpenMeteoForecast, "2024-05-14", 7);
    let response = run_pipeline(
        &brasilia_current_request(),
        &SourceCatalog::standard(),
        &adapter,
        &NoReference,
        &FixedElevation(None),
        &PipelineConfig::default(),
    )
    .unwrap();
    assert_eq!(response.elevation_m, 0.0);
    assert!(response.warnings.iter().any(|w| w.contains("elevation")));
}

#[test]
fn silent_provider_is_skipped_with_warning() {
    // NASA POWER is eligible but returns nothing.
    let adapter =
        FixedAdapter::default().with_daily_weather(ProviderId::OpenMeteoForecast, "2024-05-14", 7);
    let response = run_pipeline(
        &brasilia_current_request(),
        &SourceCatalog::standard(),
        &adapter,
        &NoReference,
        &FixedElevation(Some(500.0)),
        &PipelineConfig::default(),
    )
    .unwrap();
    assert_eq!(response.providers, vec![ProviderId::OpenMeteoForecast]);
    assert!(response
        .warnings
        .iter()
        .any(|w| w.contains("nasa_power") && w.contains("no data")));
}

#[test]
fn mislabelled_observation_is_dropped_with_warning() {
    let mut adapter =
        FixedAdapter::default().with_daily_weather(ProviderId::OpenMeteoForecast, "2024-05-14", 7);
    // A 45 °C reading labelled for a different provider slipped into the batch.
    adapter
        .data
        .get_mut(&ProviderId::OpenMeteoForecast)
        .unwrap()
        .push(DailyObservation::new(
            "nasa_power",
            d("2024-05-14"),
            Variable::TempMax,
            45.0,
        ));
    let response = run_pipeline(
        &brasilia_current_request(),
        &SourceCatalog::standard(),
        &adapter,
        &NoReference,
        &FixedElevation(Some(1172.0)),
        &PipelineConfig::default(),
    )
    .unwrap();

    let tmax = response
        .fusion
        .iter()
        .find(|f| f.variable == Variable::TempMax && f.date == d("2024-05-14"))
        .unwrap();
    assert_abs_diff_eq!(tmax.fused_value, 27.0, epsilon = 1e-9);
    assert!(response
        .warnings
        .iter()
        .any(|w| w.contains("open_meteo_forecast") && w.contains("another provider")));
}

#[test]
fn all_providers_silent_is_no_data_to_fuse() {
    let err = run_pipeline(
        &brasilia_current_request(),
        &SourceCatalog::standard(),
        &FixedAdapter::default(),
        &NoReference,
        &FixedElevation(Some(0.0)),
        &PipelineConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::Fusion(_)));
}

#[test]
fn hinted_mode_constraint_violation_fails_fast() {
    // Historical range reaching into the 30-day archive lag.
    let request = EtoRequest {
        point: GeoPoint::new(-15.7939, -47.8828).unwrap(),
        start: d("2024-05-01"),
        end: d("2024-05-10"),
        today: d("2024-05-20"),
        mode_hint: Some(OperationMode::HistoricalEmail),
        preferred_provider: None,
    };
    let err = run_pipeline(
        &request,
        &SourceCatalog::standard(),
        &FixedAdapter::default(),
        &NoReference,
        &FixedElevation(Some(0.0)),
        &PipelineConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::Request(_)));
}

#[test]
fn serialized_response_carries_provenance() {
    let adapter =
        FixedAdapter::default().with_daily_weather(ProviderId::OpenMeteoForecast, "2024-05-14", 7);
    let response = run_pipeline(
        &brasilia_current_request(),
        &SourceCatalog::standard(),
        &adapter,
        &NoReference,
        &FixedElevation(Some(100.0)),
        &PipelineConfig::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["region"], "global");
    assert_eq!(json["mode"], "dashboard_current");
    assert!(json["records"].as_array().unwrap().len() == 7);
}
