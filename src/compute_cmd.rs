use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use etofuse_eto::EtoMethod;
use etofuse_fusion::FusionReference;
use etofuse_geo::GeoPoint;
use etofuse_pipeline::{
    run_pipeline, ElevationService, EtoRequest, PipelineConfig, ProviderAdapter, ReferenceStore,
};
use etofuse_qc::QcConfig;
use etofuse_series::DailyObservation;
use etofuse_sources::{ProviderId, SourceCatalog};

use crate::cli::ComputeArgs;

/// A self-contained job: the request plus everything the pipeline would
/// otherwise fetch over the network.
#[derive(Deserialize)]
struct ComputeJob {
    request: EtoRequest,
    /// Site elevation; omitted falls back to sea level with a warning.
    #[serde(default)]
    elevation_m: Option<f64>,
    /// Pre-matched climate-normal reference, when one exists.
    #[serde(default)]
    reference: Option<FusionReference>,
    /// Raw observations keyed by provider.
    observations: BTreeMap<ProviderId, Vec<DailyObservation>>,
}

struct JobAdapter<'a>(&'a BTreeMap<ProviderId, Vec<DailyObservation>>);

impl ProviderAdapter for JobAdapter<'_> {
    fn fetch(
        &self,
        provider: ProviderId,
        _point: GeoPoint,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Vec<DailyObservation> {
        self.0.get(&provider).cloned().unwrap_or_default()
    }
}

struct JobReference(Option<FusionReference>);

impl ReferenceStore for JobReference {
    fn lookup(&self, _point: GeoPoint, _max_distance_km: f64) -> Option<FusionReference> {
        // The job file carries an already-matched reference.
        self.0.clone()
    }
}

struct JobElevation(Option<f64>);

impl ElevationService for JobElevation {
    fn lookup(&self, _point: GeoPoint) -> Option<f64> {
        self.0
    }
}

pub fn run(args: ComputeArgs) -> Result<()> {
    let file = File::open(&args.input)
        .with_context(|| format!("opening job file {}", args.input.display()))?;
    let job: ComputeJob =
        serde_json::from_reader(BufReader::new(file)).context("parsing job file")?;

    let mut qc = QcConfig::default();
    if let Some(ceiling) = args.outlier_ceiling {
        qc.outlier_warning_fraction = ceiling;
    }
    let config = PipelineConfig { qc, ..PipelineConfig::default() };

    let response = run_pipeline(
        &job.request,
        &SourceCatalog::standard(),
        &JobAdapter(&job.observations),
        &JobReference(job.reference),
        &JobElevation(job.elevation_m),
        &config,
    )?;

    let fallback_days = response
        .records
        .iter()
        .filter(|r| r.method == EtoMethod::Hargreaves)
        .count();
    let gap_days = response
        .records
        .iter()
        .filter(|r| r.method == EtoMethod::None)
        .count();
    info!(
        region = %response.region,
        mode = %response.mode,
        days = response.records.len(),
        fallback_days,
        gap_days,
        warnings = response.warnings.len(),
        "pipeline run complete"
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &response)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, &response)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn job_json() -> serde_json::Value {
        let start: NaiveDate = "2024-05-14".parse().unwrap();
        let mut observations = Vec::new();
        for offset in 0..7u64 {
            let date = (start + Days::new(offset)).to_string();
            for (variable, value) in [
                ("temp_max", 27.0),
                ("temp_min", 15.0),
                ("humidity_mean", 58.0),
                ("wind_speed_10m", 3.2),
                ("solar_radiation", 21.0),
            ] {
                observations.push(serde_json::json!({
                    "provider_id": "open_meteo_forecast",
                    "date": date,
                    "variable": variable,
                    "value": value,
                    "unit": "",
                }));
            }
        }
        serde_json::json!({
            "request": {
                "point": {"lat": -15.7939, "lon": -47.8828},
                "start": "2024-05-14",
                "end": "2024-05-20",
                "today": "2024-05-20"
            },
            "elevation_m": 1172.0,
            "observations": {"open_meteo_forecast": observations}
        })
    }

    #[test]
    fn job_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("job.json");
        let output = dir.path().join("response.json");
        std::fs::write(&input, serde_json::to_string(&job_json()).unwrap()).unwrap();

        run(ComputeArgs {
            input: input.clone(),
            output: Some(output.clone()),
            outlier_ceiling: None,
        })
        .unwrap();

        let response: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(response["region"], "global");
        assert_eq!(response["mode"], "dashboard_current");
        assert_eq!(response["records"].as_array().unwrap().len(), 7);
    }
}
