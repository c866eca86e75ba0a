//! The orchestration loop.

use std::collections::BTreeMap;

use tracing::{info, warn};

use etofuse_eto::compute_eto;
use etofuse_fusion::{fuse, FusionResult, ProviderSeries};
use etofuse_geo::classify;
use etofuse_qc::run_quality_control;
use etofuse_request::resolve_mode;
use etofuse_series::{DailyObservation, DailySeries, Variable};
use etofuse_sources::{ProviderId, SourceCatalog};

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::output::EtoResponse;
use crate::request::EtoRequest;
use crate::traits::{ElevationService, ProviderAdapter, ReferenceStore};

/// Groups one provider's observations into per-variable daily series over
/// the requested range. Observations outside the range, or carrying a
/// `provider_id` other than the provider being ingested, are dropped with a
/// warning; a later duplicate for the same day wins.
fn observations_to_series(
    provider: ProviderId,
    observations: Vec<DailyObservation>,
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
) -> Result<(BTreeMap<Variable, DailySeries>, Vec<String>), PipelineError> {
    let mut by_variable: BTreeMap<Variable, DailySeries> = BTreeMap::new();
    let mut mislabelled = 0usize;
    for obs in observations {
        if obs.provider_id != provider.as_str() {
            mislabelled += 1;
            continue;
        }
        if obs.date < start || obs.date > end {
            continue;
        }
        let series = match by_variable.entry(obs.variable) {
            std::collections::btree_map::Entry::Occupied(e) => e.into_mut(),
            std::collections::btree_map::Entry::Vacant(e) => {
                e.insert(DailySeries::empty(start, end)?)
            }
        };
        series.set(obs.date, Some(obs.value))?;
    }
    let mut warnings = Vec::new();
    if mislabelled > 0 {
        warnings.push(format!(
            "{mislabelled} observation(s) labelled for another provider dropped"
        ));
    }
    Ok((by_variable, warnings))
}

/// Turns fusion results back into dense per-variable series over the
/// requested range, for the ETo calculator.
fn fused_series_map(
    results: &[FusionResult],
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
) -> Result<BTreeMap<Variable, DailySeries>, PipelineError> {
    let mut map: BTreeMap<Variable, DailySeries> = BTreeMap::new();
    for r in results {
        if r.date < start || r.date > end {
            continue;
        }
        let series = match map.entry(r.variable) {
            std::collections::btree_map::Entry::Occupied(e) => e.into_mut(),
            std::collections::btree_map::Entry::Vacant(e) => {
                e.insert(DailySeries::empty(start, end)?)
            }
        };
        series.set(r.date, Some(r.fused_value))?;
    }
    Ok(map)
}

/// Runs the full pipeline for one request.
///
/// Pure given its inputs: all I/O happens behind the injected traits, and
/// the clock is `request.today`.
pub fn run_pipeline(
    request: &EtoRequest,
    catalog: &SourceCatalog,
    adapter: &dyn ProviderAdapter,
    references: &dyn ReferenceStore,
    elevation: &dyn ElevationService,
    config: &PipelineConfig,
) -> Result<EtoResponse, PipelineError> {
    let region = classify(request.point);
    let mode = resolve_mode(request.mode_hint, request.start, request.end, request.today)?;
    let availability = catalog.available_sources(
        region,
        mode,
        request.start,
        request.end,
        request.today,
        request.preferred_provider,
    )?;
    info!(%region, %mode, providers = availability.ranked.len(), "request resolved");

    let mut warnings = Vec::new();
    let latitude = request.point.lat();

    let mut ranked_series = Vec::new();
    for provider in &availability.ranked {
        let observations = adapter.fetch(*provider, request.point, request.start, request.end);
        if observations.is_empty() {
            warnings.push(format!("{provider}: no data returned"));
            continue;
        }
        let (raw, obs_warnings) =
            observations_to_series(*provider, observations, request.start, request.end)?;
        warnings.extend(obs_warnings.into_iter().map(|w| format!("{provider}: {w}")));
        let mut cleaned = BTreeMap::new();
        for (variable, series) in raw {
            let outcome = run_quality_control(series, variable, latitude, &config.qc)?;
            warnings.extend(outcome.warnings.into_iter().map(|w| format!("{provider}: {w}")));
            if outcome.series.present_count() > 0 {
                cleaned.insert(variable, outcome.series);
            }
        }
        if !cleaned.is_empty() {
            ranked_series.push(ProviderSeries { provider: *provider, series: cleaned });
        }
    }

    let reference = references.lookup(request.point, config.reference_max_distance_km);
    let fusion = fuse(&ranked_series, reference.as_ref())?;

    let elevation_m = match elevation.lookup(request.point) {
        Some(m) => m,
        None => {
            warn!(point = %request.point, "elevation unavailable, assuming sea level");
            warnings.push(
                "elevation unavailable, assuming 0 m; pressure-dependent terms lose accuracy"
                    .to_string(),
            );
            0.0
        }
    };

    let fused = fused_series_map(&fusion, request.start, request.end)?;
    let records = compute_eto(&fused, latitude, elevation_m)?;

    let providers = ranked_series.iter().map(|p| p.provider).collect();
    Ok(EtoResponse {
        region,
        mode,
        providers,
        availability,
        elevation_m,
        fusion,
        records,
        warnings,
    })
}
