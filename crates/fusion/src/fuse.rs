//! The per-run fusion loop.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Days, NaiveDate};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use etofuse_series::{DailySeries, Variable};
use etofuse_sources::ProviderId;

use crate::error::FusionError;
use crate::filter::KalmanFilterState;
use crate::reference::FusionReference;

/// Fixed conservative noise for the simple strategy.
const SIMPLE_PROCESS_NOISE: f64 = 0.05;
const SIMPLE_MEASUREMENT_NOISE: f64 = 1.0;

/// Process noise in the adaptive strategy, as a fraction of the historical
/// daily variance.
const ADAPTIVE_PROCESS_FACTOR: f64 = 0.05;

/// Confidence is capped below 1 so the noise inflation stays finite.
const MAX_CONFIDENCE: f64 = 0.99;

/// One provider's quality-controlled series, one [`DailySeries`] per
/// variable it delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSeries {
    pub provider: ProviderId,
    pub series: BTreeMap<Variable, DailySeries>,
}

/// Which fusion strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Simple,
    Adaptive,
}

/// One fused value: one variable, one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FusionResult {
    pub date: NaiveDate,
    pub variable: Variable,
    pub fused_value: f64,
    /// Post-update error covariance, the propagated uncertainty.
    pub error_covariance: f64,
    /// Providers whose measurements entered this day, in application order.
    pub contributing_providers: Vec<ProviderId>,
    pub strategy: Strategy,
}

/// Fuses ranked provider series into one estimate per variable per day.
///
/// `ranked` must be in catalog priority order, most preferred first; each
/// day's measurements are applied as successive Kalman updates in that
/// order. A [`FusionReference`] switches variables it covers to the
/// adaptive strategy. Days with no measurement for a variable produce no
/// result. Fails only when the entire run holds zero measurements.
pub fn fuse(
    ranked: &[ProviderSeries],
    reference: Option<&FusionReference>,
) -> Result<Vec<FusionResult>, FusionError> {
    let variables: Vec<Variable> = ranked
        .iter()
        .flat_map(|p| p.series.keys().copied())
        .collect::<BTreeSet<Variable>>()
        .into_iter()
        .collect();

    // Ordered collect keeps the output deterministic across thread counts.
    let per_variable: Vec<Vec<FusionResult>> = variables
        .par_iter()
        .map(|variable| fuse_variable(*variable, ranked, reference))
        .collect();

    let results: Vec<FusionResult> = per_variable.into_iter().flatten().collect();
    if results.is_empty() {
        return Err(FusionError::NoDataToFuse);
    }
    debug!(
        variables = variables.len(),
        results = results.len(),
        "fusion run complete"
    );
    Ok(results)
}

fn fuse_variable(
    variable: Variable,
    ranked: &[ProviderSeries],
    reference: Option<&FusionReference>,
) -> Vec<FusionResult> {
    let spans: Vec<(NaiveDate, NaiveDate)> = ranked
        .iter()
        .filter_map(|p| p.series.get(&variable))
        .map(|s| (s.start(), s.end()))
        .collect();
    let Some(start) = spans.iter().map(|(s, _)| *s).min() else {
        return Vec::new();
    };
    let end = spans.iter().map(|(_, e)| *e).max().unwrap_or(start);

    let normals = reference.and_then(|r| r.normals.get(&variable).map(|n| (n, r.confidence)));
    let (mut filter, strategy) = match normals {
        Some((normals, confidence)) => {
            let (prior_mean, daily_std) = normals.for_date(start);
            let variance = daily_std * daily_std;
            let inflation = 1.0 / (1.0 - confidence.clamp(0.0, MAX_CONFIDENCE));
            (
                KalmanFilterState::with_prior(
                    prior_mean,
                    variance,
                    variance * ADAPTIVE_PROCESS_FACTOR,
                    variance * inflation,
                ),
                Strategy::Adaptive,
            )
        }
        None => (
            KalmanFilterState::unseeded(SIMPLE_PROCESS_NOISE, SIMPLE_MEASUREMENT_NOISE),
            Strategy::Simple,
        ),
    };

    let days = (end - start).num_days() as u64 + 1;
    let mut results = Vec::new();
    for offset in 0..days {
        let date = start + Days::new(offset);
        let measurements: Vec<(ProviderId, f64)> = ranked
            .iter()
            .filter_map(|p| {
                p.series
                    .get(&variable)
                    .and_then(|s| s.get(date))
                    .map(|v| (p.provider, v))
            })
            .collect();
        if measurements.is_empty() {
            continue;
        }
        filter.predict();
        let mut fused = 0.0;
        for (_, value) in &measurements {
            fused = filter.update(*value);
        }
        results.push(FusionResult {
            date,
            variable,
            fused_value: fused,
            error_covariance: filter.error_covariance(),
            contributing_providers: measurements.into_iter().map(|(p, _)| p).collect(),
            strategy,
        });
    }
    results
}
