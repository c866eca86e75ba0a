//! The availability resolver.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use etofuse_geo::Region;
use etofuse_request::OperationMode;
use etofuse_series::Variable;

use crate::catalog::{ProviderDescriptor, SourceCatalog};
use crate::error::AvailabilityError;
use crate::provider::ProviderId;

/// Why one provider was excluded from a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderRejection {
    pub provider: ProviderId,
    pub reason: String,
}

/// Outcome of availability resolution: at least one eligible provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityReport {
    /// Eligible providers, most preferred first.
    pub ranked: Vec<ProviderId>,
    /// Variables each eligible provider delivers for this region.
    pub variables: BTreeMap<ProviderId, Vec<Variable>>,
    /// Providers excluded from this request, with reasons.
    pub rejections: Vec<ProviderRejection>,
}

fn eligibility(
    desc: &ProviderDescriptor,
    region: Region,
    mode: OperationMode,
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Result<(), String> {
    if !desc.covers(region) {
        return Err(format!("does not cover {region}"));
    }
    let Some((lo, hi)) = desc.window(mode, today) else {
        return Err(format!("not offered in {mode}"));
    };
    if start < lo || end > hi {
        return Err(format!(
            "window [{lo}, {hi}] does not contain [{start}, {end}]"
        ));
    }
    Ok(())
}

impl SourceCatalog {
    /// Resolves the providers able to serve `[start, end]` for this region
    /// and mode.
    ///
    /// A caller-preferred provider is validated first and leads the ranking
    /// when eligible; otherwise its rejection is recorded and automatic
    /// priority ranking applies alone. An empty eligible set is
    /// [`AvailabilityError::NoProviderAvailable`], carrying every provider's
    /// rejection reason.
    pub fn available_sources(
        &self,
        region: Region,
        mode: OperationMode,
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
        preferred: Option<ProviderId>,
    ) -> Result<AvailabilityReport, AvailabilityError> {
        let mut eligible: Vec<&ProviderDescriptor> = Vec::new();
        let mut rejections = Vec::new();
        for desc in self.providers() {
            match eligibility(desc, region, mode, start, end, today) {
                Ok(()) => eligible.push(desc),
                Err(reason) => rejections.push(ProviderRejection { provider: desc.id, reason }),
            }
        }
        if eligible.is_empty() {
            return Err(AvailabilityError::NoProviderAvailable {
                region,
                mode,
                start,
                end,
                rejections,
            });
        }

        // usize::MAX sorts unranked-but-covered providers last
        eligible.sort_by_key(|d| d.priority(region).unwrap_or(usize::MAX));
        let variables: BTreeMap<ProviderId, Vec<Variable>> = eligible
            .iter()
            .map(|d| (d.id, d.variables(region).to_vec()))
            .collect();
        let mut ranked: Vec<ProviderId> = eligible.iter().map(|d| d.id).collect();
        if let Some(pref) = preferred {
            if let Some(pos) = ranked.iter().position(|p| *p == pref) {
                let lead = ranked.remove(pos);
                ranked.insert(0, lead);
            }
        }
        debug!(%region, %mode, ?ranked, "resolved available sources");
        Ok(AvailabilityReport { ranked, variables, rejections })
    }
}
