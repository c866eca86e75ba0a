use anyhow::{bail, Result};
use serde::Serialize;

use etofuse_geo::{classify, GeoPoint, Region};
use etofuse_request::{resolve_mode, OperationMode};
use etofuse_sources::{AvailabilityReport, SourceCatalog};

use crate::cli::SourcesArgs;

#[derive(Serialize)]
struct SourcesOutput {
    region: Region,
    mode: OperationMode,
    availability: AvailabilityReport,
}

fn parse_mode(s: &str) -> Result<OperationMode> {
    Ok(match s {
        "historical_email" => OperationMode::HistoricalEmail,
        "dashboard_current" => OperationMode::DashboardCurrent,
        "dashboard_forecast" => OperationMode::DashboardForecast,
        other => bail!(
            "unknown mode {other:?}; expected historical_email, dashboard_current, \
             or dashboard_forecast"
        ),
    })
}

pub fn run(args: SourcesArgs) -> Result<()> {
    let point = GeoPoint::new(args.lat, args.lon)?;
    let region = classify(point);
    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let hint = args.mode.as_deref().map(parse_mode).transpose()?;
    let mode = resolve_mode(hint, args.start, args.end, today)?;
    let availability = SourceCatalog::standard().available_sources(
        region, mode, args.start, args.end, today, None,
    )?;

    let output = SourcesOutput { region, mode, availability };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
