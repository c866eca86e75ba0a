//! Region classification with fixed bounding boxes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::point::GeoPoint;

/// Axis-aligned bounding box in decimal degrees (west, south, east, north).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Western longitude bound.
    pub west: f64,
    /// Southern latitude bound.
    pub south: f64,
    /// Eastern longitude bound.
    pub east: f64,
    /// Northern latitude bound.
    pub north: f64,
}

impl BoundingBox {
    /// Whether the point lies inside this box (all edges inclusive).
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.west..=self.east).contains(&point.lon())
            && (self.south..=self.north).contains(&point.lat())
    }
}

/// Continental USA (NWS coverage): west coast to east coast, southern
/// Florida to the Canadian border. Alaska, Hawaii and territories excluded.
pub const USA_BBOX: BoundingBox = BoundingBox {
    west: -125.0,
    south: 24.0,
    east: -66.0,
    north: 49.0,
};

/// Nordic region (MET Norway 1 km post-processed model): Denmark through
/// northern Norway, west Denmark to the Finnish/Baltic east.
pub const NORDIC_BBOX: BoundingBox = BoundingBox {
    west: 4.0,
    south: 54.0,
    east: 31.0,
    north: 71.5,
};

/// Geographic region tag driving provider eligibility and ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Continental USA: NWS providers become eligible.
    Usa,
    /// Nordic countries: MET Norway serves its full high-quality variable set.
    Nordic,
    /// Everywhere else: global providers only.
    Global,
}

impl Region {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Usa => "usa",
            Region::Nordic => "nordic",
            Region::Global => "global",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a coordinate into exactly one region.
///
/// Precedence is usa > nordic > global; the boxes do not overlap today, but
/// the ordering is load-bearing if they ever do.
pub fn classify(point: GeoPoint) -> Region {
    let region = if USA_BBOX.contains(point) {
        Region::Usa
    } else if NORDIC_BBOX.contains(point) {
        Region::Nordic
    } else {
        Region::Global
    };
    debug!(%point, %region, "classified coordinate");
    region
}
