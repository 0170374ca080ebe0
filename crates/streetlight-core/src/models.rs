//! Domain types for bounding-box queries over the streetlight dataset.

use geojson::Feature;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StreetlightError};

/// A rectangle on the globe defined by its four bounds, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self { north, south, east, west }
    }

    /// Check the ordering invariants (`south <= north`, `west <= east`).
    ///
    /// A violated ordering is a caller error, distinct from a box that
    /// simply matches no features.
    pub fn validate(&self) -> Result<()> {
        if self.south > self.north {
            return Err(StreetlightError::InvalidBounds {
                reason: "south latitude must be less than or equal to north latitude".to_string(),
            });
        }
        if self.west > self.east {
            return Err(StreetlightError::InvalidBounds {
                reason: "west longitude must be less than or equal to east longitude".to_string(),
            });
        }
        Ok(())
    }

    /// Inclusive containment test on both axes.
    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        self.south <= latitude
            && latitude <= self.north
            && self.west <= longitude
            && longitude <= self.east
    }
}

/// The features selected by a bounding-box query, shaped as a
/// FeatureCollection payload with a count and an echo of the queried box.
#[derive(Debug, Serialize)]
pub struct PointsSelection {
    #[serde(rename = "type")]
    pub collection_type: &'static str,
    pub features: Vec<Feature>,
    pub count: usize,
    pub bounding_box: BoundingBox,
}

impl PointsSelection {
    pub fn new(features: Vec<Feature>, bounding_box: BoundingBox) -> Self {
        let count = features.len();
        Self { collection_type: "FeatureCollection", features, count, bounding_box }
    }
}
