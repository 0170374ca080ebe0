use serde::Deserialize;
use streetlight_core::BoundingBox;

/// Bounding-box query parameters; all four are required.
#[derive(Debug, Deserialize)]
pub struct PointsQuery {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl PointsQuery {
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.north, self.south, self.east, self.west)
    }
}

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}
