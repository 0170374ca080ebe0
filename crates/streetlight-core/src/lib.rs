//! Core domain logic for the streetlight points service: the in-memory
//! feature store, the bounding-box filter, and the shared error taxonomy.

pub mod error;
pub mod filter;
pub mod models;
pub mod store;

pub use error::{Result, StreetlightError};
pub use filter::filter_points;
pub use models::{BoundingBox, PointsSelection};
pub use store::FeatureStore;
