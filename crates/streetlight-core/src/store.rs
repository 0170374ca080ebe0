//! In-memory snapshot of the streetlight point dataset.
//!
//! The store is loaded exactly once at process start, strictly before any
//! request is served, and is read-only afterwards. A missing or malformed
//! dataset degrades to an empty collection so the service can still answer
//! health and points queries; it never aborts startup.

use std::fs;
use std::path::Path;

use geojson::{FeatureCollection, GeoJson};

use crate::error::{Result, StreetlightError};

pub struct FeatureStore {
    collection: FeatureCollection,
    degraded: Option<String>,
}

impl FeatureStore {
    /// Load the dataset from a GeoJSON file.
    ///
    /// Never fails: load errors are absorbed here and substituted with an
    /// empty collection, observable through [`FeatureStore::is_degraded`]
    /// and the health endpoint's feature count.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read_collection(path) {
            Ok(collection) => {
                tracing::info!(
                    path = %path.display(),
                    features = collection.features.len(),
                    "Loaded streetlight dataset"
                );
                Self { collection, degraded: None }
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Dataset unavailable, serving an empty feature collection"
                );
                Self { collection: empty_collection(), degraded: Some(err.to_string()) }
            }
        }
    }

    /// A store with no features and no degraded flag.
    pub fn empty() -> Self {
        Self { collection: empty_collection(), degraded: None }
    }

    pub fn from_collection(collection: FeatureCollection) -> Self {
        Self { collection, degraded: None }
    }

    /// The current collection, for read-only use.
    pub fn snapshot(&self) -> &FeatureCollection {
        &self.collection
    }

    pub fn feature_count(&self) -> usize {
        self.collection.features.len()
    }

    /// Whether the last load substituted an empty collection.
    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    pub fn degraded_reason(&self) -> Option<&str> {
        self.degraded.as_deref()
    }

    fn read_collection(path: &Path) -> Result<FeatureCollection> {
        let content = fs::read_to_string(path)
            .map_err(|e| StreetlightError::DatasetLoad(format!("cannot read {}: {}", path.display(), e)))?;

        let geojson: GeoJson = content
            .parse()
            .map_err(|e| StreetlightError::DatasetLoad(format!("invalid GeoJSON: {}", e)))?;

        match geojson {
            GeoJson::FeatureCollection(fc) => Ok(fc),
            other => Err(StreetlightError::DatasetLoad(format!(
                "expected a FeatureCollection, found {:?}",
                variant_name(&other)
            ))),
        }
    }
}

fn empty_collection() -> FeatureCollection {
    FeatureCollection { bbox: None, features: Vec::new(), foreign_members: None }
}

fn variant_name(geojson: &GeoJson) -> &'static str {
    match geojson {
        GeoJson::Geometry(_) => "Geometry",
        GeoJson::Feature(_) => "Feature",
        GeoJson::FeatureCollection(_) => "FeatureCollection",
    }
}
