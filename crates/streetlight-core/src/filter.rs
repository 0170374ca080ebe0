//! Pure bounding-box selection over a feature collection.

use geojson::{Feature, FeatureCollection, Value};

use crate::error::Result;
use crate::models::{BoundingBox, PointsSelection};

/// Select the features whose point coordinates fall inside `bbox`.
///
/// Bounds are inclusive on all four edges. Features that are not Point
/// geometries, or whose coordinate array is shorter than two values, are
/// silently skipped; the source dataset is allowed to be heterogeneous.
/// Output preserves the input's relative order.
///
/// A mis-ordered box (`south > north` or `west > east`) is a caller error
/// and yields [`StreetlightError::InvalidBounds`], never an empty result.
///
/// [`StreetlightError::InvalidBounds`]: crate::error::StreetlightError::InvalidBounds
pub fn filter_points(collection: &FeatureCollection, bbox: &BoundingBox) -> Result<PointsSelection> {
    bbox.validate()?;

    // Linear scan; the dataset is small and static.
    let features: Vec<Feature> = collection
        .features
        .iter()
        .filter(|feature| point_in_box(feature, bbox))
        .cloned()
        .collect();

    Ok(PointsSelection::new(features, *bbox))
}

fn point_in_box(feature: &Feature, bbox: &BoundingBox) -> bool {
    let Some(geometry) = &feature.geometry else {
        return false;
    };
    let Value::Point(coordinates) = &geometry.value else {
        return false;
    };
    if coordinates.len() < 2 {
        return false;
    }
    // GeoJSON positions are [longitude, latitude]
    bbox.contains(coordinates[0], coordinates[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StreetlightError;
    use geojson::{Geometry, JsonObject};
    use serde_json::json;

    fn point_feature(lon: f64, lat: f64, name: &str) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), json!(name));
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![lon, lat]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }

    fn collection(features: Vec<Feature>) -> FeatureCollection {
        FeatureCollection { bbox: None, features, foreign_members: None }
    }

    fn names(selection: &PointsSelection) -> Vec<String> {
        selection
            .features
            .iter()
            .map(|f| f.property("name").and_then(|v| v.as_str()).unwrap().to_string())
            .collect()
    }

    #[test]
    fn selects_points_inside_the_box() {
        let fc = collection(vec![
            point_feature(77.59, 12.97, "inside"),
            point_feature(80.0, 20.0, "outside"),
        ]);
        let bbox = BoundingBox::new(13.0, 12.0, 78.0, 77.0);

        let selection = filter_points(&fc, &bbox).unwrap();

        assert_eq!(selection.count, 1);
        assert_eq!(names(&selection), vec!["inside"]);
        assert_eq!(selection.bounding_box, bbox);
    }

    #[test]
    fn edges_are_inclusive() {
        let bbox = BoundingBox::new(13.0, 12.0, 78.0, 77.0);
        let fc = collection(vec![
            point_feature(77.0, 12.5, "west-edge"),
            point_feature(78.0, 12.5, "east-edge"),
            point_feature(77.5, 12.0, "south-edge"),
            point_feature(77.5, 13.0, "north-edge"),
            point_feature(77.0, 12.0, "southwest-corner"),
        ]);

        let selection = filter_points(&fc, &bbox).unwrap();

        assert_eq!(selection.count, 5);
    }

    #[test]
    fn just_outside_an_edge_is_excluded() {
        let bbox = BoundingBox::new(13.0, 12.0, 78.0, 77.0);
        let fc = collection(vec![
            point_feature(76.9999, 12.5, "west-of-box"),
            point_feature(77.5, 13.0001, "north-of-box"),
        ]);

        let selection = filter_points(&fc, &bbox).unwrap();

        assert_eq!(selection.count, 0);
    }

    #[test]
    fn preserves_input_order() {
        let bbox = BoundingBox::new(90.0, -90.0, 180.0, -180.0);
        let fc = collection(vec![
            point_feature(10.0, 10.0, "a"),
            point_feature(20.0, 20.0, "b"),
            point_feature(10.0, 10.0, "a"),
            point_feature(30.0, 30.0, "c"),
        ]);

        let selection = filter_points(&fc, &bbox).unwrap();

        // Duplicates kept, order preserved
        assert_eq!(names(&selection), vec!["a", "b", "a", "c"]);
    }

    #[test]
    fn non_point_geometries_are_skipped() {
        let line = Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(vec![
                vec![77.0, 12.0],
                vec![78.0, 13.0],
            ]))),
            id: None,
            properties: None,
            foreign_members: None,
        };
        let no_geometry = Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: None,
            foreign_members: None,
        };
        let fc = collection(vec![line, no_geometry, point_feature(77.5, 12.5, "point")]);
        let bbox = BoundingBox::new(13.0, 12.0, 78.0, 77.0);

        let selection = filter_points(&fc, &bbox).unwrap();

        assert_eq!(names(&selection), vec!["point"]);
    }

    #[test]
    fn short_coordinate_arrays_are_skipped() {
        let stub = Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![77.5]))),
            id: None,
            properties: None,
            foreign_members: None,
        };
        let fc = collection(vec![stub]);
        let bbox = BoundingBox::new(13.0, 12.0, 78.0, 77.0);

        let selection = filter_points(&fc, &bbox).unwrap();

        assert_eq!(selection.count, 0);
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        let fc = collection(vec![]);
        let bbox = BoundingBox::new(13.0, 12.0, 78.0, 77.0);

        let selection = filter_points(&fc, &bbox).unwrap();

        assert_eq!(selection.count, 0);
        assert!(selection.features.is_empty());
    }

    #[test]
    fn misordered_bounds_fail_even_on_empty_data() {
        let fc = collection(vec![]);
        let bbox = BoundingBox::new(5.0, 10.0, 78.0, 77.0);

        let result = filter_points(&fc, &bbox);

        assert!(matches!(result, Err(StreetlightError::InvalidBounds { .. })));
    }
}
