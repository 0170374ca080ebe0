use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use streetlight_core::{filter_points, PointsSelection};

use crate::dto::PointsQuery;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_points(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PointsQuery>,
) -> Result<Json<PointsSelection>, ApiError> {
    check_coordinate_ranges(&query)?;

    let selection = filter_points(state.store.snapshot(), &query.bounding_box())?;

    tracing::info!(
        count = selection.count,
        north = query.north,
        south = query.south,
        east = query.east,
        west = query.west,
        "Bounding-box query served"
    );

    Ok(Json(selection))
}

/// Boundary-layer range check; runs before the filter sees the box.
fn check_coordinate_ranges(query: &PointsQuery) -> Result<(), ApiError> {
    for (name, value) in [("north", query.north), ("south", query.south)] {
        if !(-90.0..=90.0).contains(&value) {
            return Err(ApiError::bad_request(format!(
                "{} must be a latitude between -90 and 90, got {}",
                name, value
            )));
        }
    }
    for (name, value) in [("east", query.east), ("west", query.west)] {
        if !(-180.0..=180.0).contains(&value) {
            return Err(ApiError::bad_request(format!(
                "{} must be a longitude between -180 and 180, got {}",
                name, value
            )));
        }
    }
    Ok(())
}
