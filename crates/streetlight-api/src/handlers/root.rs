use axum::Json;

use crate::dto::ServiceDescriptor;

pub async fn service_descriptor() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor::default())
}
