use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use streetlight_core::StreetlightError;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into(), details: None }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_GATEWAY, message: message.into(), details: None }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: message.into(), details: None }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.message, details: self.details };
        (self.status, Json(body)).into_response()
    }
}

impl From<StreetlightError> for ApiError {
    fn from(err: StreetlightError) -> Self {
        match &err {
            // A mis-ordered box is a caller error, not "zero results"
            StreetlightError::InvalidBounds { .. } => Self::bad_request(err.to_string()),
            StreetlightError::MissingCredential { .. } => {
                Self::internal("Chat provider not configured").with_details(err.to_string())
            }
            StreetlightError::Provider(_) => Self::bad_gateway(err.to_string()),
            StreetlightError::DatasetLoad(_) => {
                Self::internal("Internal error").with_details(err.to_string())
            }
        }
    }
}
