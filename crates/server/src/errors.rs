use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use service::errors::ServiceError;

/// Adapter translating service outcomes into the JSON error envelopes.
///
/// Validation failures echo the per-field map unchanged; everything else is
/// collapsed into a generic 500 whose detail is logged server-side only.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ServiceError::Validation(fields) => {
                warn!(fields = ?fields, "submission rejected by validation");
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({
                        "success": false,
                        "message": "Validation failed",
                        "errors": fields,
                    })),
                )
                    .into_response()
            }
            ServiceError::Storage { kind, detail } => {
                error!(error_type = %kind, error = %detail, "submission failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({
                        "success": false,
                        "message": "An error occurred while processing your request. Please try again later.",
                        "error_type": kind,
                    })),
                )
                    .into_response()
            }
        }
    }
}
