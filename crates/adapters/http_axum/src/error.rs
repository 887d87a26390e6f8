//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use eggsorter_domain::error::{EggSorterError, NotFoundError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Status code and client-facing message for an error.
///
/// Data source failures are logged and hidden behind a generic message.
pub(crate) fn classify(err: &EggSorterError) -> (StatusCode, String) {
    match err {
        EggSorterError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        EggSorterError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        EggSorterError::DataSource(err) => {
            tracing::error!(error = %err, "data source error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

/// Maps [`EggSorterError`] to a JSON response with appropriate status code.
pub struct ApiError(EggSorterError);

impl From<EggSorterError> for ApiError {
    fn from(err: EggSorterError) -> Self {
        Self(err)
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = classify(&self.0);
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
