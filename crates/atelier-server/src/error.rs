use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use atelier_cms::CmsError;
use atelier_core::ValidationError;

/// Error returned by API handlers, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// The content API failed. No retry is attempted.
    Upstream(String),
    Unprocessable(String),
}

impl ApiError {
    pub fn not_found(what: &str) -> Self {
        ApiError::NotFound(format!("{} not found", what))
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(m)
            | ApiError::NotFound(m)
            | ApiError::Upstream(m)
            | ApiError::Unprocessable(m) => m,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::MissingPhone | ValidationError::NotForSale(_) => {
                ApiError::Unprocessable(e.to_string())
            }
            other => ApiError::BadRequest(format!("Validation error: {}", other)),
        }
    }
}

impl From<CmsError> for ApiError {
    fn from(e: CmsError) -> Self {
        match e {
            CmsError::Validation(v) => v.into(),
            other => {
                tracing::error!("Content API error: {}", other);
                ApiError::Upstream("Failed to load content. Please try again later.".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}
