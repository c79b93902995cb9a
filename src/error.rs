//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::logic::classifier::ClassifierError;
use crate::logic::pipeline::PipelineError;
use crate::logic::recommend::CatalogError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Validation errors
    ValidationError(String),

    // Classifier errors - fatal for the current request
    ClassifierFailure(String),

    // Catalog errors - contract violations, should never fire after startup
    CatalogFailure(String),

    // Generic errors
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ValidationError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.as_str()),
            AppError::ClassifierFailure(msg) => {
                tracing::error!("Classifier failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Risk analysis failed")
            }
            AppError::CatalogFailure(msg) => {
                tracing::error!("Catalog lookup failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Classifier(e) => AppError::ClassifierFailure(e.to_string()),
            PipelineError::Catalog(e) => AppError::CatalogFailure(e.to_string()),
        }
    }
}

impl From<ClassifierError> for AppError {
    fn from(err: ClassifierError) -> Self {
        AppError::ClassifierFailure(err.to_string())
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::CatalogFailure(err.to_string())
    }
}
