use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

use crate::validation::ValidationError;

/// Error body for lookups, malformed requests and server failures.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable error description.
    #[schema(example = "Hero not found")]
    pub error: String,
}

/// Error body for rejected field values. Carries every message that applies.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorsBody {
    #[schema(example = json!(["Description must be at least 20 characters long."]))]
    pub errors: Vec<String>,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Request-layer check failed (missing fields, stricter boundary rules).
    Validation(Vec<String>),
    /// Entity-layer field guard failed; nothing was written.
    Invalid(ValidationError),
    NotFound(String),
    /// A write referenced a hero or power that does not exist.
    Integrity(String),
    BadRequest(String),
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(vec![msg.into()])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsBody { errors })).into_response()
            }
            AppError::Invalid(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorsBody {
                    errors: vec![err.to_string()],
                }),
            )
                .into_response(),
            AppError::NotFound(error) | AppError::Integrity(error) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { error })).into_response()
            }
            AppError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response()
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "An unexpected error occurred".into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Invalid(err)
    }
}
