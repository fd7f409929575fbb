use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid parameter `{field}`: {message}")]
    InvalidParameter { field: String, message: String },

    #[error("No feasible route: {0}")]
    NoFeasibleRoute(String),

    #[error("Plan not found: {0}")]
    PlanNotFound(i64),

    #[error("Weather service unavailable: {0}")]
    WeatherUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        AppError::InvalidParameter {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, field) = match self {
            AppError::InvalidParameter {
                ref field,
                ref message,
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("{}: {}", field, message),
                Some(field.clone()),
            ),
            AppError::NoFeasibleRoute(ref e) => {
                tracing::error!("No feasible route: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Route planning produced no feasible candidate".to_string(),
                    None,
                )
            }
            AppError::PlanNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Plan {} not found", id),
                None,
            ),
            AppError::WeatherUnavailable(ref e) => {
                tracing::warn!("Weather service error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Weather service unavailable".to_string(),
                    None,
                )
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal database error".to_string(),
                    None,
                )
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        });
        if let Some(field) = field {
            body["field"] = json!(field);
        }

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
