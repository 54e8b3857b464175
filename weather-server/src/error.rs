//! Request-boundary errors and their HTTP mapping.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use weather_core::WeatherError;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

pub const MSG_CONFIGURATION: &str = "Server configuration error";
pub const MSG_INVALID_CITY: &str = "Invalid city name";
pub const MSG_UNRESOLVED: &str =
    "Could not fetch weather data for that location. Please try a different city.";
pub const MSG_FETCH_FAILED: &str = "Error fetching weather data";

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Weather(#[from] WeatherError),

    /// Echoes its description to the caller.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            AppError::Validation(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
            AppError::Weather(e) => match e {
                WeatherError::Configuration => {
                    (StatusCode::INTERNAL_SERVER_ERROR, MSG_CONFIGURATION.into())
                }
                WeatherError::InvalidInput => (StatusCode::BAD_REQUEST, MSG_INVALID_CITY.into()),
                WeatherError::Unresolved(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNRESOLVED.into())
                }
                WeatherError::Transport(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, MSG_FETCH_FAILED.into())
                }
            },
            AppError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.clone()),
        }
    }
}

/// Malformed or incomplete JSON bodies are client errors with a JSON detail.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();

        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
