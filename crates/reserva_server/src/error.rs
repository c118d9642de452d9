//! HTTP error mapping for the reservation API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use log::error;
use reserva_core::RepoError;
use serde::Serialize;

/// JSON error body.
///
/// The conflicting range rides along on date conflicts so clients can
/// tell a booking collision apart from a generic failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            start_date: None,
            end_date: None,
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// No reservation for the requested id.
    NotFound(String),
    /// Malformed or invalid request payload.
    BadRequest(String),
    /// The requested stay collides with an existing booking.
    DatesNotAvailable { start: NaiveDate, end: NaiveDate },
    /// Storage or transaction failure.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, ErrorBody::new(message)),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, ErrorBody::new(message)),
            AppError::DatesNotAvailable { start, end } => (
                StatusCode::CONFLICT,
                ErrorBody {
                    error: format!("dates not available between {start} and {end}"),
                    start_date: Some(start),
                    end_date: Some(end),
                },
            ),
            AppError::Internal(message) => {
                error!("event=request module=http status=error error={message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => AppError::NotFound(format!("reservation not found: {id}")),
            RepoError::Validation(err) => AppError::BadRequest(err.to_string()),
            RepoError::DatesNotAvailable { start, end } => {
                AppError::DatesNotAvailable { start, end }
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}
