//! Error handling module for the NC News backend.
//!
//! Provides a closed set of error kinds with an explicit mapping to HTTP status codes.
//! Every handler returns `Result<_, AppError>` and the `IntoResponse` impl below is the
//! single place where errors become responses.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;

/// Client-facing messages that are part of the API contract.
pub mod messages {
    pub const BAD_REQUEST: &str = "Bad request";
    pub const NOT_FOUND: &str = "Not found";
    pub const ROUTE_NOT_FOUND: &str = "Route not found";
    pub const INTERNAL_ERROR: &str = "Internal Server Error";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Malformed input: non-numeric id, invalid sort/order, missing body field
    BadRequest(String),
    /// Well-formed reference to an entity that does not exist
    NotFound(String),
    /// Insert referenced a parent row that does not exist
    ForeignKeyViolation,
    /// No route matched the request
    RouteNotFound,
    /// Any other failure; the detail is logged, never sent to the client
    Internal(String),
}

impl AppError {
    /// Shorthand for the generic client validation failure.
    pub fn bad_request() -> Self {
        AppError::BadRequest(messages::BAD_REQUEST.to_string())
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ForeignKeyViolation => StatusCode::NOT_FOUND,
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client.
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::ForeignKeyViolation => messages::NOT_FOUND.to_string(),
            AppError::RouteNotFound => messages::ROUTE_NOT_FOUND.to_string(),
            AppError::Internal(_) => messages::INTERNAL_ERROR.to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Internal(detail) => write!(f, "{}: {}", self.status_code(), detail),
            _ => write!(f, "{}: {}", self.status_code(), self.message()),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation => return AppError::ForeignKeyViolation,
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    return AppError::bad_request()
                }
                _ => {}
            }
        }

        tracing::error!("Database error: {:?}", err);
        AppError::Internal(format!("Database error: {}", err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::bad_request()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        AppError::bad_request()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Internal(format!("JSON error: {}", err))
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub msg: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            msg: self.message(),
        };
        (status, Json(body)).into_response()
    }
}
