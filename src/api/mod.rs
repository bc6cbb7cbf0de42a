//! REST API module.
//!
//! Contains all API routes and handlers. Errors from every handler go through
//! `AppError`'s `IntoResponse` impl.

mod articles;
mod comments;
mod endpoints;
mod topics;
mod users;

pub use articles::*;
pub use comments::*;
pub use endpoints::*;
pub use topics::*;
pub use users::*;

use crate::errors::AppError;

/// Handler result type.
pub type ApiResult<T> = Result<T, AppError>;

/// Parse a numeric path id, rejecting anything else before it reaches the database.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| {
        tracing::debug!("Rejected non-numeric id: {:?}", raw);
        AppError::bad_request()
    })
}

/// Fallback for unmatched routes and unsupported methods.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
