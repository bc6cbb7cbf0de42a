//! User API endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use super::ApiResult;
use crate::models::User;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// GET /api/users - List all users.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UsersResponse>> {
    let users = state.repo.list_users().await?;
    Ok(Json(UsersResponse { users }))
}
