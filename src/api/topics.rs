//! Topic API endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use super::ApiResult;
use crate::models::Topic;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

/// GET /api/topics - List all topics.
pub async fn list_topics(State(state): State<AppState>) -> ApiResult<Json<TopicsResponse>> {
    let topics = state.repo.list_topics().await?;
    Ok(Json(TopicsResponse { topics }))
}
