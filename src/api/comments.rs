//! Comment API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::{parse_id, ApiResult};
use crate::db::{gated, EntityKey};
use crate::errors::AppError;
use crate::models::{Comment, CreateCommentRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

/// GET /api/articles/:id/comments - List an article's comments, earliest first.
pub async fn list_article_comments(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> ApiResult<Json<CommentsResponse>> {
    let article_id = parse_id(&article_id)?;

    let comments = gated(
        state.repo.check_exists(EntityKey::Article(article_id)),
        state.repo.list_comments_for_article(article_id),
    )
    .await?;

    Ok(Json(CommentsResponse { comments }))
}

/// POST /api/articles/:id/comments - Add a comment to an article.
pub async fn create_comment(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CommentResponse>)> {
    let article_id = parse_id(&article_id)?;
    let Json(request) = payload?;
    let new_comment = request.validate().ok_or_else(AppError::bad_request)?;

    let comment = state.repo.create_comment(article_id, &new_comment).await?;
    tracing::info!(
        "Created comment {} on article {}",
        comment.comment_id,
        article_id
    );

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// DELETE /api/comments/:id - Delete a comment.
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> ApiResult<StatusCode> {
    let comment_id = parse_id(&comment_id)?;

    // The gate has to see the row before the delete removes it.
    state
        .repo
        .check_exists(EntityKey::Comment(comment_id))
        .await?;
    state.repo.delete_comment(comment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
