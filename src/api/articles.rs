//! Article API endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Serialize;

use super::{parse_id, ApiResult};
use crate::db::{gated, ArticleQuery};
use crate::errors::AppError;
use crate::models::{Article, ArticleListParams, ArticleSummary, PatchArticleVotesRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleSummary>,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: Article,
}

/// GET /api/articles - List articles, optionally filtered by topic and sorted.
pub async fn list_articles(
    State(state): State<AppState>,
    payload: Result<Query<ArticleListParams>, QueryRejection>,
) -> ApiResult<Json<ArticlesResponse>> {
    let Query(params) = payload?;
    let query = ArticleQuery::build(
        params.topic.as_deref(),
        params.sort_by.as_deref(),
        params.order.as_deref(),
    )?;

    let articles = gated(
        state.repo.check_topic_filter(params.topic.as_deref()),
        state.repo.list_articles(&query),
    )
    .await?;

    Ok(Json(ArticlesResponse { articles }))
}

/// GET /api/articles/:id - Get a single article.
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> ApiResult<Json<ArticleResponse>> {
    let article_id = parse_id(&article_id)?;
    let article = state.repo.get_article(article_id).await?;
    Ok(Json(ArticleResponse { article }))
}

/// PATCH /api/articles/:id - Apply a relative vote change.
pub async fn patch_article_votes(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    payload: Result<Json<PatchArticleVotesRequest>, JsonRejection>,
) -> ApiResult<Json<ArticleResponse>> {
    let article_id = parse_id(&article_id)?;
    let Json(request) = payload?;
    let inc_votes = request.inc_votes.ok_or_else(AppError::bad_request)?;

    let article = state
        .repo
        .increment_article_votes(article_id, inc_votes)
        .await?;

    Ok(Json(ArticleResponse { article }))
}
