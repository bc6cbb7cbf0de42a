//! Article models.

use serde::{Deserialize, Serialize};

/// An article as returned by the listing endpoint (no body).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ArticleSummary {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: String,
    pub votes: i64,
    pub comment_count: i64,
}

/// A single article with its body.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Article {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: String,
    pub votes: i64,
    pub comment_count: i64,
}

/// Query string accepted by `GET /api/articles`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

/// Request body for `PATCH /api/articles/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchArticleVotesRequest {
    /// Relative change applied to the current vote count
    #[serde(default)]
    pub inc_votes: Option<i64>,
}
