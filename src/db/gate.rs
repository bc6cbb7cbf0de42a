//! Existence checks and the coordinated read that pairs them with a primary query.

use std::future::Future;

use crate::errors::AppError;

/// A reference to a row whose existence can be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKey<'a> {
    Topic(&'a str),
    Article(i64),
    Comment(i64),
}

impl EntityKey<'_> {
    /// Fixed lookup statement for each entity kind.
    pub(crate) fn lookup_sql(&self) -> &'static str {
        match self {
            EntityKey::Topic(_) => "SELECT 1 FROM topics WHERE slug = ? LIMIT 1",
            EntityKey::Article(_) => "SELECT 1 FROM articles WHERE article_id = ? LIMIT 1",
            EntityKey::Comment(_) => "SELECT 1 FROM comments WHERE comment_id = ? LIMIT 1",
        }
    }

    pub fn not_found(&self) -> AppError {
        let message = match self {
            EntityKey::Topic(slug) => format!("Nothing found for topic: {}", slug),
            EntityKey::Article(id) => format!("Nothing found for article_id {}", id),
            EntityKey::Comment(id) => format!("Nothing found for comment_id {}", id),
        };
        AppError::NotFound(message)
    }
}

/// Run an existence gate and a primary operation concurrently.
///
/// A failed gate wins over whatever the primary operation produced, including
/// success. When the gate passes the primary result is returned as-is, so an
/// empty listing is still a success.
pub async fn gated<T, G, P>(gate: G, primary: P) -> Result<T, AppError>
where
    G: Future<Output = Result<(), AppError>>,
    P: Future<Output = Result<T, AppError>>,
{
    let (gate_result, primary_result) = tokio::join!(gate, primary);
    gate_result?;
    primary_result
}
