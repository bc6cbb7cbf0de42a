//! Database repository for reads and writes.
//!
//! Every data value is passed as a bound parameter.

use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;

use super::{ArticleQuery, EntityKey};
use crate::errors::AppError;
use crate::models::{Article, ArticleSummary, Comment, NewComment, Topic, User};

const ARTICLE_DETAIL_SQL: &str = r#"SELECT articles.article_id, articles.title, articles.topic,
       articles.author, articles.body, articles.created_at, articles.votes,
       COUNT(comments.comment_id) AS comment_count
FROM articles
LEFT JOIN comments ON comments.article_id = articles.article_id
WHERE articles.article_id = ?
GROUP BY articles.article_id"#;

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== EXISTENCE CHECKS ====================

    /// Succeed if the referenced row exists, otherwise fail with NotFound.
    pub async fn check_exists(&self, entity: EntityKey<'_>) -> Result<(), AppError> {
        let query = sqlx::query(entity.lookup_sql());
        let query = match entity {
            EntityKey::Topic(slug) => query.bind(slug),
            EntityKey::Article(id) | EntityKey::Comment(id) => query.bind(id),
        };

        match query.fetch_optional(&self.pool).await? {
            Some(_) => Ok(()),
            None => Err(entity.not_found()),
        }
    }

    /// Topic gate for the listing filter. No filter means nothing to check.
    pub async fn check_topic_filter(&self, topic: Option<&str>) -> Result<(), AppError> {
        match topic.filter(|t| !t.is_empty()) {
            Some(slug) => self.check_exists(EntityKey::Topic(slug)).await,
            None => Ok(()),
        }
    }

    // ==================== TOPIC / USER OPERATIONS ====================

    /// List all topics.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, AppError> {
        let topics = sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics")
            .fetch_all(&self.pool)
            .await?;
        Ok(topics)
    }

    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT username, name, avatar_url FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    // ==================== ARTICLE OPERATIONS ====================

    /// List articles according to a validated query plan.
    pub async fn list_articles(&self, query: &ArticleQuery) -> Result<Vec<ArticleSummary>, AppError> {
        let mut builder = query.to_builder();
        let articles = builder
            .build_query_as::<ArticleSummary>()
            .fetch_all(&self.pool)
            .await?;
        Ok(articles)
    }

    /// Get a single article with its comment count.
    pub async fn get_article(&self, article_id: i64) -> Result<Article, AppError> {
        sqlx::query_as::<_, Article>(ARTICLE_DETAIL_SQL)
            .bind(article_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No article found for article_id: {}", article_id))
            })
    }

    /// Apply a relative change to an article's vote count.
    pub async fn increment_article_votes(
        &self,
        article_id: i64,
        inc_votes: i64,
    ) -> Result<Article, AppError> {
        let result = sqlx::query("UPDATE articles SET votes = votes + ? WHERE article_id = ?")
            .bind(inc_votes)
            .bind(article_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(EntityKey::Article(article_id).not_found());
        }

        self.get_article(article_id).await
    }

    // ==================== COMMENT OPERATIONS ====================

    /// List an article's comments, earliest first.
    pub async fn list_comments_for_article(&self, article_id: i64) -> Result<Vec<Comment>, AppError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"SELECT comment_id, article_id, author, body, votes, created_at
               FROM comments WHERE article_id = ?
               ORDER BY created_at ASC"#,
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }

    /// Insert a comment. Unknown article or author surfaces as a foreign-key violation.
    pub async fn create_comment(
        &self,
        article_id: i64,
        comment: &NewComment,
    ) -> Result<Comment, AppError> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let created = sqlx::query_as::<_, Comment>(
            r#"INSERT INTO comments (article_id, author, body, votes, created_at)
               VALUES (?, ?, ?, 0, ?)
               RETURNING comment_id, article_id, author, body, votes, created_at"#,
        )
        .bind(article_id)
        .bind(&comment.author)
        .bind(&comment.body)
        .bind(&now)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Delete a comment. Existence is checked separately by the caller.
    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM comments WHERE comment_id = ?")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
