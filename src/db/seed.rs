//! Dataset seeding.
//!
//! Replaces the contents of every table in a single transaction. Article and
//! comment ids restart at 1 and follow the order of the seed file.

use std::path::Path;

use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::SeedData;

/// Load a seed dataset from a JSON file.
pub async fn load_seed_file(path: &Path) -> Result<SeedData, AppError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::Internal(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Wipe all tables and insert the given dataset.
pub async fn seed(pool: &SqlitePool, data: &SeedData) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        DELETE FROM comments;
        DELETE FROM articles;
        DELETE FROM users;
        DELETE FROM topics;
        DELETE FROM sqlite_sequence WHERE name IN ('articles', 'comments');
        "#,
    )
    .execute(&mut *tx)
    .await?;

    for topic in &data.topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES (?, ?)")
            .bind(&topic.slug)
            .bind(&topic.description)
            .execute(&mut *tx)
            .await?;
    }

    for user in &data.users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES (?, ?, ?)")
            .bind(&user.username)
            .bind(&user.name)
            .bind(&user.avatar_url)
            .execute(&mut *tx)
            .await?;
    }

    for article in &data.articles {
        sqlx::query(
            "INSERT INTO articles (title, topic, author, body, created_at, votes) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&article.title)
        .bind(&article.topic)
        .bind(&article.author)
        .bind(&article.body)
        .bind(&article.created_at)
        .bind(article.votes)
        .execute(&mut *tx)
        .await?;
    }

    for comment in &data.comments {
        sqlx::query(
            "INSERT INTO comments (article_id, author, body, votes, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(comment.article_id)
        .bind(&comment.author)
        .bind(&comment.body)
        .bind(comment.votes)
        .bind(&comment.created_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        "Seeded {} topics, {} users, {} articles, {} comments",
        data.topics.len(),
        data.users.len(),
        data.articles.len(),
        data.comments.len()
    );

    Ok(())
}
