//! Seed dataset model.

use serde::Deserialize;

use super::{Topic, User};

/// An article as it appears in a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedArticle {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: String,
    #[serde(default)]
    pub votes: i64,
}

/// A comment as it appears in a seed file. `article_id` refers to the
/// 1-based position of the article in the same file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedComment {
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub created_at: String,
    #[serde(default)]
    pub votes: i64,
}

/// A complete dataset used to (re)populate the database.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub topics: Vec<Topic>,
    pub users: Vec<User>,
    pub articles: Vec<SeedArticle>,
    pub comments: Vec<SeedComment>,
}
