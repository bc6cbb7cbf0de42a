//! User model.

use serde::{Deserialize, Serialize};

/// A user who can author articles and comments.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}
