//! Topic model.

use serde::{Deserialize, Serialize};

/// An article topic, keyed by its slug.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}
