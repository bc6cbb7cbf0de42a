//! Comment models.

use serde::{Deserialize, Serialize};

/// A comment on an article.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i64,
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: String,
}

/// Request body for `POST /api/articles/:id/comments`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// A validated comment ready for insertion.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub author: String,
    pub body: String,
}

impl CreateCommentRequest {
    /// Check that both required fields are present and non-empty.
    pub fn validate(self) -> Option<NewComment> {
        let author = self.username.filter(|u| !u.trim().is_empty())?;
        let body = self.body.filter(|b| !b.trim().is_empty())?;
        Some(NewComment { author, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_both_fields() {
        let missing_body = CreateCommentRequest {
            username: Some("butter_bridge".to_string()),
            body: None,
        };
        assert!(missing_body.validate().is_none());

        let blank_author = CreateCommentRequest {
            username: Some("  ".to_string()),
            body: Some("cool pugs".to_string()),
        };
        assert!(blank_author.validate().is_none());

        let ok = CreateCommentRequest {
            username: Some("butter_bridge".to_string()),
            body: Some("cool pugs".to_string()),
        }
        .validate()
        .unwrap();
        assert_eq!(ok.author, "butter_bridge");
        assert_eq!(ok.body, "cool pugs");
    }
}
