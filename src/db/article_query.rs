//! Validated query plan for the article listing.
//!
//! Client-supplied sort and order values only ever select one of the fixed SQL
//! fragments below. The topic filter is always a bound parameter.

use sqlx::{QueryBuilder, Sqlite};

use crate::errors::AppError;

const BASE_SELECT: &str = r#"SELECT articles.article_id, articles.title, articles.topic,
       articles.author, articles.created_at, articles.votes,
       COUNT(comments.comment_id) AS comment_count
FROM articles
LEFT JOIN comments ON comments.article_id = articles.article_id"#;

/// Columns the listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSort {
    ArticleId,
    Title,
    Topic,
    Author,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl ArticleSort {
    pub const ALL: [ArticleSort; 7] = [
        ArticleSort::ArticleId,
        ArticleSort::Title,
        ArticleSort::Topic,
        ArticleSort::Author,
        ArticleSort::CreatedAt,
        ArticleSort::Votes,
        ArticleSort::CommentCount,
    ];

    /// Parse a `sort_by` query value. Unknown values are rejected.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "article_id" => Some(ArticleSort::ArticleId),
            "title" => Some(ArticleSort::Title),
            "topic" => Some(ArticleSort::Topic),
            "author" => Some(ArticleSort::Author),
            "created_at" => Some(ArticleSort::CreatedAt),
            "votes" => Some(ArticleSort::Votes),
            "comment_count" => Some(ArticleSort::CommentCount),
            _ => None,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            ArticleSort::ArticleId => "article_id",
            ArticleSort::Title => "title",
            ArticleSort::Topic => "topic",
            ArticleSort::Author => "author",
            ArticleSort::CreatedAt => "created_at",
            ArticleSort::Votes => "votes",
            ArticleSort::CommentCount => "comment_count",
        }
    }

    /// The column reference used in `ORDER BY`.
    fn column(&self) -> &'static str {
        match self {
            ArticleSort::ArticleId => "articles.article_id",
            ArticleSort::Title => "articles.title",
            ArticleSort::Topic => "articles.topic",
            ArticleSort::Author => "articles.author",
            ArticleSort::CreatedAt => "articles.created_at",
            ArticleSort::Votes => "articles.votes",
            ArticleSort::CommentCount => "comment_count",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// A validated article listing query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleQuery {
    pub topic: Option<String>,
    pub sort: ArticleSort,
    pub order: SortOrder,
}

impl ArticleQuery {
    /// Validate raw query parameters into a plan.
    ///
    /// Missing `sort_by` defaults to `created_at`, missing `order` to `desc`.
    /// An empty `topic` is treated as no filter.
    pub fn build(
        topic: Option<&str>,
        sort_by: Option<&str>,
        order: Option<&str>,
    ) -> Result<Self, AppError> {
        let sort = match sort_by {
            Some(value) => ArticleSort::from_param(value).ok_or_else(|| {
                tracing::debug!(
                    "Rejected sort_by value {:?}, expected one of {:?}",
                    value,
                    ArticleSort::ALL.map(|s| s.as_param())
                );
                AppError::bad_request()
            })?,
            None => ArticleSort::default(),
        };

        let order = match order {
            Some(value) => SortOrder::from_param(value).ok_or_else(|| {
                tracing::debug!("Rejected order value: {:?}", value);
                AppError::bad_request()
            })?,
            None => SortOrder::default(),
        };

        Ok(Self {
            topic: topic.filter(|t| !t.is_empty()).map(str::to_string),
            sort,
            order,
        })
    }

    /// Render the plan into an executable query with the topic bound.
    pub fn to_builder(&self) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new(BASE_SELECT);

        if let Some(topic) = &self.topic {
            builder.push(" WHERE articles.topic = ");
            builder.push_bind(topic.clone());
        }

        builder.push(" GROUP BY articles.article_id ORDER BY ");
        builder.push(self.sort.column());
        builder.push(" ");
        builder.push(self.order.keyword());

        builder
    }
}
