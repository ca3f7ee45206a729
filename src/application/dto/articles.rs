use crate::domain::article::{Article, ArticleCategory};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Article as exposed to API clients; field names follow the storage columns.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub content: String,
    pub author: String,
    pub published_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    pub category: ArticleCategory,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            excerpt: article.excerpt,
            content: article.content.into_inner(),
            author: article.author,
            published_date: article.published_date,
            read_time: article.read_time,
            category: article.category,
            tags: article.tags.into_inner(),
            image_url: article.image_url,
            is_published: article.is_published,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub label: String,
}

impl From<ArticleCategory> for CategoryDto {
    fn from(category: ArticleCategory) -> Self {
        Self {
            label: category.label().to_string(),
        }
    }
}
