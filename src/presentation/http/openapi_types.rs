use crate::application::dto::{ArticleDto, CategoryDto};
use serde::{Deserialize, Serialize};

// Simple status response used by health endpoints and docs.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleDto>,
}

impl From<Vec<ArticleDto>> for ArticleListResponse {
    fn from(items: Vec<ArticleDto>) -> Self {
        Self { items }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CategoryListResponse {
    pub items: Vec<CategoryDto>,
}
