use crate::domain::article::entity::{Article, ArticlePatch, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Every call is one round trip to storage: no caching, no retries.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `DomainError::NotFound` when `id` does not exist.
    async fn update(&self, id: ArticleId, patch: ArticlePatch) -> DomainResult<Article>;
    /// Fails with `DomainError::NotFound` when `id` does not exist.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Published articles, newest `published_date` first.
    async fn list_published(&self) -> DomainResult<Vec<Article>>;
    /// Every article, newest `created_at` first.
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
    /// Published article with this slug. When several rows share it, the
    /// latest `published_date` (then `created_at`) wins.
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
}
