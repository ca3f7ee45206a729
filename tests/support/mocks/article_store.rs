// tests/support/mocks/article_store.rs
use async_trait::async_trait;
use chrono::Duration;
use mealplan_blog::domain::article::{
    Article, ArticleId, ArticlePatch, ArticleReadRepository, ArticleSlug, ArticleWriteRepository,
    NewArticle,
};
use mealplan_blog::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use super::time::fixed_now;

/// Both repository traits over one `Vec`, ordered and filtered the way the
/// Postgres queries are.
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: Mutex<Vec<Article>>,
    writes: AtomicUsize,
    fail_with_connectivity: bool,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
            ..Self::default()
        }
    }

    /// Every call fails as if the backend could not be reached.
    pub fn unreachable() -> Self {
        Self {
            fail_with_connectivity: true,
            ..Self::default()
        }
    }

    /// Number of write calls that reached the store.
    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }

    fn check(&self, operation: &'static str) -> DomainResult<()> {
        if self.fail_with_connectivity {
            Err(DomainError::connectivity(operation, "connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check("insert article")?;

        let mut articles = self.articles.lock().unwrap();
        // Later inserts get later timestamps so created_at ordering is observable.
        let created_at = fixed_now() + Duration::seconds(articles.len() as i64);
        let stored = Article {
            id: ArticleId::new(Uuid::new_v4()),
            title: article.title,
            slug: article.slug,
            excerpt: article.excerpt,
            content: article.content,
            author: article.author,
            published_date: article.published_date,
            read_time: article.read_time,
            category: article.category,
            tags: article.tags,
            image_url: article.image_url,
            is_published: article.is_published,
            created_at,
            updated_at: created_at,
        };
        articles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: ArticleId, patch: ArticlePatch) -> DomainResult<Article> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check("update article")?;

        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|article| article.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))?;
        article.apply_patch(patch);
        article.updated_at = fixed_now() + Duration::hours(1);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check("delete article")?;

        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|article| article.id != id);
        if articles.len() == before {
            return Err(DomainError::NotFound(format!("article {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn list_published(&self) -> DomainResult<Vec<Article>> {
        self.check("list published articles")?;
        let mut published: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|article| article.is_published)
            .cloned()
            .collect();
        published.sort_by(|a, b| b.published_date.cmp(&a.published_date));
        Ok(published)
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        self.check("list articles")?;
        let mut all = self.articles.lock().unwrap().clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.check("find article by slug")?;
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|article| article.is_published && article.slug == *slug)
            .max_by(|a, b| {
                a.published_date
                    .cmp(&b.published_date)
                    .then(a.created_at.cmp(&b.created_at))
            })
            .cloned())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.check("find article by id")?;
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }
}
