// tests/support/builders.rs
use chrono::{Duration, NaiveDate};
use mealplan_blog::domain::article::{
    Article, ArticleCategory, ArticleContent, ArticleId, ArticleSlug, ArticleTags, ArticleTitle,
};
use uuid::Uuid;

use super::mocks::fixed_now;

/// Stored article ready to seed an `InMemoryArticleStore`.
pub struct ArticleFixture {
    article: Article,
}

impl ArticleFixture {
    pub fn new(title: &str, slug: &str) -> Self {
        Self {
            article: Article {
                id: ArticleId::new(Uuid::new_v4()),
                title: ArticleTitle::new(title).unwrap(),
                slug: ArticleSlug::new(slug).unwrap(),
                excerpt: Some(format!("About {title}")),
                content: ArticleContent::new(format!("# {title}\n\nBody")).unwrap(),
                author: "Weekly Diet Planner Team".into(),
                published_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                read_time: Some("5 min read".into()),
                category: ArticleCategory::General,
                tags: ArticleTags::new(["meal prep"]),
                image_url: None,
                is_published: true,
                created_at: fixed_now(),
                updated_at: fixed_now(),
            },
        }
    }

    pub fn published_on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.article.published_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn category(mut self, category: ArticleCategory) -> Self {
        self.article.category = category;
        self
    }

    pub fn draft(mut self) -> Self {
        self.article.is_published = false;
        self
    }

    /// Shift `created_at` relative to the fixed clock.
    pub fn created_minutes_later(mut self, minutes: i64) -> Self {
        self.article.created_at = fixed_now() + Duration::minutes(minutes);
        self.article.updated_at = self.article.created_at;
        self
    }

    pub fn build(self) -> Article {
        self.article
    }
}

pub fn article(title: &str, slug: &str) -> ArticleFixture {
    ArticleFixture::new(title, slug)
}
