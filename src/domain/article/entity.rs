// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleCategory, ArticleContent, ArticleId, ArticleSlug, ArticleTags, ArticleTitle,
};
use chrono::{DateTime, NaiveDate, Utc};

/// A stored blog article. `id`, `created_at` and `updated_at` are owned by storage.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub excerpt: Option<String>,
    pub content: ArticleContent,
    pub author: String,
    pub published_date: NaiveDate,
    pub read_time: Option<String>,
    pub category: ArticleCategory,
    pub tags: ArticleTags,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Overwrite every field the patch carries; untouched fields keep their value.
    pub fn apply_patch(&mut self, patch: ArticlePatch) {
        let ArticlePatch {
            title,
            slug,
            excerpt,
            content,
            author,
            published_date,
            read_time,
            category,
            tags,
            image_url,
            is_published,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(slug) = slug {
            self.slug = slug;
        }
        if let Some(excerpt) = excerpt {
            self.excerpt = excerpt;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(author) = author {
            self.author = author;
        }
        if let Some(published_date) = published_date {
            self.published_date = published_date;
        }
        if let Some(read_time) = read_time {
            self.read_time = read_time;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
        if let Some(is_published) = is_published {
            self.is_published = is_published;
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub excerpt: Option<String>,
    pub content: ArticleContent,
    pub author: String,
    pub published_date: NaiveDate,
    pub read_time: Option<String>,
    pub category: ArticleCategory,
    pub tags: ArticleTags,
    pub image_url: Option<String>,
    pub is_published: bool,
}

/// Partial change set. The nullable columns use `Option<Option<_>>` so a patch
/// can clear them (`Some(None)`) as well as leave them alone (`None`).
#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub excerpt: Option<Option<String>>,
    pub content: Option<ArticleContent>,
    pub author: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub read_time: Option<Option<String>>,
    pub category: Option<ArticleCategory>,
    pub tags: Option<ArticleTags>,
    pub image_url: Option<Option<String>>,
    pub is_published: Option<bool>,
}

impl ArticlePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.excerpt.is_none()
            && self.content.is_none()
            && self.author.is_none()
            && self.published_date.is_none()
            && self.read_time.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.image_url.is_none()
            && self.is_published.is_none()
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_excerpt(mut self, excerpt: Option<String>) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_published_date(mut self, published_date: NaiveDate) -> Self {
        self.published_date = Some(published_date);
        self
    }

    pub fn with_read_time(mut self, read_time: Option<String>) -> Self {
        self.read_time = Some(read_time);
        self
    }

    pub fn with_category(mut self, category: ArticleCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_tags(mut self, tags: ArticleTags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn with_published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }
}
