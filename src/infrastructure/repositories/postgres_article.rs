// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleCategory, ArticleContent, ArticleId, ArticlePatch, ArticleReadRepository,
    ArticleSlug, ArticleTags, ArticleTitle, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

macro_rules! article_columns {
    () => {
        "id, title, slug, excerpt, content, author, published_date, read_time, category, tags, image_url, is_published, created_at, updated_at"
    };
}

macro_rules! select_articles {
    ($tail:literal) => {
        concat!("SELECT ", article_columns!(), " FROM blog_articles", $tail)
    };
}

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    slug: String,
    excerpt: Option<String>,
    content: String,
    author: String,
    published_date: NaiveDate,
    read_time: Option<String>,
    category: String,
    tags: Vec<String>,
    image_url: Option<String>,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Labels outside the known set read back as `General`.
fn stored_category(label: &str) -> ArticleCategory {
    label.parse().unwrap_or_else(|_| {
        tracing::warn!(category = label, "unknown stored category; reading as General");
        ArticleCategory::General
    })
}

/// Stored rows are trusted as written; only new input is validated.
impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            id: ArticleId::new(row.id),
            title: ArticleTitle::from_stored(row.title),
            slug: ArticleSlug::from_stored(row.slug),
            excerpt: row.excerpt,
            content: ArticleContent::from_stored(row.content),
            author: row.author,
            published_date: row.published_date,
            read_time: row.read_time,
            category: stored_category(&row.category),
            tags: ArticleTags::new(row.tags),
            image_url: row.image_url,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
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
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(concat!(
            "INSERT INTO blog_articles (title, slug, excerpt, content, author, published_date, read_time, category, tags, image_url, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING ",
            article_columns!()
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(excerpt)
        .bind(content.as_str())
        .bind(author)
        .bind(published_date)
        .bind(read_time)
        .bind(category.label())
        .bind(tags.into_inner())
        .bind(image_url)
        .bind(is_published)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx("insert", err))?;

        Ok(Article::from(row))
    }

    async fn update(&self, id: ArticleId, patch: ArticlePatch) -> DomainResult<Article> {
        let nothing_to_set = patch.is_empty();
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

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE blog_articles SET ");
        {
            let mut assignments = builder.separated(", ");
            if nothing_to_set {
                assignments.push("id = id");
            }
            if let Some(title) = title {
                assignments.push("title = ");
                assignments.push_bind_unseparated(title.into_inner());
            }
            if let Some(slug) = slug {
                assignments.push("slug = ");
                assignments.push_bind_unseparated(slug.into_inner());
            }
            if let Some(excerpt) = excerpt {
                assignments.push("excerpt = ");
                assignments.push_bind_unseparated(excerpt);
            }
            if let Some(content) = content {
                assignments.push("content = ");
                assignments.push_bind_unseparated(content.into_inner());
            }
            if let Some(author) = author {
                assignments.push("author = ");
                assignments.push_bind_unseparated(author);
            }
            if let Some(published_date) = published_date {
                assignments.push("published_date = ");
                assignments.push_bind_unseparated(published_date);
            }
            if let Some(read_time) = read_time {
                assignments.push("read_time = ");
                assignments.push_bind_unseparated(read_time);
            }
            if let Some(category) = category {
                assignments.push("category = ");
                assignments.push_bind_unseparated(category.label());
            }
            if let Some(tags) = tags {
                assignments.push("tags = ");
                assignments.push_bind_unseparated(tags.into_inner());
            }
            if let Some(image_url) = image_url {
                assignments.push("image_url = ");
                assignments.push_bind_unseparated(image_url);
            }
            if let Some(is_published) = is_published {
                assignments.push("is_published = ");
                assignments.push_bind_unseparated(is_published);
            }
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.as_uuid());
        builder.push(concat!(" RETURNING ", article_columns!()));

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx("update", err))?
            .ok_or_else(|| DomainError::NotFound(format!("article {id} does not exist")))?;

        Ok(Article::from(row))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM blog_articles WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|err| map_sqlx("delete", err))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("article {id} does not exist")));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn list_published(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(select_articles!(
            " WHERE is_published = TRUE ORDER BY published_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|err| map_sqlx("list_published", err))?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(select_articles!(" ORDER BY created_at DESC"))
            .fetch_all(&self.pool)
            .await
            .map_err(|err| map_sqlx("list_all", err))?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(select_articles!(
            " WHERE slug = $1 AND is_published = TRUE
             ORDER BY published_date DESC, created_at DESC
             LIMIT 1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| map_sqlx("find_by_slug", err))?;

        Ok(row.map(Article::from))
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(select_articles!(" WHERE id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx("find_by_id", err))?;

        Ok(row.map(Article::from))
    }
}
