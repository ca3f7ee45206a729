// src/application/commands/articles/create.rs
use super::{
    ArticleCommandService, DEFAULT_AUTHOR, DEFAULT_READ_TIME,
    fields::{non_blank, require_title_and_content},
};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleCategory, ArticleSlug, ArticleTags, NewArticle},
};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: String,
    /// Explicit slug; derived from `title` when absent or blank.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub read_time: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub is_published: bool,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    command: CreateArticleCommand,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.command.slug = Some(slug.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.command.excerpt = Some(excerpt.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.command.author = Some(author.into());
        self
    }

    pub fn published_date(mut self, date: NaiveDate) -> Self {
        self.command.published_date = Some(date);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.command.category = Some(category.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.command.tags.push(tag.into());
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.command.is_published = publish;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            ..self.command
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let (title, content) = require_title_and_content(&command.title, &command.content)?;

        let slug = match non_blank(command.slug) {
            Some(explicit) => ArticleSlug::new(explicit)?,
            None => self.slug_from_title(&title)?,
        };

        let category = match non_blank(command.category) {
            Some(label) => label.parse::<ArticleCategory>()?,
            None => ArticleCategory::default(),
        };

        let new_article = NewArticle {
            title,
            slug,
            excerpt: non_blank(command.excerpt),
            content,
            author: non_blank(command.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            published_date: command.published_date.unwrap_or_else(|| self.clock.today()),
            read_time: Some(
                non_blank(command.read_time).unwrap_or_else(|| DEFAULT_READ_TIME.to_string()),
            ),
            category,
            tags: ArticleTags::new(command.tags),
            image_url: non_blank(command.image_url),
            is_published: command.is_published,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, slug = %created.slug, "article created");
        Ok(created.into())
    }
}
