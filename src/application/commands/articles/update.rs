use super::{ArticleCommandService, DEFAULT_AUTHOR, fields::non_blank};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleCategory, ArticleContent, ArticleId, ArticlePatch, ArticleSlug, ArticleTags,
        ArticleTitle,
    },
};
use chrono::NaiveDate;

/// Partial edit. `None` leaves a field untouched; for the optional text
/// columns an empty string clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: Option<String>,
    /// A blank slug together with a new title regenerates the slug.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub read_time: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub is_published: Option<bool>,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&command.id)?;
        let patch = self.build_patch(command)?;

        let updated = self.write_repo.update(id, patch).await?;
        tracing::info!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }

    fn build_patch(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticlePatch> {
        let UpdateArticleCommand {
            id: _,
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
        } = command;

        let title = title
            .map(|t| {
                ArticleTitle::new(t)
                    .map_err(|_| ApplicationError::validation("title and content are required"))
            })
            .transpose()?;
        let content = content
            .map(|c| {
                ArticleContent::new(c)
                    .map_err(|_| ApplicationError::validation("title and content are required"))
            })
            .transpose()?;

        let mut patch = ArticlePatch::new();

        match (slug.map(|s| s.trim().to_string()), &title) {
            (Some(explicit), _) if !explicit.is_empty() => {
                patch = patch.with_slug(ArticleSlug::new(explicit)?);
            }
            (Some(_), Some(new_title)) => {
                patch = patch.with_slug(self.slug_from_title(new_title)?);
            }
            _ => {}
        }

        if let Some(title) = title {
            patch = patch.with_title(title);
        }
        if let Some(content) = content {
            patch = patch.with_content(content);
        }
        if let Some(excerpt) = excerpt {
            patch = patch.with_excerpt(non_blank(Some(excerpt)));
        }
        if let Some(author) = author {
            patch = patch
                .with_author(non_blank(Some(author)).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()));
        }
        if let Some(date) = published_date {
            patch = patch.with_published_date(date);
        }
        if let Some(read_time) = read_time {
            patch = patch.with_read_time(non_blank(Some(read_time)));
        }
        if let Some(label) = non_blank(category) {
            patch = patch.with_category(label.parse::<ArticleCategory>()?);
        }
        if let Some(tags) = tags {
            patch = patch.with_tags(ArticleTags::new(tags));
        }
        if let Some(image_url) = image_url {
            patch = patch.with_image_url(non_blank(Some(image_url)));
        }
        if let Some(flag) = is_published {
            patch = patch.with_published(flag);
        }

        Ok(patch)
    }
}
