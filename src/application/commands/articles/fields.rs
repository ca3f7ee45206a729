use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleContent, ArticleSlug, ArticleTitle},
};

/// Blank form fields are stored as NULL.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(super) fn require_title_and_content(
    title: &str,
    content: &str,
) -> ApplicationResult<(ArticleTitle, ArticleContent)> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(ApplicationError::validation(
            "title and content are required",
        ));
    }
    Ok((ArticleTitle::new(title)?, ArticleContent::new(content)?))
}

impl ArticleCommandService {
    /// Slug derived from the title; titles without any usable character fall
    /// back to a timestamped placeholder.
    pub(super) fn slug_from_title(&self, title: &ArticleTitle) -> ApplicationResult<ArticleSlug> {
        let base = self.slugger.slugify(title.as_str());
        let slug = if base.is_empty() {
            format!("article-{}", self.clock.now().timestamp())
        } else {
            base
        };
        Ok(ArticleSlug::new(slug)?)
    }
}
