use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, CategoryDto},
        error::ApplicationResult,
    },
    domain::article::ArticleCategory,
};

#[derive(Debug, Default)]
pub struct ListPublishedArticlesQuery {
    /// Category label to narrow the listing to; `None` or "All" keeps everything.
    pub category: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_published_articles(
        &self,
        query: ListPublishedArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let category = match query
            .category
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty() && !label.eq_ignore_ascii_case("all"))
        {
            Some(label) => Some(label.parse::<ArticleCategory>()?),
            None => None,
        };

        let articles = self.read_repo.list_published().await?;
        Ok(articles
            .into_iter()
            .filter(|article| article.is_published)
            .filter(|article| category.is_none_or(|wanted| article.category == wanted))
            .map(Into::into)
            .collect())
    }

    /// Admin listing, drafts included, newest first.
    pub async fn list_all_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_all().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub fn categories(&self) -> Vec<CategoryDto> {
        ArticleCategory::ALL.into_iter().map(Into::into).collect()
    }
}
