// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleId, ArticlePatch},
};

pub struct SetPublishStateCommand {
    pub id: String,
    pub publish: bool,
}

impl ArticleCommandService {
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&command.id)?;
        let patch = ArticlePatch::new().with_published(command.publish);
        let updated = self.write_repo.update(id, patch).await?;
        tracing::info!(article_id = %updated.id, published = command.publish, "publish state changed");
        Ok(updated.into())
    }
}
