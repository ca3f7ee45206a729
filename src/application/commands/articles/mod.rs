// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod fields;
mod publish;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use publish::SetPublishStateCommand;
pub use service::{ArticleCommandService, DEFAULT_AUTHOR, DEFAULT_READ_TIME};
pub use update::UpdateArticleCommand;
