// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, SetPublishStateCommand, UpdateArticleCommand,
    },
    dto::ArticleDto,
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi_types::{ArticleListResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
    #[serde(default)]
    pub read_time: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

impl From<CreateArticleRequest> for CreateArticleCommand {
    fn from(payload: CreateArticleRequest) -> Self {
        Self {
            title: payload.title,
            slug: payload.slug,
            excerpt: payload.excerpt,
            content: payload.content,
            author: payload.author,
            published_date: payload.published_date,
            read_time: payload.read_time,
            category: payload.category,
            tags: payload.tags,
            image_url: payload.image_url,
            is_published: payload.is_published,
        }
    }
}

/// Fields left out are not touched. Empty strings clear `excerpt`,
/// `read_time` and `image_url`; an empty `slug` with a new `title`
/// regenerates the slug.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
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

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub publish: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/articles",
    responses(
        (status = 200, description = "Every article, drafts included, newest first.", body = ArticleListResponse)
    ),
    tag = "Admin"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleListResponse>> {
    state
        .services
        .article_queries
        .list_all_articles()
        .await
        .into_http()
        .map(|items| Json(items.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/articles/{id}",
    params(("id" = String, Path, description = "Article id (UUID)")),
    responses(
        (status = 200, description = "Article.", body = ArticleDto),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Stored article.", body = ArticleDto),
        (status = 400, description = "Title or content missing.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .create_article(payload.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/admin/articles/{id}",
    params(("id" = String, Path, description = "Article id (UUID)")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto),
        (status = 400, description = "Invalid field value.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        content: payload.content,
        author: payload.author,
        published_date: payload.published_date,
        read_time: payload.read_time,
        category: payload.category,
        tags: payload.tags,
        image_url: payload.image_url,
        is_published: payload.is_published,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/articles/{id}/publish",
    params(("id" = String, Path, description = "Article id (UUID)")),
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Article with its new publish state.", body = ArticleDto),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .set_publish_state(SetPublishStateCommand {
            id,
            publish: payload.publish,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/articles/{id}",
    params(("id" = String, Path, description = "Article id (UUID)")),
    responses(
        (status = 200, description = "Article removed.", body = StatusResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
