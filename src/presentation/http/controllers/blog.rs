// src/presentation/http/controllers/blog.rs
use crate::application::{
    dto::ArticleDto,
    queries::articles::{GetArticleBySlugQuery, ListPublishedArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi_types::{ArticleListResponse, CategoryListResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogListParams {
    /// Category label, e.g. `Keto`. Omit or pass `All` for every category.
    #[serde(default)]
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/blog/articles",
    params(BlogListParams),
    responses(
        (status = 200, description = "Published articles, newest first.", body = ArticleListResponse),
        (status = 400, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn list_published_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<BlogListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    state
        .services
        .article_queries
        .list_published_articles(ListPublishedArticlesQuery {
            category: params.category,
        })
        .await
        .into_http()
        .map(|items| Json(items.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/blog/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Published article.", body = ArticleDto),
        (status = 404, description = "No published article with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/blog/categories",
    responses(
        (status = 200, description = "Every category label.", body = CategoryListResponse)
    ),
    tag = "Blog"
)]
pub async fn list_categories(Extension(state): Extension<HttpState>) -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        items: state.services.article_queries.categories(),
    })
}
