// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use std::{
    env,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub use super::openapi_types::{ArticleListResponse, CategoryListResponse, StatusResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::blog::list_published_articles,
        crate::presentation::http::controllers::blog::get_article_by_slug,
        crate::presentation::http::controllers::blog::list_categories,
        crate::presentation::http::controllers::admin::list_articles,
        crate::presentation::http::controllers::admin::get_article,
        crate::presentation::http::controllers::admin::create_article,
        crate::presentation::http::controllers::admin::update_article,
        crate::presentation::http::controllers::admin::set_publish_state,
        crate::presentation::http::controllers::admin::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            CategoryListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::admin::CreateArticleRequest,
            crate::presentation::http::controllers::admin::UpdateArticleRequest,
            crate::presentation::http::controllers::admin::PublishRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::CategoryDto,
            crate::domain::article::ArticleCategory
        )
    ),
    tags(
        (name = "Blog", description = "Public article listing and detail"),
        (name = "Admin", description = "Article management"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Weekly Diet Planner Blog API",
        description = "Articles for the diet planner blog",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Write the OpenAPI document to `OPENAPI_SNAPSHOT_PATH` (default
/// `spec/openapi.json`) and return the path written.
pub fn write_openapi_snapshot() -> std::io::Result<PathBuf> {
    let path = env::var("OPENAPI_SNAPSHOT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("spec/openapi.json"));
    write_openapi_snapshot_to(&path)?;
    Ok(path)
}

pub fn write_openapi_snapshot_to(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
