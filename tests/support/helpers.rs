// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use mealplan_blog::application::ports::{time::Clock, util::SlugGenerator};
use mealplan_blog::application::services::ApplicationServices;
use mealplan_blog::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use mealplan_blog::infrastructure::util::DefaultSlugGenerator;
use mealplan_blog::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

use super::mocks::{DummyClock, InMemoryArticleStore};

pub fn build_services(store: Arc<InMemoryArticleStore>) -> ApplicationServices {
    let write: Arc<dyn ArticleWriteRepository> = store.clone();
    let read: Arc<dyn ArticleReadRepository> = store;
    let clock: Arc<dyn Clock> = Arc::new(DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(write, read, clock, slugger)
}

pub fn build_test_state(store: Arc<InMemoryArticleStore>) -> HttpState {
    HttpState {
        services: Arc::new(build_services(store)),
    }
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with_store(Arc::new(InMemoryArticleStore::new()))
}

pub fn make_test_router_with_store(store: Arc<InMemoryArticleStore>) -> axum::Router {
    build_router(
        build_test_state(store),
        &["http://localhost:5173".to_string()],
    )
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Status plus decoded JSON body. Panics when the body is not JSON.
pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "expected JSON body (status {status}): {err}: {}",
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, value)
}

/// Write a migration script to a fresh file under the system temp dir.
pub fn write_script(contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mealplan-blog-migrate-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("migration.sql");
    std::fs::write(&path, contents).unwrap();
    path
}
