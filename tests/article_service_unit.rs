// tests/article_service_unit.rs
use std::sync::Arc;

use chrono::NaiveDate;
use mealplan_blog::application::commands::articles::{
    CreateArticleCommand, DEFAULT_AUTHOR, DEFAULT_READ_TIME, DeleteArticleCommand,
    SetPublishStateCommand, UpdateArticleCommand,
};
use mealplan_blog::application::error::ApplicationError;
use mealplan_blog::application::queries::articles::{
    GetArticleByIdQuery, GetArticleBySlugQuery, ListPublishedArticlesQuery,
};
use mealplan_blog::domain::article::ArticleCategory;
use mealplan_blog::domain::errors::DomainError;

mod support;

use support::{InMemoryArticleStore, article, build_services, fixed_now};

fn keto_command() -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title("Keto Meals & Más!")
        .content("# Keto\n\nLow carb, high flavour.")
        .build()
        .unwrap()
}

#[tokio::test]
async fn create_derives_slug_and_applies_defaults() {
    let store = Arc::new(InMemoryArticleStore::new());
    let services = build_services(store.clone());

    let created = services
        .article_commands
        .create_article(keto_command())
        .await
        .unwrap();

    assert_eq!(created.slug, "keto-meals-ms");
    assert_eq!(created.author, DEFAULT_AUTHOR);
    assert_eq!(created.read_time.as_deref(), Some(DEFAULT_READ_TIME));
    assert_eq!(created.category, ArticleCategory::General);
    assert_eq!(created.published_date, fixed_now().date_naive());
    assert!(!created.is_published);
    assert_eq!(created.excerpt, None);
    assert_eq!(store.write_calls(), 1);
}

#[tokio::test]
async fn create_keeps_explicit_values() {
    let store = Arc::new(InMemoryArticleStore::new());
    let services = build_services(store);

    let command = CreateArticleCommand::builder()
        .title("Gluten-free bread")
        .content("Flour blends that work.")
        .slug("gf-bread")
        .excerpt("Bake without wheat")
        .author("Ana")
        .published_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
        .category("gluten-free")
        .tag("baking")
        .tag("  baking ")
        .tag("")
        .tag("bread")
        .publish(true)
        .build()
        .unwrap();

    let created = services.article_commands.create_article(command).await.unwrap();

    assert_eq!(created.slug, "gf-bread");
    assert_eq!(created.excerpt.as_deref(), Some("Bake without wheat"));
    assert_eq!(created.author, "Ana");
    assert_eq!(
        created.published_date,
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    );
    assert_eq!(created.category, ArticleCategory::GlutenFree);
    assert_eq!(created.tags, vec!["baking".to_string(), "bread".to_string()]);
    assert!(created.is_published);
}

#[tokio::test]
async fn create_rejects_blank_content_before_touching_storage() {
    let store = Arc::new(InMemoryArticleStore::new());
    let services = build_services(store.clone());

    let command = CreateArticleCommand::builder()
        .title("Kitchen safety basics")
        .content("   \n\t")
        .build()
        .unwrap();

    let err = services
        .article_commands
        .create_article(command)
        .await
        .unwrap_err();

    match err {
        ApplicationError::Validation(msg) => assert_eq!(msg, "title and content are required"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(store.write_calls(), 0);
}

#[tokio::test]
async fn create_rejects_unknown_category() {
    let store = Arc::new(InMemoryArticleStore::new());
    let services = build_services(store.clone());

    let command = CreateArticleCommand::builder()
        .title("Paleo")
        .content("Body")
        .category("Paleo")
        .build()
        .unwrap();

    let err = services
        .article_commands
        .create_article(command)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
    assert_eq!(store.write_calls(), 0);
}

#[tokio::test]
async fn symbol_only_title_falls_back_to_timestamp_slug() {
    let store = Arc::new(InMemoryArticleStore::new());
    let services = build_services(store);

    let command = CreateArticleCommand::builder()
        .title("¡¿!?")
        .content("Body")
        .build()
        .unwrap();

    let created = services.article_commands.create_article(command).await.unwrap();
    assert_eq!(created.slug, format!("article-{}", fixed_now().timestamp()));
}

#[tokio::test]
async fn publishing_changes_only_the_flag() {
    let draft = article("Seasonal soups", "seasonal-soups")
        .category(ArticleCategory::SeasonalCooking)
        .draft()
        .build();
    let id = draft.id.to_string();
    let store = Arc::new(InMemoryArticleStore::with_articles(vec![draft.clone()]));
    let services = build_services(store);

    let published = services
        .article_commands
        .set_publish_state(SetPublishStateCommand {
            id: id.clone(),
            publish: true,
        })
        .await
        .unwrap();

    assert!(published.is_published);
    assert_eq!(published.title, draft.title.as_str());
    assert_eq!(published.slug, draft.slug.as_str());
    assert_eq!(published.excerpt, draft.excerpt);
    assert_eq!(published.category, ArticleCategory::SeasonalCooking);
    assert_eq!(published.tags, draft.tags.as_slice());
    assert_eq!(published.published_date, draft.published_date);

    let visible = services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery {
            slug: "seasonal-soups".into(),
        })
        .await
        .unwrap();
    assert_eq!(visible.id.to_string(), id);
}

#[tokio::test]
async fn update_regenerates_slug_only_when_asked() {
    let existing = article("Old title", "old-title").build();
    let id = existing.id.to_string();
    let store = Arc::new(InMemoryArticleStore::with_articles(vec![existing]));
    let services = build_services(store);

    let renamed = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: id.clone(),
            title: Some("New Title".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(renamed.title, "New Title");
    assert_eq!(renamed.slug, "old-title");

    let reslugged = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: id.clone(),
            title: Some("Newer Title".into()),
            slug: Some(String::new()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(reslugged.slug, "newer-title");
}

#[tokio::test]
async fn update_clears_optional_text_with_empty_string() {
    let existing = article("Nutrition 101", "nutrition-101").build();
    let id = existing.id.to_string();
    let store = Arc::new(InMemoryArticleStore::with_articles(vec![existing]));
    let services = build_services(store);

    let updated = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            excerpt: Some(String::new()),
            read_time: Some("  ".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.excerpt, None);
    assert_eq!(updated.read_time, None);
    assert_eq!(updated.title, "Nutrition 101");
}

#[tokio::test]
async fn update_rejects_blank_title_without_writing() {
    let existing = article("Recipe tips", "recipe-tips").build();
    let id = existing.id.to_string();
    let store = Arc::new(InMemoryArticleStore::with_articles(vec![existing]));
    let services = build_services(store.clone());

    let err = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            title: Some(" ".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
    assert_eq!(store.write_calls(), 0);
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let store = Arc::new(InMemoryArticleStore::new());
    let services = build_services(store);

    let err = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: uuid::Uuid::new_v4().to_string(),
            title: Some("Anything".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::NotFound(_))));
}

#[tokio::test]
async fn malformed_id_is_a_validation_error() {
    let store = Arc::new(InMemoryArticleStore::new());
    let services = build_services(store.clone());

    let err = services
        .article_commands
        .delete_article(DeleteArticleCommand {
            id: "not-a-uuid".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
    assert_eq!(store.write_calls(), 0);
}

#[tokio::test]
async fn deleted_article_is_gone() {
    let existing = article("Family planning", "family-planning").build();
    let id = existing.id.to_string();
    let store = Arc::new(InMemoryArticleStore::with_articles(vec![existing]));
    let services = build_services(store);

    services
        .article_commands
        .delete_article(DeleteArticleCommand { id: id.clone() })
        .await
        .unwrap();

    let err = services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: id.clone() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let again = services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .unwrap_err();
    assert!(matches!(again, ApplicationError::Domain(DomainError::NotFound(_))));
}

#[tokio::test]
async fn published_listing_is_newest_first_and_hides_drafts() {
    let store = Arc::new(InMemoryArticleStore::with_articles(vec![
        article("March", "march").published_on(2025, 3, 1).build(),
        article("May", "may").published_on(2025, 5, 1).build(),
        article("Draft", "draft").published_on(2025, 6, 1).draft().build(),
        article("April", "april").published_on(2025, 4, 1).build(),
    ]));
    let services = build_services(store);

    let listed = services
        .article_queries
        .list_published_articles(ListPublishedArticlesQuery::default())
        .await
        .unwrap();

    let slugs: Vec<&str> = listed.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["may", "april", "march"]);
}

#[tokio::test]
async fn published_listing_filters_by_category() {
    let store = Arc::new(InMemoryArticleStore::with_articles(vec![
        article("Keto one", "keto-one")
            .category(ArticleCategory::Keto)
            .build(),
        article("General one", "general-one").build(),
        article("Keto draft", "keto-draft")
            .category(ArticleCategory::Keto)
            .draft()
            .build(),
    ]));
    let services = build_services(store);

    let keto = services
        .article_queries
        .list_published_articles(ListPublishedArticlesQuery {
            category: Some("keto".into()),
        })
        .await
        .unwrap();
    assert_eq!(keto.len(), 1);
    assert_eq!(keto[0].slug, "keto-one");

    let all = services
        .article_queries
        .list_published_articles(ListPublishedArticlesQuery {
            category: Some("All".into()),
        })
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn admin_listing_includes_drafts_newest_created_first() {
    let store = Arc::new(InMemoryArticleStore::with_articles(vec![
        article("First", "first").build(),
        article("Second", "second")
            .draft()
            .created_minutes_later(5)
            .build(),
    ]));
    let services = build_services(store);

    let listed = services.article_queries.list_all_articles().await.unwrap();
    let slugs: Vec<&str> = listed.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["second", "first"]);
}

#[tokio::test]
async fn slug_lookup_hides_drafts_and_unknown_slugs() {
    let store = Arc::new(InMemoryArticleStore::with_articles(vec![
        article("Hidden", "hidden").draft().build(),
    ]));
    let services = build_services(store);

    for slug in ["hidden", "does-not-exist", "  "] {
        let err = services
            .article_queries
            .get_article_by_slug(GetArticleBySlugQuery { slug: slug.into() })
            .await
            .unwrap_err();
        assert!(
            matches!(err, ApplicationError::NotFound(_)),
            "slug {slug:?} gave {err:?}"
        );
    }
}

#[tokio::test]
async fn duplicate_slugs_resolve_to_latest_publish_date() {
    let store = Arc::new(InMemoryArticleStore::with_articles(vec![
        article("Older", "shared").published_on(2025, 1, 1).build(),
        article("Newer", "shared").published_on(2025, 2, 1).build(),
    ]));
    let services = build_services(store);

    let found = services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery {
            slug: "shared".into(),
        })
        .await
        .unwrap();
    assert_eq!(found.title, "Newer");
}

#[tokio::test]
async fn categories_follow_the_fixed_order() {
    let services = build_services(Arc::new(InMemoryArticleStore::new()));
    let labels: Vec<String> = services
        .article_queries
        .categories()
        .into_iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(labels.first().map(String::as_str), Some("General"));
    assert_eq!(labels.len(), 9);
    assert!(labels.contains(&"Kitchen Safety".to_string()));
}

#[tokio::test]
async fn unreachable_backend_surfaces_connectivity_error() {
    let services = build_services(Arc::new(InMemoryArticleStore::unreachable()));

    let err = services
        .article_queries
        .list_published_articles(ListPublishedArticlesQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Connectivity { .. })
    ));
}
