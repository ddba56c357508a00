use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{Duration, TimeZone, Utc};

use journal_cell::models::{CreateJournalRequest, Journal, JournalError, JournalListQuery, UpdateJournalRequest};
use journal_cell::repository::{InMemoryJournalRepository, JournalRepository};
use journal_cell::services::JournalService;
use shared_database::ids::new_id;
use shared_models::pagination::Pagination;

fn entry(content: &str, category: &str) -> CreateJournalRequest {
    CreateJournalRequest {
        title: None,
        content: content.to_string(),
        category: category.to_string(),
    }
}

#[tokio::test]
async fn create_requires_content_and_category() {
    let service = JournalService::new(Arc::new(InMemoryJournalRepository::new()));

    let err = service.create("u1", entry("  ", "mood")).await.unwrap_err();
    assert_matches!(err, JournalError::Validation(msg) if msg == "content is required");
    let err = service.create("u1", entry("Slept well", "")).await.unwrap_err();
    assert_matches!(err, JournalError::Validation(msg) if msg == "category is required");

    let journal = service
        .create(
            "u1",
            CreateJournalRequest {
                title: Some("Morning".to_string()),
                ..entry("Slept well", "mood")
            },
        )
        .await
        .unwrap();
    assert_eq!(journal.title.as_deref(), Some("Morning"));
    assert_eq!(journal.user_id, "u1");
}

#[tokio::test]
async fn list_filters_and_paginates_newest_first() {
    let service = JournalService::new(Arc::new(InMemoryJournalRepository::new()));
    for i in 0..5 {
        service.create("u1", entry(&format!("Entry {}", i), "mood")).await.unwrap();
    }
    service.create("u1", entry("Grateful for (tea)", "gratitude")).await.unwrap();
    service.create("u2", entry("Someone else", "mood")).await.unwrap();

    let page = service
        .list(
            "u1",
            &JournalListQuery {
                page: Some(2),
                limit: Some(4),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(page.total, 6);
    assert_eq!(page.pages, 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.journals.len(), 2);

    let page = service
        .list(
            "u1",
            &JournalListQuery {
                search: Some("(TEA)".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.journals[0].category, "gratitude");

    let page = service
        .list(
            "u1",
            &JournalListQuery {
                category: Some("mood".to_string()),
                date: Some("not-a-date".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(page.total, 5);
}

#[tokio::test]
async fn date_filter_selects_one_utc_day() {
    let repo = Arc::new(InMemoryJournalRepository::new());
    let day = Utc.with_ymd_and_hms(2024, 5, 10, 23, 30, 0).unwrap();
    for created_at in [day, day + Duration::hours(1), day - Duration::days(1)] {
        repo.create(Journal {
            id: new_id(),
            user_id: "u1".to_string(),
            title: None,
            content: "note".to_string(),
            category: "mood".to_string(),
            created_at,
            updated_at: created_at,
        })
        .await
        .unwrap();
    }
    let service = JournalService::new(repo);

    let page = service
        .list(
            "u1",
            &JournalListQuery {
                date: Some("2024-05-10".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.journals[0].created_at, day);
}

#[tokio::test]
async fn other_users_journals_are_not_found() {
    let service = JournalService::new(Arc::new(InMemoryJournalRepository::new()));
    let journal = service.create("u1", entry("Private", "mood")).await.unwrap();

    assert_matches!(service.get("u2", &journal.id).await, Err(JournalError::NotFound));
    assert_matches!(
        service.update("u2", &journal.id, UpdateJournalRequest::default()).await,
        Err(JournalError::NotFound)
    );
    assert_matches!(service.delete("u2", &journal.id).await, Err(JournalError::NotFound));
    assert_matches!(service.get("u1", "bogus").await, Err(JournalError::NotFound));
    assert!(service.get("u1", &journal.id).await.is_ok());
}

#[tokio::test]
async fn update_keeps_blank_fields_and_delete_removes() {
    let service = JournalService::new(Arc::new(InMemoryJournalRepository::new()));
    let journal = service.create("u1", entry("Draft", "mood")).await.unwrap();

    let updated = service
        .update(
            "u1",
            &journal.id,
            UpdateJournalRequest {
                title: Some("Evening".to_string()),
                content: Some(" ".to_string()),
                category: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title.as_deref(), Some("Evening"));
    assert_eq!(updated.content, "Draft");
    assert_eq!(updated.category, "mood");

    service.delete("u1", &journal.id).await.unwrap();
    assert_matches!(service.get("u1", &journal.id).await, Err(JournalError::NotFound));
}

#[tokio::test]
async fn list_for_user_is_limited_to_the_caller() {
    let service = JournalService::new(Arc::new(InMemoryJournalRepository::new()));
    service.create("u1", entry("Mine", "mood")).await.unwrap();

    let page = service.list_for_user("u1", "u1", Pagination::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_matches!(
        service.list_for_user("u2", "u1", Pagination::default()).await,
        Err(JournalError::Forbidden)
    );
}
