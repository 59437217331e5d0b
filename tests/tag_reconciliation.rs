// tests/tag_reconciliation.rs
mod support;

use content_hub::application::commands::tags::{TagReconciler, TagReconciliationRequest};
use content_hub::application::error::ApplicationError;
use content_hub::domain::errors::DomainError;
use std::sync::Arc;
use support::InMemoryTagRepo;

fn request(tags: Option<&str>, tag_ids: Option<&str>) -> TagReconciliationRequest {
    TagReconciliationRequest {
        tags: tags.map(str::to_string),
        tag_ids: tag_ids.map(str::to_string),
    }
}

fn names(tags: &[content_hub::domain::tag::Tag]) -> Vec<&str> {
    tags.iter().map(|tag| tag.name.primary()).collect()
}

#[tokio::test]
async fn reconciling_twice_does_not_duplicate_tags() {
    let repo = Arc::new(InMemoryTagRepo::new());
    let reconciler = TagReconciler::new(repo.clone());
    let req = request(Some(r#"[{"name":"Finance","nameAr":"مالية"},"Legal"]"#), None);

    let first = reconciler.reconcile(&req).await.unwrap();
    assert_eq!(names(&first), vec!["Finance", "Legal"]);
    assert_eq!(repo.len(), 2);

    // 2回目は既存タグを返し、件数は変わらない
    let second = reconciler.reconcile(&req).await.unwrap();
    assert_eq!(repo.len(), 2);
    let first_ids: Vec<_> = first.iter().map(|t| t.id.clone()).collect();
    let second_ids: Vec<_> = second.iter().map(|t| t.id.clone()).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn arabic_name_collision_reuses_existing_tag() {
    let repo = Arc::new(InMemoryTagRepo::new());
    let existing = repo.seed("T1", "Finance", Some("مالية"));
    let reconciler = TagReconciler::new(repo.clone());

    let tags = reconciler
        .reconcile(&request(Some(r#"{"name":"Money","nameAr":"مالية"}"#), None))
        .await
        .unwrap();

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].id, existing.id);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn existing_ids_and_drafts_are_merged_without_duplicates() {
    let repo = Arc::new(InMemoryTagRepo::new());
    let finance = repo.seed("id1", "Finance", None);
    repo.seed("id2", "Legal", None);
    let reconciler = TagReconciler::new(repo.clone());

    let tags = reconciler
        .reconcile(&request(Some(r#"[{"name":"Finance"}]"#), Some("id1, id2")))
        .await
        .unwrap();

    let ids: Vec<&str> = tags.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["id1", "id2"]);
    assert_eq!(tags[0], finance);
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn output_is_refetched_from_the_store() {
    let repo = Arc::new(InMemoryTagRepo::new());
    let reconciler = TagReconciler::new(repo.clone());

    let tags = reconciler
        .reconcile(&request(Some(r#""Infrastructure""#), None))
        .await
        .unwrap();

    assert_eq!(tags.len(), 1);
    assert_eq!(repo.get(&tags[0].id), Some(tags[0].clone()));
    // 作成後の検証で1回は find_by_id が呼ばれる
    assert!(repo.lookups() >= 1);
}

#[tokio::test]
async fn bracketless_fragment_creates_each_tag() {
    let repo = Arc::new(InMemoryTagRepo::new());
    let reconciler = TagReconciler::new(repo.clone());

    let tags = reconciler
        .reconcile(&request(Some(r#"{"name":"Finance"},{"name":"Legal"}"#), None))
        .await
        .unwrap();

    assert_eq!(names(&tags), vec!["Finance", "Legal"]);
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn unknown_tag_id_is_reference_not_found() {
    let repo = Arc::new(InMemoryTagRepo::new());
    repo.seed("id1", "Finance", None);
    let reconciler = TagReconciler::new(repo.clone());

    let err = reconciler
        .reconcile(&request(None, Some(r#"["id1","missing"]"#)))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::ReferenceNotFound(ref id) if id == "missing"));
}

#[tokio::test]
async fn vanished_tag_after_creation_is_reference_not_found() {
    let repo = Arc::new(InMemoryTagRepo::new());
    repo.forget_created_tags();
    let reconciler = TagReconciler::new(repo.clone());

    let err = reconciler
        .reconcile(&request(Some(r#"[{"name":"Ephemeral"}]"#), None))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::ReferenceNotFound(_)));
}

#[tokio::test]
async fn malformed_payload_names_the_field() {
    let repo = Arc::new(InMemoryTagRepo::new());
    let reconciler = TagReconciler::new(repo.clone());

    let err = reconciler
        .reconcile(&request(Some("{name: Finance"), None))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::MalformedInput { ref field, .. } if field == "tags"));

    let err = reconciler
        .reconcile(&request(None, Some(r#"["id1", "#)))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::MalformedInput { ref field, .. } if field == "tagIds"));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn draft_without_name_is_rejected_before_any_write() {
    let repo = Arc::new(InMemoryTagRepo::new());
    let reconciler = TagReconciler::new(repo.clone());

    let err = reconciler
        .reconcile(&request(Some(r#"[{"name":"Finance"},{"nameAr":"قانوني"}]"#), None))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn empty_request_returns_no_tags() {
    let repo = Arc::new(InMemoryTagRepo::new());
    let reconciler = TagReconciler::new(repo.clone());

    assert!(reconciler.reconcile(&request(None, None)).await.unwrap().is_empty());
    assert!(reconciler.reconcile(&request(Some("  "), Some(""))).await.unwrap().is_empty());
    assert_eq!(repo.lookups(), 0);
}

#[tokio::test]
async fn store_failures_propagate() {
    let repo = Arc::new(InMemoryTagRepo::new());
    repo.seed("id1", "Finance", None);
    repo.fail_lookups();
    let reconciler = TagReconciler::new(repo.clone());

    let err = reconciler
        .reconcile(&request(None, Some("id1")))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Persistence(_))));
}
