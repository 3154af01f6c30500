use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use serde_json::Value;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::{GetPost, Request};
use crate::domain::{Anonymous, AuthenticatedUser, Principal};
use crate::error::DomainError;
use crate::usecase::Permissions;
use crate::usecase::test_support::{HangingPosts, StubStore};

const POST_KEYS: [&str; 6] = [
    "slug",
    "title",
    "body",
    "author_id",
    "created_at",
    "updated_at",
];

fn use_case(store: StubStore) -> (GetPost, Arc<StubStore>) {
    let store = Arc::new(store);
    (GetPost::new(store.clone(), store.clone()), store)
}

fn member() -> Arc<dyn Principal> {
    Arc::new(AuthenticatedUser::new(Uuid::new_v4(), "member@example.com"))
}

fn anonymous() -> Arc<dyn Principal> {
    Arc::new(Anonymous)
}

fn keys(document: &Value) -> Vec<String> {
    let mut keys: Vec<String> = document.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

#[tokio::test]
async fn test_default_fields_return_post_only() {
    let (get_post, store) = use_case(StubStore::with_hello_world());

    let document = get_post
        .handle(Request::new("hello-world", member()))
        .await
        .unwrap();
    let json = serde_json::to_value(&document).unwrap();

    let mut expected: Vec<String> = POST_KEYS.iter().map(|k| k.to_string()).collect();
    expected.sort();
    assert_eq!(keys(&json), expected);
    assert_eq!(json["title"], "Hello, World");
    assert_eq!(store.comment_listings.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_post_is_not_found_for_any_request() {
    let (get_post, store) = use_case(StubStore::with_hello_world());

    for principal in [member(), anonymous()] {
        for fields in [None, Some("permissions,comments"), Some("bogus")] {
            let mut request = Request::new("no-such-post", principal.clone());
            request.fields = fields.map(String::from);

            let err = get_post.handle(request).await.unwrap_err();
            assert!(err.is_not_found());
        }
    }
    assert_eq!(store.comment_listings.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_empty_slug_is_not_found_without_lookup() {
    let (get_post, store) = use_case(StubStore::with_hello_world());

    let err = get_post
        .handle(Request::new("  ", anonymous()))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(store.post_lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_permissions_follow_authentication() {
    let (get_post, _) = use_case(StubStore::with_hello_world());

    let as_member = get_post
        .handle(Request::new("hello-world", member()).with_fields("permissions"))
        .await
        .unwrap();
    let as_anonymous = get_post
        .handle(Request::new("hello-world", anonymous()).with_fields("permissions"))
        .await
        .unwrap();

    assert_eq!(
        as_member.permissions,
        Some(Permissions {
            create_comment: true
        })
    );
    assert_eq!(
        as_anonymous.permissions,
        Some(Permissions {
            create_comment: false
        })
    );
    assert!(as_member.comments.is_none());
}

#[tokio::test]
async fn test_comment_failure_degrades_to_empty_list() {
    let (get_post, store) = use_case(StubStore::with_hello_world().failing_comments());

    let document = get_post
        .handle(Request::new("hello-world", anonymous()).with_fields("comments"))
        .await
        .unwrap();
    let json = serde_json::to_value(&document).unwrap();

    assert_eq!(json["comments"], Value::Array(vec![]));
    assert_eq!(json["slug"], "hello-world");
    assert_eq!(store.comment_listings.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_field_order_does_not_matter() {
    let (get_post, _) = use_case(StubStore::with_hello_world());
    let principal = member();

    let a = get_post
        .handle(Request::new("hello-world", principal.clone()).with_fields("permissions,comments"))
        .await
        .unwrap();
    let b = get_post
        .handle(Request::new("hello-world", principal).with_fields("comments,permissions"))
        .await
        .unwrap();

    assert_eq!(a, b);
}

#[tokio::test]
async fn test_unknown_fields_are_ignored() {
    let (get_post, _) = use_case(StubStore::with_hello_world());

    let document = get_post
        .handle(Request::new("hello-world", anonymous()).with_fields("bogus,comments"))
        .await
        .unwrap();

    assert_eq!(document.comments.map(|c| c.len()), Some(2));
    assert!(document.permissions.is_none());
    assert!(document.title.is_some());
}

#[tokio::test]
async fn test_full_document_keeps_comment_order() {
    let store = StubStore::with_hello_world();
    let expected_comments = store.comments_for("hello-world");
    let (get_post, _) = use_case(store);

    let document = get_post
        .handle(Request::new("hello-world", member()).with_fields("permissions,comments"))
        .await
        .unwrap();

    assert_eq!(document.slug.as_deref(), Some("hello-world"));
    assert_eq!(
        document.permissions,
        Some(Permissions {
            create_comment: true
        })
    );
    assert_eq!(document.comments, Some(expected_comments));
}

#[tokio::test]
async fn test_named_post_fields_narrow_output() {
    let (get_post, _) = use_case(StubStore::with_hello_world());

    let document = get_post
        .handle(Request::new("hello-world", anonymous()).with_fields("title,body"))
        .await
        .unwrap();
    let json = serde_json::to_value(&document).unwrap();

    assert_eq!(keys(&json), vec!["body".to_string(), "title".to_string()]);
}

#[tokio::test]
async fn test_post_store_failure_is_internal() {
    let (get_post, _) = use_case(StubStore::with_hello_world().failing_posts());

    let err = get_post
        .handle(Request::new("hello-world", anonymous()))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Internal(_)));
}

#[tokio::test]
async fn test_cancelled_token_short_circuits() {
    let (get_post, _) = use_case(StubStore::with_hello_world());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = get_post
        .handle_cancellable(Request::new("hello-world", anonymous()), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Cancelled));
}

#[tokio::test]
async fn test_cancellation_aborts_hanging_lookup() {
    let comments = Arc::new(StubStore::default());
    let get_post = GetPost::new(Arc::new(HangingPosts), comments);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        get_post.handle_cancellable(Request::new("hello-world", anonymous()), &cancel),
    )
    .await
    .expect("cancellation should resolve promptly");

    assert!(matches!(result, Err(DomainError::Cancelled)));
}
