//! Integration tests for the Subscription repository using in-memory
//! SurrealDB.

use matchmeet_core::error::MatchmeetError;
use matchmeet_core::models::subscription::CreateSubscription;
use matchmeet_core::repository::SubscriptionRepository;
use matchmeet_db::repository::SurrealSubscriptionRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

/// Helper: spin up an in-memory DB with the schema applied.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    matchmeet_db::run_migrations(&db).await.unwrap();
    db
}

#[tokio::test]
async fn create_and_get_subscription() {
    let db = setup().await;
    let repo = SurrealSubscriptionRepository::new(db);

    let sub = repo
        .create(CreateSubscription {
            email: "pending@example.com".into(),
            token: "aaaabbbbccccddddeeeeffff000011112222".into(),
        })
        .await
        .unwrap();

    assert_eq!(sub.email, "pending@example.com");
    assert_eq!(sub.token, "aaaabbbbccccddddeeeeffff000011112222");
    assert!(sub.active, "new subscriptions start active");

    let fetched = repo.get_by_id(sub.id).await.unwrap();
    assert_eq!(fetched.id, sub.id);
    assert_eq!(fetched.token, sub.token);

    let by_email = repo.get_by_email("pending@example.com").await.unwrap();
    assert_eq!(by_email.id, sub.id);
}

#[tokio::test]
async fn unknown_subscription_is_not_found() {
    let db = setup().await;
    let repo = SurrealSubscriptionRepository::new(db);

    let err = repo.get_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, MatchmeetError::NotFound { .. }));

    let err = repo.get_by_email("nobody@example.com").await.unwrap_err();
    assert!(matches!(err, MatchmeetError::NotFound { .. }));
}

#[tokio::test]
async fn reissue_replaces_token_and_touches_updated_at() {
    let db = setup().await;
    let repo = SurrealSubscriptionRepository::new(db);

    let sub = repo
        .create(CreateSubscription {
            email: "pending@example.com".into(),
            token: "old-token".into(),
        })
        .await
        .unwrap();

    let updated = repo.reissue_token(sub.id, "new-token").await.unwrap();

    assert_eq!(updated.id, sub.id);
    assert_eq!(updated.token, "new-token");
    assert!(updated.active, "reissue must not deactivate");
    assert!(
        updated.updated_at >= sub.updated_at,
        "reissue must touch updated_at"
    );
    assert_eq!(updated.created_at, sub.created_at);
}

#[tokio::test]
async fn deactivate_is_one_way() {
    let db = setup().await;
    let repo = SurrealSubscriptionRepository::new(db);

    let sub = repo
        .create(CreateSubscription {
            email: "pending@example.com".into(),
            token: "token".into(),
        })
        .await
        .unwrap();

    repo.deactivate(sub.id).await.unwrap();

    let fetched = repo.get_by_id(sub.id).await.unwrap();
    assert!(!fetched.active);

    // Deactivating again is harmless and leaves the record inactive.
    repo.deactivate(sub.id).await.unwrap();
    let fetched = repo.get_by_id(sub.id).await.unwrap();
    assert!(!fetched.active);
}

#[tokio::test]
async fn duplicate_email_rejected() {
    let db = setup().await;
    let repo = SurrealSubscriptionRepository::new(db);

    repo.create(CreateSubscription {
        email: "pending@example.com".into(),
        token: "first".into(),
    })
    .await
    .unwrap();

    let result = repo
        .create(CreateSubscription {
            email: "pending@example.com".into(),
            token: "second".into(),
        })
        .await;

    assert!(
        result.is_err(),
        "at most one subscription record per email"
    );
}
