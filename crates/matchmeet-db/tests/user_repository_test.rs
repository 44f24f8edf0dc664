//! Integration tests for the User repository using in-memory SurrealDB.

use matchmeet_core::error::MatchmeetError;
use matchmeet_core::models::user::CreateUser;
use matchmeet_core::repository::UserRepository;
use matchmeet_db::repository::SurrealUserRepository;
use matchmeet_db::verify_password;
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

fn alice() -> CreateUser {
    CreateUser {
        email: "alice@example.com".into(),
        first_name: "Alice".into(),
        last_name: "Anders".into(),
        password: "correct-horse-battery".into(),
    }
}

#[tokio::test]
async fn create_and_get_user() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo.create(alice()).await.unwrap();

    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.first_name, "Alice");
    assert_eq!(user.last_name, "Anders");

    // Password should be hashed, not stored in plaintext.
    assert_ne!(user.password_hash, "correct-horse-battery");
    assert!(user.password_hash.starts_with("$argon2id$"));

    let fetched = repo.get_by_id(user.id).await.unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.email, "alice@example.com");
}

#[tokio::test]
async fn password_verification() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo.create(alice()).await.unwrap();

    assert!(verify_password("correct-horse-battery", &user.password_hash, None).unwrap());
    assert!(!verify_password("wrong-password", &user.password_hash, None).unwrap());
}

#[tokio::test]
async fn password_with_pepper() {
    let db = setup().await;
    let pepper = "server-secret-pepper".to_string();
    let repo = SurrealUserRepository::with_pepper(db, pepper.clone());

    let user = repo.create(alice()).await.unwrap();

    assert!(verify_password("correct-horse-battery", &user.password_hash, Some(&pepper)).unwrap());
    // Without the pepper the hash must not verify.
    assert!(!verify_password("correct-horse-battery", &user.password_hash, None).unwrap());
}

#[tokio::test]
async fn get_user_by_email() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo.create(alice()).await.unwrap();

    let fetched = repo.get_by_email("alice@example.com").await.unwrap();
    assert_eq!(fetched.id, user.id);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let err = repo.get_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, MatchmeetError::NotFound { .. }));

    let err = repo.get_by_email("nobody@example.com").await.unwrap_err();
    assert!(matches!(err, MatchmeetError::NotFound { .. }));
}

#[tokio::test]
async fn duplicate_email_rejected() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    repo.create(alice()).await.unwrap();

    let result = repo
        .create(CreateUser {
            email: "alice@example.com".into(),
            first_name: "Other".into(),
            last_name: "Person".into(),
            password: "different".into(),
        })
        .await;

    assert!(result.is_err(), "duplicate email should be rejected");
}
