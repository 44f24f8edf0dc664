//! Integration tests for schema initialization using in-memory SurrealDB.

use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

#[tokio::test]
async fn schema_migration_applies_successfully() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    matchmeet_db::run_migrations(&db).await.unwrap();

    // Verify that the tables exist by querying INFO FOR DB.
    let mut result = db.query("INFO FOR DB").await.unwrap();
    let info: Option<surrealdb_types::Value> = result.take(0).unwrap();
    let info = info.expect("INFO FOR DB should return a value");
    let info_str = format!("{:?}", info);

    assert!(info_str.contains("user"), "missing user table");
    assert!(
        info_str.contains("subscription"),
        "missing subscription table"
    );
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    matchmeet_db::run_migrations(&db).await.unwrap();
    // A second run must be a no-op, not an error.
    matchmeet_db::run_migrations(&db).await.unwrap();

    // Exactly one migration record per version.
    #[derive(Debug, surrealdb_types::SurrealValue)]
    struct CountRow {
        total: u64,
    }

    let mut result = db
        .query("SELECT count() AS total FROM _migration GROUP ALL")
        .await
        .unwrap();
    let counts: Vec<CountRow> = result.take(0).unwrap();
    assert_eq!(counts.first().map(|c| c.total), Some(1));
}

#[test]
fn schema_v1_defines_unique_email_indexes() {
    let ddl = matchmeet_db::schema_v1();
    assert!(ddl.contains("idx_user_email"));
    assert!(ddl.contains("idx_subscription_email"));
}
