//! matchmeet database — SurrealDB connection management and repository
//! implementations for the `user` and `subscription` collections.

mod connection;
mod error;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use repository::verify_password;
pub use schema::{run_migrations, schema_v1};
