//! SurrealDB repository implementations.

mod subscription;
mod user;

pub use subscription::SurrealSubscriptionRepository;
pub use user::{SurrealUserRepository, verify_password};
