//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations live in the
//! database crate; the handler layer only depends on these traits.

use uuid::Uuid;

use crate::error::MatchmeetResult;
use crate::models::{
    subscription::{CreateSubscription, Subscription},
    user::{CreateUser, User},
};

pub trait UserRepository: Send + Sync {
    /// Persist a new user. The raw password in the input is hashed by the
    /// implementation; it never reaches the stored record.
    fn create(&self, input: CreateUser) -> impl Future<Output = MatchmeetResult<User>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = MatchmeetResult<User>> + Send;
    fn get_by_email(&self, email: &str) -> impl Future<Output = MatchmeetResult<User>> + Send;
}

pub trait SubscriptionRepository: Send + Sync {
    fn create(
        &self,
        input: CreateSubscription,
    ) -> impl Future<Output = MatchmeetResult<Subscription>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = MatchmeetResult<Subscription>> + Send;
    fn get_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = MatchmeetResult<Subscription>> + Send;

    /// Replace the confirmation token and touch `updated_at`, restarting
    /// the resubscribe throttle window.
    fn reissue_token(
        &self,
        id: Uuid,
        token: &str,
    ) -> impl Future<Output = MatchmeetResult<Subscription>> + Send;

    /// Flip the record inactive. One-way: an inactive subscription is
    /// never reactivated.
    fn deactivate(&self, id: Uuid) -> impl Future<Output = MatchmeetResult<()>> + Send;
}
