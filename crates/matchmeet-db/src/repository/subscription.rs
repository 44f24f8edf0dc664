//! SurrealDB implementation of [`SubscriptionRepository`].

use chrono::{DateTime, Utc};
use matchmeet_core::error::MatchmeetResult;
use matchmeet_core::models::subscription::{CreateSubscription, Subscription};
use matchmeet_core::repository::SubscriptionRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct SubscriptionRow {
    email: String,
    token: String,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct SubscriptionRowWithId {
    record_id: String,
    email: String,
    token: String,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SubscriptionRow {
    fn into_subscription(self, id: Uuid) -> Subscription {
        Subscription {
            id,
            email: self.email,
            token: self.token,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl SubscriptionRowWithId {
    fn try_into_subscription(self) -> Result<Subscription, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Migration(format!("invalid UUID: {e}")))?;
        Ok(Subscription {
            id,
            email: self.email,
            token: self.token,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the Subscription repository.
#[derive(Clone)]
pub struct SurrealSubscriptionRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealSubscriptionRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> SubscriptionRepository for SurrealSubscriptionRepository<C> {
    async fn create(&self, input: CreateSubscription) -> MatchmeetResult<Subscription> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('subscription', $id) SET \
                 email = $email, \
                 token = $token, \
                 active = true",
            )
            .bind(("id", id_str.clone()))
            .bind(("email", input.email))
            .bind(("token", input.token))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Migration(e.to_string()))?;

        let rows: Vec<SubscriptionRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "subscription".into(),
            id: id_str,
        })?;

        Ok(row.into_subscription(id))
    }

    async fn get_by_id(&self, id: Uuid) -> MatchmeetResult<Subscription> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('subscription', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<SubscriptionRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "subscription".into(),
            id: id_str,
        })?;

        Ok(row.into_subscription(id))
    }

    async fn get_by_email(&self, email: &str) -> MatchmeetResult<Subscription> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM subscription \
                 WHERE email = $email",
            )
            .bind(("email", email.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<SubscriptionRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "subscription".into(),
            id: format!("email={email}"),
        })?;

        Ok(row.try_into_subscription()?)
    }

    async fn reissue_token(&self, id: Uuid, token: &str) -> MatchmeetResult<Subscription> {
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "UPDATE type::record('subscription', $id) SET \
                 token = $token, updated_at = time::now()",
            )
            .bind(("id", id_str.clone()))
            .bind(("token", token.to_string()))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Migration(e.to_string()))?;

        let rows: Vec<SubscriptionRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "subscription".into(),
            id: id_str,
        })?;

        Ok(row.into_subscription(id))
    }

    async fn deactivate(&self, id: Uuid) -> MatchmeetResult<()> {
        self.db
            .query(
                "UPDATE type::record('subscription', $id) SET \
                 active = false, updated_at = time::now()",
            )
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
