//! Pending-registration subscription model.
//!
//! A subscription is created when an email address first asks to join and
//! holds the confirmation token mailed to that address. It is flipped
//! inactive exactly once, when a matching user completes registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub email: String,
    /// Confirmation token mailed to the subscriber (36 lowercase hex chars).
    pub token: String,
    /// `false` once registration has completed. Terminal, never reset.
    pub active: bool,
    pub created_at: DateTime<Utc>,
    /// Touched on every token issuance; drives the resubscribe throttle.
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubscription {
    pub email: String,
    pub token: String,
}
