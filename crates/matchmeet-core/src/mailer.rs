//! Outbound mail port.
//!
//! The concrete carrier (SMTP relay, HTTP mail API) lives at the
//! transport boundary; handlers only see this trait.

use uuid::Uuid;

use crate::error::MatchmeetResult;

/// Payload for a subscription confirmation email.
#[derive(Debug, Clone)]
pub struct ConfirmationEmail {
    pub email: String,
    pub subscription_id: Uuid,
    pub token: String,
}

pub trait ConfirmationMailer: Send + Sync {
    fn send_confirmation(
        &self,
        mail: ConfirmationEmail,
    ) -> impl Future<Output = MatchmeetResult<()>> + Send;
}
