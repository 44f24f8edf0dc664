//! Tracing-backed stand-in for the confirmation mailer port.
//!
//! The real carrier lives outside this repository; until it is wired in,
//! dispatched confirmations are logged so the flow stays observable in
//! development.

use matchmeet_core::error::MatchmeetResult;
use matchmeet_core::mailer::{ConfirmationEmail, ConfirmationMailer};
use tracing::info;

#[derive(Clone, Default)]
pub struct LogMailer;

impl ConfirmationMailer for LogMailer {
    async fn send_confirmation(&self, mail: ConfirmationEmail) -> MatchmeetResult<()> {
        info!(
            email = %mail.email,
            subscription_id = %mail.subscription_id,
            "dispatching confirmation email"
        );
        Ok(())
    }
}
