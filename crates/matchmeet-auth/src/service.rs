//! Registration, login, and subscription handlers.
//!
//! Each handler is a stateless request-scoped operation: validate input,
//! read/write the store, issue a token, and hand the session cookie back
//! as data for the transport boundary to apply.

use chrono::Utc;
use matchmeet_core::error::MatchmeetError;
use matchmeet_core::mailer::{ConfirmationEmail, ConfirmationMailer};
use matchmeet_core::models::subscription::CreateSubscription;
use matchmeet_core::models::user::CreateUser;
use matchmeet_core::repository::{SubscriptionRepository, UserRepository};
use tracing::warn;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::cookie::SessionCookie;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// Input for the registration flow.
#[derive(Debug)]
pub struct RegisterInput {
    /// Confirmation token the subscriber received by email.
    pub subscribe_token: String,
    pub first_name: String,
    pub last_name: String,
    /// Identifier of the pending subscription record.
    pub subscription_id: Uuid,
    pub password: String,
    pub password_repeat: String,
}

/// Successful registration result.
#[derive(Debug)]
pub struct RegisterOutput {
    /// Signed session token.
    pub token: String,
    pub message: String,
    /// Long-lived session cookie for the transport boundary to set.
    pub session_cookie: SessionCookie,
}

/// Input for the login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed session token.
    pub token: String,
    /// Session cookie bounded by the configured session lifetime.
    pub session_cookie: SessionCookie,
}

/// Input for the subscription flow.
#[derive(Debug)]
pub struct SubscribeInput {
    pub email: String,
}

/// Subscription result. A throttled request is a soft rejection and still
/// lands here; only the message differs.
#[derive(Debug)]
pub struct SubscribeOutput {
    pub message: String,
}

/// Authentication service.
///
/// Generic over repository and mailer implementations so that the handler
/// layer has no dependency on the database crate or any mail carrier.
pub struct AuthService<U: UserRepository, S: SubscriptionRepository, M: ConfirmationMailer> {
    user_repo: U,
    subscription_repo: S,
    mailer: M,
    config: AuthConfig,
}

impl<U: UserRepository, S: SubscriptionRepository, M: ConfirmationMailer> AuthService<U, S, M> {
    pub fn new(user_repo: U, subscription_repo: S, mailer: M, config: AuthConfig) -> Self {
        Self {
            user_repo,
            subscription_repo,
            mailer,
            config,
        }
    }

    /// Complete a registration against a pending subscription.
    ///
    /// The user record is created before the session token is issued and
    /// before the subscription is deactivated; a deactivation failure is
    /// logged and swallowed, never propagated.
    pub async fn register(&self, input: RegisterInput) -> Result<RegisterOutput, AuthError> {
        // 1. Mismatch beats field-presence validation.
        if input.password != input.password_repeat {
            return Err(AuthError::PasswordMismatch);
        }

        // 2. Required fields, reported by client-facing field name.
        let mut missing = Vec::new();
        if input.first_name.is_empty() {
            missing.push("firstName");
        }
        if input.last_name.is_empty() {
            missing.push("lastName");
        }
        if input.password.is_empty() {
            missing.push("password");
        }
        if input.password_repeat.is_empty() {
            missing.push("passwordRepeat");
        }
        if !missing.is_empty() {
            return Err(AuthError::MissingRequiredFields { missing });
        }

        // 3. Pending subscription lookup.
        let subscription = match self.subscription_repo.get_by_id(input.subscription_id).await {
            Ok(s) => s,
            Err(MatchmeetError::NotFound { .. }) => return Err(AuthError::UnknownSubscriber),
            Err(e) => return Err(e.into()),
        };

        // 4. The confirmation token is one-time use.
        if !subscription.active {
            return Err(AuthError::AlreadyRegistered);
        }

        // 5. Exact match against the stored token.
        if subscription.token != input.subscribe_token {
            return Err(AuthError::InvalidToken);
        }

        // 6. Create the user; the store hashes the password.
        let user = self
            .user_repo
            .create(CreateUser {
                email: subscription.email.clone(),
                first_name: input.first_name,
                last_name: input.last_name,
                password: input.password,
            })
            .await?;

        // 7. Session token, then best-effort deactivation.
        let session_token = token::issue_session_token(&user.id.to_string(), &self.config)?;

        if let Err(e) = self.subscription_repo.deactivate(subscription.id).await {
            warn!(
                subscription_id = %subscription.id,
                error = %e,
                "failed to deactivate subscription after registration"
            );
        }

        let session_cookie = SessionCookie::for_registration(session_token.clone(), &self.config);
        Ok(RegisterOutput {
            token: session_token,
            message: "Successfully registered".into(),
            session_cookie,
        })
    }

    /// Authenticate a user with email + password and issue a session.
    pub async fn login(&self, input: LoginInput) -> Result<LoginOutput, AuthError> {
        // 1. Look up user by email.
        let user = match self.user_repo.get_by_email(&input.email).await {
            Ok(u) => u,
            Err(MatchmeetError::NotFound { .. }) => return Err(AuthError::NoSuchUser),
            Err(e) => return Err(e.into()),
        };

        // 2. Verify password against the stored hash.
        let valid = password::verify_password(
            &input.password,
            &user.password_hash,
            self.config.pepper.as_deref(),
        )?;

        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        // 3. Issue session token and cookie.
        let session_token = token::issue_session_token(&user.id.to_string(), &self.config)?;
        let session_cookie = SessionCookie::for_login(session_token.clone(), &self.config);

        Ok(LoginOutput {
            token: session_token,
            session_cookie,
        })
    }

    /// Issue (or reissue) an email-confirmation token, throttled to one
    /// email per address per configured window.
    pub async fn subscribe(&self, input: SubscribeInput) -> Result<SubscribeOutput, AuthError> {
        // 1. Existing subscription, if any. Not-found is the normal
        //    new-subscriber path.
        let subscriber = match self.subscription_repo.get_by_email(&input.email).await {
            Ok(s) => Some(s),
            Err(MatchmeetError::NotFound { .. }) => None,
            Err(e) => return Err(e.into()),
        };

        // 2. Inactive means registration already completed.
        if let Some(s) = &subscriber {
            if !s.active {
                return Err(AuthError::AlreadyRegisteredInactive);
            }
        }

        // 3. Throttle on time since the last token issuance. Soft
        //    rejection: no new token, no mail, no error.
        if let Some(s) = &subscriber {
            let elapsed = Utc::now().signed_duration_since(s.updated_at).num_seconds();
            if elapsed <= self.config.resubscribe_window_secs as i64 {
                return Ok(SubscribeOutput {
                    message: format!(
                        "Confirmation emails can only be sent every {} minutes.",
                        self.config.resubscribe_window_secs / 60
                    ),
                });
            }
        }

        // 4. Fresh token: reissue on the existing record or create one.
        let confirmation_token = token::generate_confirmation_token();
        let (subscription, message) = match subscriber {
            Some(existing) => {
                let updated = self
                    .subscription_repo
                    .reissue_token(existing.id, &confirmation_token)
                    .await?;
                let message = format!(
                    "A new confirmation email has been sent to {}",
                    updated.email
                );
                (updated, message)
            }
            None => {
                let created = self
                    .subscription_repo
                    .create(CreateSubscription {
                        email: input.email,
                        token: confirmation_token,
                    })
                    .await?;
                let message = format!("A confirmation email as been sent to {}", created.email);
                (created, message)
            }
        };

        // 5. Dispatch the confirmation mail. The outcome is logged but
        //    never surfaced to the caller.
        let mail = ConfirmationEmail {
            email: subscription.email.clone(),
            subscription_id: subscription.id,
            token: subscription.token,
        };
        if let Err(e) = self.mailer.send_confirmation(mail).await {
            warn!(
                email = %subscription.email,
                error = %e,
                "confirmation mail dispatch failed"
            );
        }

        Ok(SubscribeOutput { message })
    }
}
