//! Authentication error types.

use matchmeet_core::error::MatchmeetError;
use thiserror::Error;

/// Discriminated error returned uniformly from every auth handler.
///
/// The transport layer maps [`AuthError::kind`] to protocol-level error
/// responses; `Display` carries the human-readable message shown to the
/// client.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Missing required fields: {}", missing.join(", "))]
    MissingRequiredFields { missing: Vec<&'static str> },

    #[error("You don't exist.")]
    UnknownSubscriber,

    #[error("You have already registered. Please login.")]
    AlreadyRegistered,

    #[error("Invalid token.")]
    InvalidToken,

    #[error("That email is not registered.")]
    NoSuchUser,

    #[error("That username or password is invalid.")]
    InvalidCredentials,

    #[error("That email is already registered.")]
    AlreadyRegisteredInactive,

    #[error("token subject must not be empty")]
    EmptySubject,

    #[error("cryptography error: {0}")]
    Crypto(String),

    /// Infrastructure failure, propagated unchanged from the store or
    /// mailer.
    #[error(transparent)]
    Store(MatchmeetError),
}

impl AuthError {
    /// Machine-readable kind for the transport layer's error mapping.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::PasswordMismatch => "PasswordMismatch",
            AuthError::MissingRequiredFields { .. } => "MissingRequiredFields",
            AuthError::UnknownSubscriber => "UnknownSubscriber",
            AuthError::AlreadyRegistered => "AlreadyRegistered",
            AuthError::InvalidToken => "InvalidToken",
            AuthError::NoSuchUser => "NoSuchUser",
            AuthError::InvalidCredentials => "InvalidCredentials",
            AuthError::AlreadyRegisteredInactive => "AlreadyRegisteredInactive",
            AuthError::EmptySubject => "EmptySubject",
            AuthError::Crypto(_) => "Crypto",
            AuthError::Store(_) => "Store",
        }
    }
}

impl From<MatchmeetError> for AuthError {
    fn from(err: MatchmeetError) -> Self {
        AuthError::Store(err)
    }
}

/// Coarse classification for callers that only distinguish credential
/// failures from validation failures. Both login error kinds collapse
/// into `AuthenticationFailed` so neither leaks which check rejected the
/// attempt.
impl From<AuthError> for MatchmeetError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NoSuchUser | AuthError::InvalidCredentials => {
                MatchmeetError::AuthenticationFailed {
                    reason: err.to_string(),
                }
            }
            AuthError::PasswordMismatch
            | AuthError::MissingRequiredFields { .. }
            | AuthError::UnknownSubscriber
            | AuthError::AlreadyRegistered
            | AuthError::InvalidToken
            | AuthError::AlreadyRegisteredInactive => MatchmeetError::Validation {
                message: err.to_string(),
            },
            AuthError::EmptySubject => MatchmeetError::Crypto(err.to_string()),
            AuthError::Crypto(msg) => MatchmeetError::Crypto(msg),
            AuthError::Store(inner) => inner,
        }
    }
}
