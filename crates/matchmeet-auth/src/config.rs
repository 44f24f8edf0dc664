//! Authentication configuration.

/// Configuration for the authentication handlers.
///
/// Constructed once at process start (the server crate resolves it from
/// the environment) and passed into [`crate::service::AuthService`].
/// Handlers never read ambient state.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// PEM-encoded Ed25519 private key for session token signing.
    pub jwt_private_key_pem: String,
    /// PEM-encoded Ed25519 public key for session token verification.
    pub jwt_public_key_pem: String,
    /// Issuer (`iss` claim): the service base URL, already resolved for
    /// the running environment (debug vs production).
    pub jwt_issuer: String,
    /// Session token and login cookie lifetime in seconds
    /// (default: 86_400 = 1 day).
    pub session_lifetime_secs: u64,
    /// Cookie lifetime granted on registration in seconds
    /// (default: 31_536_000 = 365 days).
    pub registration_cookie_max_age_secs: u64,
    /// Minimum interval between confirmation emails per address in
    /// seconds (default: 900 = 15 minutes).
    pub resubscribe_window_secs: u64,
    /// Optional pepper prepended to passwords before Argon2id
    /// verification; must match the pepper used at hashing time.
    pub pepper: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_private_key_pem: String::new(),
            jwt_public_key_pem: String::new(),
            jwt_issuer: "http://localhost:3000".into(),
            session_lifetime_secs: 86_400,
            registration_cookie_max_age_secs: 31_536_000,
            resubscribe_window_secs: 900,
            pepper: None,
        }
    }
}
