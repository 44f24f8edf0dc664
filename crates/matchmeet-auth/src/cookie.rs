//! Session cookie value type.
//!
//! Handlers return the cookie as plain data; the transport boundary
//! applies it to the outgoing response. Handlers never touch response
//! state themselves.

use crate::config::AuthConfig;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: &'static str,
    pub value: String,
    pub max_age_secs: u64,
    pub http_only: bool,
}

impl SessionCookie {
    /// Cookie for a login session, bounded by the configured session
    /// lifetime.
    pub fn for_login(token: String, config: &AuthConfig) -> Self {
        Self {
            name: SESSION_COOKIE_NAME,
            value: token,
            max_age_secs: config.session_lifetime_secs,
            http_only: true,
        }
    }

    /// Long-lived cookie granted on registration.
    pub fn for_registration(token: String, config: &AuthConfig) -> Self {
        Self {
            name: SESSION_COOKIE_NAME,
            value: token,
            max_age_secs: config.registration_cookie_max_age_secs,
            http_only: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_cookie_uses_session_lifetime() {
        let config = AuthConfig::default();
        let cookie = SessionCookie::for_login("jwt".into(), &config);
        assert_eq!(cookie.name, "token");
        assert_eq!(cookie.max_age_secs, config.session_lifetime_secs);
        assert!(cookie.http_only);
    }

    #[test]
    fn registration_cookie_is_long_lived() {
        let config = AuthConfig::default();
        let cookie = SessionCookie::for_registration("jwt".into(), &config);
        assert_eq!(cookie.max_age_secs, 31_536_000);
        assert!(cookie.http_only);
    }
}
