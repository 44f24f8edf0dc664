//! matchmeet auth — registration, login, and email-confirmation
//! subscription handlers, with JWT session issuance.

pub mod config;
pub mod cookie;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use cookie::{SESSION_COOKIE_NAME, SessionCookie};
pub use error::AuthError;
pub use service::{AuthService, LoginInput, LoginOutput, RegisterInput, RegisterOutput};
pub use token::SessionTokenClaims;
