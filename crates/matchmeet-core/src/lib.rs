//! matchmeet core — domain models, data-access and mailer ports, and the
//! shared error type.

pub mod error;
pub mod mailer;
pub mod models;
pub mod repository;
