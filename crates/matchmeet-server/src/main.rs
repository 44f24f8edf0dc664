//! matchmeet server — application entry point.

mod config;
mod mailer;

use matchmeet_auth::service::AuthService;
use matchmeet_db::DbManager;
use matchmeet_db::repository::{SurrealSubscriptionRepository, SurrealUserRepository};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::mailer::LogMailer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("matchmeet=info".parse().unwrap()),
        )
        .json()
        .init();

    info!("Starting matchmeet server...");

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "configuration error");
            std::process::exit(1);
        }
    };

    let db = match DbManager::connect(&config.db).await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "database connection failed");
            std::process::exit(1);
        }
    };

    if let Err(e) = matchmeet_db::run_migrations(db.client()).await {
        error!(error = %e, "migrations failed");
        std::process::exit(1);
    }

    let user_repo = match config.auth.pepper.clone() {
        Some(pepper) => SurrealUserRepository::with_pepper(db.client().clone(), pepper),
        None => SurrealUserRepository::new(db.client().clone()),
    };
    let subscription_repo = SurrealSubscriptionRepository::new(db.client().clone());

    let _auth = AuthService::new(user_repo, subscription_repo, LogMailer, config.auth.clone());

    // The GraphQL transport mounts the service from here; the binary
    // parks until it is asked to stop.
    info!("auth handlers ready");

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }

    info!("matchmeet server stopped.");
}
