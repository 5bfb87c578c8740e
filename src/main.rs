//! # Recruitment Server
//!
//! Job recruitment backend: aspirants publish CVs and apply to offers,
//! companies publish offers and review applications.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use recruitment_server::config::Settings;
use recruitment_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    recruitment_server::telemetry::init_tracing();

    info!("Starting Recruitment Server...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        strict_status_transitions = settings.recruitment.strict_status_transitions,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
