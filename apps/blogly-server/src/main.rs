//! # Blogly Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use tracing_actix_web::TracingLogger;

use blogly_infra::database::DatabaseConnections;
use blogly_server::config::AppConfig;
use blogly_server::handlers;
use blogly_server::state::AppState;
use blogly_server::telemetry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!("Starting Blogly server on {}:{}", config.host, config.port);

    let db = DatabaseConnections::init(&config.database)
        .await
        .context("failed to connect to the database")?;

    if config.run_migrations {
        Migrator::up(&db.main, None)
            .await
            .context("failed to apply migrations")?;
        tracing::info!("Database schema is up to date");
    }

    let db = Arc::new(db);
    let state = AppState::new(db.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    // The server owned the last state clones; release the pool.
    if let Ok(db) = Arc::try_unwrap(db) {
        db.close().await.context("failed to close the database")?;
    }
    tracing::info!("Blogly server stopped");

    Ok(())
}
