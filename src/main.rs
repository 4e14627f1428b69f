use actix_web::{web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;

mod api;
mod config;
mod services;

use services::clock::{Clock, SystemClock};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv().ok();

    // Initialize logger
    env_logger::init();

    // Load configuration
    let config = config::AppConfig::new().context("Failed to load configuration")?;

    log::info!(
        "Starting server on {}:{}",
        config.server.host,
        config.server.port
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let started = web::Data::new(api::health::StartTime::default());

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(clock.clone()))
            .app_data(started.clone())
            .wrap(actix_cors::Cors::permissive()) // Configure properly in production
            .configure(api::configure)
    })
    .bind((config.server.host.as_str(), config.server.port))
    .with_context(|| {
        format!(
            "Failed to bind {}:{}",
            config.server.host, config.server.port
        )
    })?
    .run()
    .await?;

    Ok(())
}
