// orderdesk_app/src/main.rs

mod config;
mod db;
mod errors;
mod state;
mod web;

use crate::config::{AppConfig, LogFormat, StoreBackend};
use crate::db::{PgOrderStore, PgProductStore};
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // aliased so it does not clash with the local `web` module
use orderdesk::{MemoryOrderStore, MemoryProductStore, OrderStore, ProductStore};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  let builder = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))) // RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Pretty => builder.init(),
  }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  dotenvy::dotenv().ok(); // Load .env file if present
  init_tracing(LogFormat::from_env());

  tracing::info!("Starting orderdesk server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::other(e));
    }
  };
  tracing::info!(
    store_backend = ?app_config.store_backend,
    log_format = ?app_config.log_format,
    "Configuration ready."
  );

  let (products, orders): (Arc<dyn ProductStore>, Arc<dyn OrderStore>) = match app_config.store_backend {
    StoreBackend::Postgres => {
      let pool = match db::connect(&app_config).await {
        Ok(pool) => pool,
        Err(e) => {
          tracing::error!(error = %e, "Failed to prepare the database.");
          return Err(std::io::Error::other(e));
        }
      };
      (Arc::new(PgProductStore::new(pool.clone())), Arc::new(PgOrderStore::new(pool)))
    }
    StoreBackend::Memory => {
      tracing::warn!("Using in-memory stores; data is lost on shutdown.");
      (Arc::new(MemoryProductStore::new()), Arc::new(MemoryOrderStore::new()))
    }
  };

  let app_state = AppState::from_stores(products, orders);

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
