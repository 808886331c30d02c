// orderdesk_app/src/db/mod.rs

//! Postgres implementations of the orderdesk store traits.

pub mod orders;
pub mod products;

pub use orders::PgOrderStore;
pub use products::PgProductStore;

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Opens the pool and, if configured, applies the bundled migrations.
pub async fn connect(config: &AppConfig) -> Result<PgPool> {
  let database_url = config
    .database_url
    .as_deref()
    .ok_or_else(|| AppError::Config("DATABASE_URL is not set".to_string()))?;

  let pool = PgPoolOptions::new()
    .max_connections(config.database_max_connections)
    .connect(database_url)
    .await?;
  tracing::info!("Successfully connected to the database.");

  if config.run_migrations {
    sqlx::migrate!("./migrations")
      .run(&pool)
      .await
      .map_err(|e| AppError::Internal(format!("Database migration failed: {}", e)))?;
    tracing::info!("Database migrations applied.");
  }

  Ok(pool)
}
