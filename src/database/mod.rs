use anyhow::Result;
use sqlx::{Sqlite, migrate::MigrateDatabase, sqlite::SqlitePool};
use thiserror::Error;
use uuid::Uuid;

pub mod models;
pub mod repositories;
pub mod types;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Location {0} not found")]
    NotFound(Uuid),

    #[error("Location store unavailable: {0}")]
    BackendUnavailable(#[from] sqlx::Error),
}

pub async fn init_database(database_url: &str) -> Result<SqlitePool> {
    // Create database if it doesn't exist
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        log::info!("Creating database {}", database_url);
        Sqlite::create_database(database_url).await?;
    } else {
        log::debug!("Database {} already exists", database_url);
    }

    let pool = SqlitePool::connect(database_url).await?;

    log::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("Migrations completed successfully");

    Ok(pool)
}
