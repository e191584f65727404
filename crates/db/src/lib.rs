//! Storage for the preset collection resource.
//!
//! [`PgPresetStore`] persists presets in PostgreSQL through [`PresetRepo`];
//! [`MemoryPresetStore`] keeps them in process for local development and
//! tests. Both sit behind the [`PresetStore`] trait.
//!
//! [`PgPresetStore`]: store::PgPresetStore
//! [`PresetRepo`]: repositories::PresetRepo
//! [`MemoryPresetStore`]: memory::MemoryPresetStore
//! [`PresetStore`]: store::PresetStore

use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use memory::MemoryPresetStore;
pub use store::{PgPresetStore, PresetStore, StoreError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
