//! The storage seam used by the HTTP service.

use async_trait::async_trait;
use lutshop_core::preset::PresetRecord;
use lutshop_core::types::DbId;

use crate::models::preset::Preset;
use crate::repositories::PresetRepo;
use crate::DbPool;

/// Errors surfaced by a [`PresetStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Backing storage for the preset collection resource.
#[async_trait]
pub trait PresetStore: Send + Sync {
    /// Every preset, in display order.
    async fn list(&self) -> Result<Vec<Preset>, StoreError>;

    /// Insert a preset and return the stored row with its assigned id.
    async fn create(&self, input: &PresetRecord) -> Result<Preset, StoreError>;

    /// Replace every field of preset `id`. `None` when it does not exist.
    async fn replace(&self, id: DbId, input: &PresetRecord)
        -> Result<Option<Preset>, StoreError>;

    /// Whether the store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgPresetStore {
    pool: DbPool,
}

impl PgPresetStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PresetStore for PgPresetStore {
    async fn list(&self) -> Result<Vec<Preset>, StoreError> {
        Ok(PresetRepo::list(&self.pool).await?)
    }

    async fn create(&self, input: &PresetRecord) -> Result<Preset, StoreError> {
        Ok(PresetRepo::create(&self.pool, input).await?)
    }

    async fn replace(
        &self,
        id: DbId,
        input: &PresetRecord,
    ) -> Result<Option<Preset>, StoreError> {
        Ok(PresetRepo::replace(&self.pool, id, input).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
