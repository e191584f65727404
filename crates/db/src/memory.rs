//! In-process preset store.
//!
//! Mirrors the PostgreSQL store's ordering and id assignment so the service
//! behaves identically when run without a database.

use async_trait::async_trait;
use chrono::Utc;
use lutshop_core::preset::PresetRecord;
use lutshop_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::preset::Preset;
use crate::store::{PresetStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    rows: Vec<Preset>,
}

/// A [`PresetStore`] held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryPresetStore {
    inner: RwLock<Inner>,
}

impl MemoryPresetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PresetStore for MemoryPresetStore {
    async fn list(&self) -> Result<Vec<Preset>, StoreError> {
        let inner = self.inner.read().await;
        let mut rows = inner.rows.clone();
        rows.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });
        Ok(rows)
    }

    async fn create(&self, input: &PresetRecord) -> Result<Preset, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let now = Utc::now();
        let row = Preset {
            id: inner.last_id,
            name: input.name.clone(),
            description: input.description.clone(),
            category: input.category.clone(),
            price: input.price,
            preview_image_url: input.preview_image_url.clone(),
            preset_file_url: input.preset_file_url.clone(),
            is_active: input.is_active,
            sort_order: input.sort_order,
            created_at: now,
            updated_at: now,
        };
        inner.rows.push(row.clone());
        tracing::debug!(id = row.id, "Stored preset in memory");
        Ok(row)
    }

    async fn replace(
        &self,
        id: DbId,
        input: &PresetRecord,
    ) -> Result<Option<Preset>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        row.name = input.name.clone();
        row.description = input.description.clone();
        row.category = input.category.clone();
        row.price = input.price;
        row.preview_image_url = input.preview_image_url.clone();
        row.preset_file_url = input.preset_file_url.clone();
        row.is_active = input.is_active;
        row.sort_order = input.sort_order;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
