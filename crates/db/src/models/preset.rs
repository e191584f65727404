//! Preset row model.

use lutshop_core::preset::PresetRecord;
use lutshop_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `presets` table.
///
/// Create and replace requests use [`PresetRecord`] as their input DTO; the
/// row adds the store-managed timestamps.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Preset {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: i32,
    pub preview_image_url: String,
    pub preset_file_url: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Preset> for PresetRecord {
    fn from(row: Preset) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            category: row.category,
            price: row.price,
            preview_image_url: row.preview_image_url,
            preset_file_url: row.preset_file_url,
            is_active: row.is_active,
            sort_order: row.sort_order,
        }
    }
}
