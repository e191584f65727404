//! Repository for the `presets` table.

use lutshop_core::preset::PresetRecord;
use lutshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::preset::Preset;

const COLUMNS: &str = "id, name, description, category, price, preview_image_url, \
     preset_file_url, is_active, sort_order, created_at, updated_at";

/// Provides list/create/replace operations for presets. There is no delete.
pub struct PresetRepo;

impl PresetRepo {
    /// List every preset in display order: `sort_order` ascending, newest first
    /// within the same `sort_order`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Preset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM presets \
             ORDER BY sort_order ASC, created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Preset>(&query).fetch_all(pool).await
    }

    /// Insert a new preset, returning the created row. Any `id` on the input
    /// is ignored.
    pub async fn create(pool: &PgPool, input: &PresetRecord) -> Result<Preset, sqlx::Error> {
        let query = format!(
            "INSERT INTO presets \
                (name, description, category, price, preview_image_url, \
                 preset_file_url, is_active, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Preset>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.price)
            .bind(&input.preview_image_url)
            .bind(&input.preset_file_url)
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Replace every field of a preset and bump `updated_at`.
    ///
    /// Returns `None` when no preset has the given ID.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &PresetRecord,
    ) -> Result<Option<Preset>, sqlx::Error> {
        let query = format!(
            "UPDATE presets SET \
                name = $2, description = $3, category = $4, price = $5, \
                preview_image_url = $6, preset_file_url = $7, \
                is_active = $8, sort_order = $9, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Preset>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.price)
            .bind(&input.preview_image_url)
            .bind(&input.preset_file_url)
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }
}
