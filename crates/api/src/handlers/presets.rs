//! Handlers for the preset collection resource.
//!
//! The resource offers list, create, and full replace. There is no delete;
//! presets are hidden from customers by clearing `is_active` instead.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use lutshop_core::error::CoreError;
use lutshop_core::preset::{self, PresetRecord};
use lutshop_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, MessageResponse, PresetListResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /presets
// ---------------------------------------------------------------------------

/// List every preset in display order.
pub async fn list_presets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let presets = state.store.list().await?;
    tracing::debug!(count = presets.len(), "Listed presets");
    Ok(Json(PresetListResponse { presets }))
}

// ---------------------------------------------------------------------------
// POST /presets
// ---------------------------------------------------------------------------

/// Create a new preset. Any `id` in the body is ignored.
pub async fn create_preset(
    State(state): State<AppState>,
    Json(input): Json<PresetRecord>,
) -> AppResult<impl IntoResponse> {
    preset::validate_submission(&input)?;

    let created = state.store.create(&input).await?;
    tracing::info!(id = created.id, name = %created.name, "Preset created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: created.id,
            message: "Preset created",
            preset: created,
        }),
    ))
}

// ---------------------------------------------------------------------------
// PUT /presets/{id}
// ---------------------------------------------------------------------------

/// Replace every field of an existing preset.
pub async fn update_preset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PresetRecord>,
) -> AppResult<impl IntoResponse> {
    preset::validate_submission(&input)?;

    let updated = state
        .store
        .replace(id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Preset",
            id,
        }))?;
    tracing::info!(id = updated.id, is_active = updated.is_active, "Preset updated");
    Ok(Json(MessageResponse {
        message: "Preset updated",
    }))
}
