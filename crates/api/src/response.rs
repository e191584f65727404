//! Response bodies for the collection resource.
//!
//! These shapes are the wire contract the admin client depends on:
//! `GET` answers `{ "presets": [...] }`, `POST` answers with the assigned id,
//! and `PUT` answers with a message only.

use lutshop_db::models::preset::Preset;
use serde::Serialize;

/// Body of `GET /presets`.
#[derive(Debug, Serialize)]
pub struct PresetListResponse {
    pub presets: Vec<Preset>,
}

/// Body of a successful `POST /presets`.
///
/// Carries the new id at the top level plus the full stored row.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: &'static str,
    pub preset: Preset,
}

/// Body of a successful `PUT /presets/{id}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
