//! Route definitions for the preset collection resource, mounted at `/presets`.
//!
//! ```text
//! GET    /          list_presets
//! POST   /          create_preset
//! PUT    /{id}      update_preset
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::presets;
use crate::state::AppState;

/// Preset routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(presets::list_presets).post(presets::create_preset),
        )
        .route("/{id}", put(presets::update_preset))
}
