pub mod health;
pub mod presets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /presets                 list, create
/// /presets/{id}            replace
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/presets", presets::router())
}
