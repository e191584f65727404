use std::sync::Arc;

use lutshop_db::PresetStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Preset storage (PostgreSQL or in-memory).
    pub store: Arc<dyn PresetStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
