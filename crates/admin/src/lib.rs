//! Preset catalog administration client.
//!
//! [`PresetAdminController`] owns the admin screen's state (the cached preset
//! list, the edit form draft, and the loading flag) and keeps it consistent
//! with the remote collection resource through a [`PresetRepository`]. Every
//! successful mutation is followed by a full reload; the local list is never
//! patched in place.
//!
//! [`PresetAdminController`]: controller::PresetAdminController
//! [`PresetRepository`]: repository::PresetRepository

pub mod config;
pub mod controller;
pub mod error;
pub mod notification;
pub mod repository;
pub mod state;

pub use config::AdminConfig;
pub use controller::PresetAdminController;
pub use error::AdminError;
pub use notification::{Notification, NotificationVariant};
pub use repository::{HttpPresetRepository, Listing, PresetRepository};
pub use state::{reconcile, AdminState};
