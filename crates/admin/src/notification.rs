//! Transient user-facing notifications (toasts).
//!
//! Notifications are emitted on a channel and never stored in
//! [`AdminState`](crate::state::AdminState).

pub const TITLE_SUCCESS: &str = "Success";
pub const TITLE_ERROR: &str = "Error";
pub const TITLE_STATUS_CHANGED: &str = "Status changed";

pub const MSG_LOAD_FAILED: &str = "Could not load presets";
pub const MSG_SAVE_FAILED: &str = "Could not save preset";
pub const MSG_TOGGLE_FAILED: &str = "Could not change status";
pub const MSG_CREATED: &str = "Preset added";
pub const MSG_UPDATED: &str = "Preset updated";
pub const MSG_HIDDEN: &str = "Preset hidden";
pub const MSG_ACTIVATED: &str = "Preset activated";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Default,
        }
    }

    /// A destructive notification with the generic error title.
    pub fn failure(description: &str) -> Self {
        Self {
            title: TITLE_ERROR.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}
