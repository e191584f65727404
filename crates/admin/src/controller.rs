//! The admin screen's state machine.
//!
//! ```text
//!            activate / submit / toggle_active
//!   Idle ───────────────────────────────────────► Loading
//!    ▲                                               │
//!    └────────── success (after full reload) ────────┤
//!    └────────── failure (notification) ─────────────┘
//! ```
//!
//! At most one operation is in flight: a second one issued meanwhile is
//! rejected with [`AdminError::Busy`] before any request is sent. After
//! [`PresetAdminController::dispose`], late responses are dropped without
//! touching state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lutshop_core::preset::{self, PresetRecord};
use tokio::sync::{mpsc, Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;

use crate::error::AdminError;
use crate::notification::{
    Notification, MSG_ACTIVATED, MSG_CREATED, MSG_HIDDEN, MSG_LOAD_FAILED, MSG_SAVE_FAILED,
    MSG_TOGGLE_FAILED, MSG_UPDATED, TITLE_STATUS_CHANGED, TITLE_SUCCESS,
};
use crate::repository::{Listing, PresetRepository};
use crate::state::{reconcile, AdminState};

/// Releases the single-flight flag when the operation holding it ends.
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Drives [`AdminState`] through list/create/update/toggle against a
/// [`PresetRepository`].
///
/// The state is mutated only here; the lock is never held across a request.
pub struct PresetAdminController {
    repository: Arc<dyn PresetRepository>,
    state: Mutex<AdminState>,
    in_flight: AtomicBool,
    activated: AtomicBool,
    lifetime: CancellationToken,
    notifications: mpsc::UnboundedSender<Notification>,
}

impl PresetAdminController {
    /// Create a controller and the receiving end of its notification channel.
    pub fn new(
        repository: Arc<dyn PresetRepository>,
    ) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (notifications, receiver) = mpsc::unbounded_channel();
        let controller = Self {
            repository,
            state: Mutex::new(AdminState::default()),
            in_flight: AtomicBool::new(false),
            activated: AtomicBool::new(false),
            lifetime: CancellationToken::new(),
            notifications,
        };
        (controller, receiver)
    }

    /// A snapshot of the current state.
    pub async fn state(&self) -> AdminState {
        self.state.lock().await.clone()
    }

    /// Initial load. Only the first call does anything.
    pub async fn activate(&self) -> Result<(), AdminError> {
        let _guard = self.claim()?;
        if self.activated.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        tracing::debug!("Activating preset admin");
        self.load_presets().await
    }

    /// Copy `record` into the form and mark it as the one being edited.
    pub async fn begin_edit(&self, record: &PresetRecord) {
        let mut state = self.state.lock().await;
        state.draft = record.clone();
        state.editing_id = record.id;
    }

    /// Apply a form change to the draft.
    pub async fn edit_draft(&self, edit: impl FnOnce(&mut PresetRecord)) {
        edit(&mut self.state.lock().await.draft);
    }

    /// Drop the draft and leave edit mode. Nothing prior is restored.
    pub async fn cancel_edit(&self) {
        self.state.lock().await.reset_form();
    }

    /// Create or update the draft, then reload the full list.
    ///
    /// On failure the draft and `editing_id` are left as they were so the
    /// user can retry, and a failure notification is emitted.
    pub async fn submit(&self) -> Result<(), AdminError> {
        let _guard = self.claim()?;

        let (draft, editing_id) = {
            let state = self.state.lock().await;
            (state.draft.clone(), state.editing_id)
        };
        preset::validate_submission(&draft).map_err(|e| AdminError::Invalid(e.to_string()))?;

        self.set_loading(true).await;
        let result = match editing_id {
            Some(id) => self.repository.update(id, &draft).await,
            None => self.repository.create(&draft).await.map(|_| ()),
        };
        if self.is_disposed() {
            tracing::debug!("Discarding submit response after dispose");
            return Err(AdminError::Disposed);
        }

        match result {
            Ok(()) => {
                self.live_state().await?.reset_form();
                let message = if editing_id.is_some() {
                    MSG_UPDATED
                } else {
                    MSG_CREATED
                };
                self.notify(Notification::info(TITLE_SUCCESS, message));
                // A failed reload is already notified; the save itself stands.
                let _ = self.load_presets().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, ?editing_id, "Preset submission failed");
                self.live_state().await?.is_loading = false;
                self.notify(Notification::failure(MSG_SAVE_FAILED));
                Err(e)
            }
        }
    }

    /// Flip `is_active` on a persisted record, then reload the full list.
    ///
    /// The local list is not touched until the reload, so a failed toggle
    /// leaves it exactly as it was.
    pub async fn toggle_active(&self, record: &PresetRecord) -> Result<(), AdminError> {
        let _guard = self.claim()?;
        let id = record
            .id
            .ok_or_else(|| AdminError::Invalid("Preset has not been saved yet".to_string()))?;

        let payload = record.with_active_toggled();
        self.set_loading(true).await;
        let result = self.repository.update(id, &payload).await;
        if self.is_disposed() {
            tracing::debug!(id, "Discarding toggle response after dispose");
            return Err(AdminError::Disposed);
        }

        match result {
            Ok(()) => {
                let message = if record.is_active {
                    MSG_HIDDEN
                } else {
                    MSG_ACTIVATED
                };
                self.notify(Notification::info(TITLE_STATUS_CHANGED, message));
                let _ = self.load_presets().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, id, "Preset toggle failed");
                self.live_state().await?.is_loading = false;
                self.notify(Notification::failure(MSG_TOGGLE_FAILED));
                Err(e)
            }
        }
    }

    /// End the controller's lifetime. In-flight responses are discarded and
    /// those operations, like any started later, fail with
    /// [`AdminError::Disposed`].
    pub fn dispose(&self) {
        tracing::debug!("Disposing preset admin controller");
        self.lifetime.cancel();
    }

    pub fn is_disposed(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    // ---- private helpers ----

    fn claim(&self) -> Result<FlightGuard<'_>, AdminError> {
        if self.is_disposed() {
            return Err(AdminError::Disposed);
        }
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| FlightGuard(&self.in_flight))
            .map_err(|_| {
                tracing::debug!("Rejecting preset operation while another is in flight");
                AdminError::Busy
            })
    }

    /// List and reconcile. The caller holds the flight guard.
    async fn load_presets(&self) -> Result<(), AdminError> {
        self.set_loading(true).await;
        let outcome = self.repository.list().await;
        let mut state = self.live_state().await?;
        match outcome {
            Ok(Listing::Loaded(presets)) => {
                tracing::debug!(count = presets.len(), "Reconciled preset list");
                *state = reconcile(&state, presets);
                Ok(())
            }
            Ok(Listing::Unavailable { status }) => {
                tracing::warn!(status, "Keeping previous preset list");
                state.is_loading = false;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Preset list failed");
                state.is_loading = false;
                drop(state);
                self.notify(Notification::failure(MSG_LOAD_FAILED));
                Err(e)
            }
        }
    }

    /// Lock the state for applying a response. Fails once disposed, including
    /// when `dispose` lands while waiting for the lock.
    async fn live_state(&self) -> Result<MutexGuard<'_, AdminState>, AdminError> {
        let state = self.state.lock().await;
        if self.is_disposed() {
            tracing::debug!("Discarding response after dispose");
            return Err(AdminError::Disposed);
        }
        Ok(state)
    }

    async fn set_loading(&self, is_loading: bool) {
        self.state.lock().await.is_loading = is_loading;
    }

    fn notify(&self, notification: Notification) {
        if self.is_disposed() {
            return;
        }
        // A dropped receiver only means nobody is showing toasts.
        let _ = self.notifications.send(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lutshop_core::types::DbId;
    use tokio::sync::Notify;

    /// Lists one record, signalling `listed` on entry and answering only
    /// once `release` fires.
    struct ParkedList {
        listed: Notify,
        release: Notify,
    }

    #[async_trait]
    impl PresetRepository for ParkedList {
        async fn list(&self) -> Result<Listing, AdminError> {
            self.listed.notify_one();
            self.release.notified().await;
            Ok(Listing::Loaded(vec![PresetRecord::default().with_id(1)]))
        }

        async fn create(&self, record: &PresetRecord) -> Result<PresetRecord, AdminError> {
            Ok(record.clone())
        }

        async fn update(&self, _id: DbId, _record: &PresetRecord) -> Result<(), AdminError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn dispose_while_response_waits_for_state_lock_discards_it() {
        let repo = Arc::new(ParkedList {
            listed: Notify::new(),
            release: Notify::new(),
        });
        let (controller, mut rx) = PresetAdminController::new(repo.clone());
        let controller = Arc::new(controller);

        let loading = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.activate().await })
        };
        repo.listed.notified().await;

        // Hold the state lock so the response queues behind it.
        let held = controller.state.lock().await;
        repo.release.notify_one();
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        controller.dispose();
        drop(held);

        assert!(matches!(loading.await.unwrap(), Err(AdminError::Disposed)));
        assert!(controller.state().await.presets.is_empty());
        assert!(rx.try_recv().is_err());
    }
}
