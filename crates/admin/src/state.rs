//! Observable admin screen state and list reconciliation.

use lutshop_core::preset::PresetRecord;
use lutshop_core::types::DbId;

/// Everything the admin screen renders from.
///
/// `is_loading` is the only phase flag; failures are reported through
/// notifications and never stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminState {
    /// Cached copy of the server's list. Never authoritative.
    pub presets: Vec<PresetRecord>,
    /// The edit form's contents.
    pub draft: PresetRecord,
    /// Id of the record being edited, `None` when the form creates.
    pub editing_id: Option<DbId>,
    pub is_loading: bool,
}

impl AdminState {
    /// Whether a submit will update an existing record rather than create one.
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Clear the form back to an empty create draft.
    pub fn reset_form(&mut self) {
        self.draft = PresetRecord::default();
        self.editing_id = None;
    }
}

/// Replace the cached list wholesale with the server's current list.
///
/// Runs after every successful listing regardless of which mutation, if any,
/// preceded it. The form is carried over untouched and the state returns to
/// idle.
pub fn reconcile(state: &AdminState, server_list: Vec<PresetRecord>) -> AdminState {
    AdminState {
        presets: server_list,
        draft: state.draft.clone(),
        editing_id: state.editing_id,
        is_loading: false,
    }
}
