#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lutshop_admin::{AdminError, Listing, Notification, PresetAdminController, PresetRepository};
use lutshop_core::preset::PresetRecord;
use lutshop_core::types::DbId;
use tokio::sync::{mpsc, Notify};

/// A request the controller made against the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(PresetRecord),
    Update(DbId, PresetRecord),
}

/// In-process stand-in for the collection resource.
///
/// Keeps a server-side list that create/update mutate, records every call,
/// and can be told to fail or to park list calls until released.
#[derive(Default)]
pub struct FakeRepository {
    pub server: Mutex<Vec<PresetRecord>>,
    pub calls: Mutex<Vec<Call>>,
    pub next_id: Mutex<DbId>,
    pub fail_list: AtomicBool,
    pub list_unavailable: AtomicBool,
    pub fail_create: AtomicBool,
    pub fail_update: AtomicBool,
    pub list_gate: Option<Arc<Notify>>,
}

impl FakeRepository {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(1),
            ..Self::default()
        }
    }

    /// List calls wait on `gate` before answering.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            list_gate: Some(gate),
            ..Self::new()
        }
    }

    pub fn with_server(self, records: Vec<PresetRecord>) -> Self {
        *self.server.lock().unwrap() = records;
        self
    }

    pub fn with_next_id(self, id: DbId) -> Self {
        *self.next_id.lock().unwrap() = id;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn server_list(&self) -> Vec<PresetRecord> {
        self.server.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::List))
            .collect()
    }
}

#[async_trait]
impl PresetRepository for FakeRepository {
    async fn list(&self) -> Result<Listing, AdminError> {
        self.calls.lock().unwrap().push(Call::List);
        if let Some(gate) = &self.list_gate {
            gate.notified().await;
        }
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(AdminError::Fetch("connection refused".to_string()));
        }
        if self.list_unavailable.load(Ordering::SeqCst) {
            return Ok(Listing::Unavailable { status: 503 });
        }
        Ok(Listing::Loaded(self.server_list()))
    }

    async fn create(&self, record: &PresetRecord) -> Result<PresetRecord, AdminError> {
        self.calls.lock().unwrap().push(Call::Create(record.clone()));
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(AdminError::Submit("HTTP 500".to_string()));
        }
        let id = {
            let mut next = self.next_id.lock().unwrap();
            let id = *next;
            *next += 1;
            id
        };
        let created = record.with_id(id);
        self.server.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: DbId, record: &PresetRecord) -> Result<(), AdminError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Update(id, record.clone()));
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(AdminError::Submit("network unreachable".to_string()));
        }
        let mut server = self.server.lock().unwrap();
        if let Some(row) = server.iter_mut().find(|r| r.id == Some(id)) {
            *row = record.with_id(id);
        }
        Ok(())
    }
}

/// A persisted record as the server would return it.
pub fn persisted(id: DbId, name: &str, is_active: bool) -> PresetRecord {
    PresetRecord {
        id: Some(id),
        name: name.to_string(),
        description: format!("{name} description"),
        price: 990,
        preset_file_url: format!("https://cdn/{id}.cube"),
        is_active,
        sort_order: id as i32,
        ..PresetRecord::default()
    }
}

pub fn controller(
    repository: Arc<FakeRepository>,
) -> (PresetAdminController, mpsc::UnboundedReceiver<Notification>) {
    PresetAdminController::new(repository)
}

/// Everything currently queued on the notification channel.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<Notification>) -> Vec<Notification> {
    let mut out = Vec::new();
    while let Ok(n) = rx.try_recv() {
        out.push(n);
    }
    out
}
