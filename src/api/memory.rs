//! In-memory [`NotesApi`] used by tests and the `--memory` demo mode.
//!
//! Nothing is persisted: the store lives as long as the value does. Every
//! call is recorded, and any endpoint can be made to fail with a chosen
//! status and message.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{NotesError, Result};
use crate::types::{Note, NoteDraft, NoteId};

use super::NotesApi;

/// The six endpoints, used to record calls and target failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListActive,
    ListArchived,
    Create,
    Delete,
    Archive,
    Unarchive,
}

#[derive(Debug, Default)]
struct Store {
    notes: Vec<Note>,
    calls: Vec<Endpoint>,
    failures: HashMap<Endpoint, (u16, Option<String>)>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryNotesApi {
    store: Arc<Mutex<Store>>,
}

impl InMemoryNotesApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given notes already stored
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let api = Self::new();
        api.store.lock().notes = notes;
        api
    }

    /// Make every call to `endpoint` fail with `status` until cleared
    pub fn fail(&self, endpoint: Endpoint, status: u16, message: Option<&str>) {
        self.store
            .lock()
            .failures
            .insert(endpoint, (status, message.map(str::to_string)));
    }

    pub fn clear_failures(&self) {
        self.store.lock().failures.clear();
    }

    /// Snapshot of every stored note, active and archived
    pub fn notes(&self) -> Vec<Note> {
        self.store.lock().notes.clone()
    }

    /// How many times `endpoint` was called
    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.store
            .lock()
            .calls
            .iter()
            .filter(|&&c| c == endpoint)
            .count()
    }

    fn begin(&self, endpoint: Endpoint) -> Result<parking_lot::MutexGuard<'_, Store>> {
        let mut store = self.store.lock();
        store.calls.push(endpoint);
        if let Some((status, message)) = store.failures.get(&endpoint) {
            return Err(NotesError::Service {
                status: *status,
                message: message.clone(),
            });
        }
        Ok(store)
    }

    fn set_archived(&self, endpoint: Endpoint, id: &NoteId, archived: bool) -> Result<()> {
        let mut store = self.begin(endpoint)?;
        let note = store
            .notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(not_found)?;
        note.archived = archived;
        Ok(())
    }
}

fn not_found() -> NotesError {
    NotesError::Service {
        status: 404,
        message: Some("Note is not found".to_string()),
    }
}

impl NotesApi for InMemoryNotesApi {
    async fn list_active(&self) -> Result<Vec<Note>> {
        let store = self.begin(Endpoint::ListActive)?;
        Ok(store.notes.iter().filter(|n| !n.archived).cloned().collect())
    }

    async fn list_archived(&self) -> Result<Vec<Note>> {
        let store = self.begin(Endpoint::ListArchived)?;
        Ok(store.notes.iter().filter(|n| n.archived).cloned().collect())
    }

    async fn create(&self, draft: &NoteDraft) -> Result<Note> {
        let mut store = self.begin(Endpoint::Create)?;
        let note = Note {
            id: NoteId::new(format!("notes-{}", uuid::Uuid::new_v4().simple())),
            title: draft.title.clone(),
            body: draft.body.clone(),
            created_at: jiff::Timestamp::now().to_string(),
            archived: false,
        };
        store.notes.push(note.clone());
        Ok(note)
    }

    async fn delete(&self, id: &NoteId) -> Result<Note> {
        let mut store = self.begin(Endpoint::Delete)?;
        let index = store
            .notes
            .iter()
            .position(|n| &n.id == id)
            .ok_or_else(not_found)?;
        Ok(store.notes.remove(index))
    }

    async fn archive(&self, id: &NoteId) -> Result<()> {
        self.set_archived(Endpoint::Archive, id, true)
    }

    async fn unarchive(&self, id: &NoteId) -> Result<()> {
        self.set_archived(Endpoint::Unarchive, id, false)
    }
}
